// ABOUTME: Centralized constants for the PDC SDK
// ABOUTME: Contains retry configuration, timeouts, endpoint paths and header values

/// Retry configuration constants
pub mod retry {
    use std::time::Duration;

    /// Maximum number of retry attempts
    pub const MAX_RETRIES: u32 = 3;

    /// Initial delay before first retry
    pub const INITIAL_DELAY: Duration = Duration::from_millis(100);

    /// Maximum delay between retries
    pub const MAX_DELAY: Duration = Duration::from_secs(10);

    /// Backoff multiplier for exponential backoff
    pub const BACKOFF_MULTIPLIER: f64 = 2.0;
}

/// HTTP and request timeouts
pub mod timeouts {
    use std::time::Duration;

    /// Default timeout for HTTP requests
    pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

/// REST endpoint paths, relative to the API root
pub mod endpoints {
    pub const IMAGES: &str = "images/";
}

/// Query parameter names used for pagination
pub mod paging {
    pub const PAGE: &str = "page";
    pub const PAGE_SIZE: &str = "page_size";
}

/// HTTP header values
pub mod headers {
    pub const USER_AGENT: &str = concat!("pdc-cli/", env!("CARGO_PKG_VERSION"));

    /// Scheme used by the PDC token authentication backend
    pub const TOKEN_SCHEME: &str = "Token";
}

/// Error handling constants
pub mod errors {
    /// Server error status code range
    pub const SERVER_ERROR_MIN: u16 = 500;
    pub const SERVER_ERROR_MAX: u16 = 599;

    /// Longest response body excerpt kept in error messages
    pub const MAX_BODY_EXCERPT: usize = 200;
}
