// ABOUTME: Builder pattern implementation for PdcClient configuration
// ABOUTME: Provides type-safe configuration with required API root and optional token

use crate::PdcClient;
use crate::constants::{retry, timeouts};
use crate::error::PdcError;
use secrecy::SecretString;
use std::time::Duration;
use typed_builder::TypedBuilder;

#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = Result<PdcClient, PdcError>))]
pub struct PdcClientConfig {
    /// API root, e.g. `https://pdc.example.com/rest_api/v1/`
    #[builder(setter(into))]
    pub base_url: String,

    #[builder(default = None)]
    pub auth_token: Option<SecretString>,

    #[builder(default = timeouts::HTTP_REQUEST_TIMEOUT)]
    pub timeout: Duration,

    #[builder(default = retry::MAX_RETRIES)]
    pub max_retries: u32,

    #[builder(default = None)]
    pub page_size: Option<u32>,

    #[builder(default = true)]
    pub ssl_verify: bool,
}

impl From<PdcClientConfig> for Result<PdcClient, PdcError> {
    fn from(config: PdcClientConfig) -> Self {
        PdcClient::from_config(config)
    }
}

impl PdcClient {
    pub fn builder() -> PdcClientConfigBuilder<((), (), (), (), (), ())> {
        PdcClientConfig::builder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PdcClient;
    use crate::error::PdcError;
    use secrecy::SecretString;
    use std::time::Duration;

    #[test]
    fn test_builder_with_minimal_config() {
        let client = PdcClient::builder()
            .base_url("https://pdc.example.com/rest_api/v1/")
            .build()
            .unwrap();

        assert_eq!(
            client.base_url().as_str(),
            "https://pdc.example.com/rest_api/v1/"
        );
        assert_eq!(client.page_size(), None);
    }

    #[test]
    fn test_builder_with_all_options() {
        let token = SecretString::new("test-token".to_string().into_boxed_str());

        let client = PdcClient::builder()
            .base_url("https://pdc.example.com/rest_api/v1/")
            .auth_token(Some(token))
            .timeout(Duration::from_secs(60))
            .max_retries(5)
            .page_size(Some(100))
            .ssl_verify(false)
            .build()
            .unwrap();

        assert_eq!(client.page_size(), Some(100));
    }

    #[test]
    fn test_builder_appends_missing_trailing_slash() {
        let client = PdcClient::builder()
            .base_url("https://pdc.example.com/rest_api/v1")
            .build()
            .unwrap();

        assert_eq!(
            client.base_url().as_str(),
            "https://pdc.example.com/rest_api/v1/"
        );
    }

    #[test]
    fn test_builder_rejects_invalid_url() {
        let result = PdcClient::builder().base_url("not a url").build();

        match result {
            Err(PdcError::Configuration(msg)) => assert!(msg.contains("Invalid URL")),
            other => panic!("Expected configuration error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_config_uses_secrecy_for_token() {
        let token = SecretString::new("super-secret-token".to_string().into_boxed_str());
        let config = PdcClientConfig::builder()
            .base_url("https://pdc.example.com/rest_api/v1/")
            .auth_token(Some(token.clone()));

        let debug_str = format!("{:?}", token);
        assert!(!debug_str.contains("super-secret-token"));
        assert!(config.build().is_ok());
    }
}
