// ABOUTME: Centralized constants for the PDC CLI application
// ABOUTME: Contains column widths, report labels, config locations and environment variable names

/// Fixed-width layout of the text output
pub mod layout {
    /// Width of the file name column when the SHA256 column is shown
    pub const FILE_NAME_WIDTH: usize = 80;

    /// Width of the labels in the image detail report
    pub const DETAIL_LABEL_WIDTH: usize = 15;

    /// Width of the labels in the checksum block
    pub const CHECKSUM_LABEL_WIDTH: usize = 7;

    /// Timestamp format for the "Modified" line
    pub const MTIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Column headers and user-facing messages
pub mod messages {
    pub const FILE_NAME_HEADER: &str = "File-Name";
    pub const SHA256_HEADER: &str = "SHA256";
    pub const NULL_VALUE: &str = "None";

    pub const NOT_FOUND: &str = "Not found";
    pub const AMBIGUOUS: &str = "More than one image with that name, use --sha256 to specify.";

    pub const INFO_DESCRIPTION: &str = "Generally there may be duplicate file names. If the file name \
you provide matches more than one image, you will get a list of all those images together with \
their SHA256 checksums. You disambiguate by providing the checksum as a command line argument.";
}

/// Configuration file locations
pub mod config_files {
    /// System-wide configuration, lowest precedence
    pub const SYSTEM_CONFIG: &str = "/etc/pdc.d/config.toml";

    /// Directory name under the user config directory
    pub const APP_DIR: &str = "pdc-cli";

    pub const FILE_NAME: &str = "config.toml";

    /// Project-local configuration, highest precedence
    pub const PROJECT_CONFIG: &str = "pdc-cli.toml";
}

/// Environment variables read by the CLI
pub mod env_vars {
    pub const SERVER: &str = "PDC_SERVER";
    pub const TOKEN: &str = "PDC_TOKEN";
}

/// Exit status for commands that ran but could not produce a result
pub const EXIT_FAILURE: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        assert_eq!(layout::FILE_NAME_WIDTH, 80);
        assert_eq!(layout::DETAIL_LABEL_WIDTH, 15);
        assert_eq!(layout::CHECKSUM_LABEL_WIDTH, 7);
    }

    #[test]
    fn test_messages() {
        assert_eq!(messages::NOT_FOUND, "Not found");
        assert!(messages::AMBIGUOUS.contains("--sha256"));
        assert!(messages::INFO_DESCRIPTION.contains("SHA256"));
    }

    #[test]
    fn test_config_locations() {
        assert!(config_files::SYSTEM_CONFIG.starts_with("/etc/"));
        assert!(config_files::PROJECT_CONFIG.ends_with(".toml"));
        assert_eq!(env_vars::TOKEN, "PDC_TOKEN");
    }
}
