// ABOUTME: Configuration file loading, validation, and hierarchical merging for the PDC CLI
// ABOUTME: Resolves named PDC servers from TOML config files and builds the API client

use anyhow::{Context, Result, anyhow};
use pdc_sdk::constants::timeouts;
use pdc_sdk::{PdcClient, PdcError};
use secrecy::SecretString;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::config_files;

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub default_server: Option<String>,
    #[serde(default)]
    pub servers: HashMap<String, ServerConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    /// API root, e.g. `https://pdc.fedoraproject.org/rest_api/v1/`
    pub host: String,
    #[serde(default = "default_ssl_verify")]
    pub ssl_verify: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Per-invocation settings that take precedence over the server section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOverrides {
    pub token: Option<String>,
    pub page_size: Option<u32>,
    pub insecure: bool,
}

fn default_ssl_verify() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard locations
    pub fn load() -> Result<Self> {
        let paths = Self::get_config_paths();
        Self::load_from_paths(&paths)
    }

    /// Load configuration from file paths ordered from lowest to highest
    /// precedence. Missing files are skipped; unreadable or invalid ones are
    /// an error.
    pub fn load_from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut config = Config::default();

        for path in paths {
            let path = path.as_ref();
            if !path.exists() {
                continue;
            }
            log::debug!("Loading config from {}", path.display());
            config = config.merge(Self::load_from_file(path)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse TOML config file: {}",
                path.as_ref().display()
            )
        })?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        Ok(config)
    }

    /// Standard config file paths, lowest precedence first
    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(config_files::SYSTEM_CONFIG)];

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(
                home_dir
                    .join(".config")
                    .join(config_files::APP_DIR)
                    .join(config_files::FILE_NAME),
            );
        }

        if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
            paths.push(
                PathBuf::from(config_home)
                    .join(config_files::APP_DIR)
                    .join(config_files::FILE_NAME),
            );
        }

        if let Ok(current_dir) = std::env::current_dir() {
            paths.push(current_dir.join(config_files::PROJECT_CONFIG));
        }

        paths.dedup();
        paths
    }

    /// Merge this config with another, giving precedence to the other config
    pub fn merge(mut self, other: Config) -> Config {
        self.servers.extend(other.servers);
        Config {
            default_server: other.default_server.or(self.default_server),
            servers: self.servers,
        }
    }

    /// Validate every server section
    pub fn validate(&self) -> Result<()> {
        for (name, server) in &self.servers {
            server
                .validate()
                .with_context(|| format!("Invalid server '{}'", name))?;
        }

        Ok(())
    }

    /// Pick the server to talk to: `requested` (from `--server`) wins over
    /// `default_server`. A value containing `://` is taken as the API root.
    pub fn resolve_server(&self, requested: Option<&str>) -> Result<ServerConfig, PdcError> {
        let name = requested
            .or(self.default_server.as_deref())
            .ok_or_else(|| PdcError::Configuration("No PDC server specified".to_string()))?;

        if is_url(name) {
            return Ok(ServerConfig::from_url(name));
        }

        self.servers.get(name).cloned().ok_or_else(|| {
            PdcError::Configuration(format!("Server '{}' not found in configuration", name))
        })
    }
}

impl ServerConfig {
    pub fn from_url(host: &str) -> Self {
        Self {
            host: host.to_string(),
            ssl_verify: true,
            token: None,
            page_size: None,
            timeout_secs: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !is_url(&self.host) {
            return Err(anyhow!(
                "host '{}' must be a URL such as https://pdc.example.com/rest_api/v1/",
                self.host
            ));
        }
        if self.page_size == Some(0) {
            return Err(anyhow!("page_size must be at least 1"));
        }
        if self.timeout_secs == Some(0) {
            return Err(anyhow!("timeout_secs must be at least 1"));
        }
        Ok(())
    }

    /// Build the API client for this server.
    pub fn build_client(&self, overrides: &ClientOverrides) -> Result<PdcClient, PdcError> {
        let token = overrides.token.clone().or_else(|| self.token.clone());
        let timeout = self
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(timeouts::HTTP_REQUEST_TIMEOUT);

        PdcClient::builder()
            .base_url(self.host.clone())
            .auth_token(token.map(|t| SecretString::new(t.into_boxed_str())))
            .timeout(timeout)
            .page_size(overrides.page_size.or(self.page_size))
            .ssl_verify(self.ssl_verify && !overrides.insecure)
            .build()
    }
}

fn is_url(value: &str) -> bool {
    value.contains("://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(host: &str) -> ServerConfig {
        ServerConfig::from_url(host)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.default_server.is_none());
        assert!(config.servers.is_empty());
    }

    #[test]
    fn test_merge_configs() {
        let mut base = Config {
            default_server: Some("prod".to_string()),
            ..Default::default()
        };
        base.servers
            .insert("prod".to_string(), server("https://pdc.example.com/"));
        base.servers
            .insert("stage".to_string(), server("https://stage.example.com/"));

        let mut override_config = Config::default();
        override_config
            .servers
            .insert("stage".to_string(), server("https://stage2.example.com/"));

        let merged = base.merge(override_config);
        assert_eq!(merged.default_server, Some("prod".to_string()));
        assert_eq!(merged.servers.len(), 2);
        assert_eq!(merged.servers["stage"].host, "https://stage2.example.com/");
    }

    #[test]
    fn test_resolve_server_by_name_and_default() {
        let mut config = Config {
            default_server: Some("prod".to_string()),
            ..Default::default()
        };
        config
            .servers
            .insert("prod".to_string(), server("https://pdc.example.com/"));
        config
            .servers
            .insert("stage".to_string(), server("https://stage.example.com/"));

        assert_eq!(
            config.resolve_server(None).unwrap().host,
            "https://pdc.example.com/"
        );
        assert_eq!(
            config.resolve_server(Some("stage")).unwrap().host,
            "https://stage.example.com/"
        );
    }

    #[test]
    fn test_resolve_server_literal_url() {
        let config = Config::default();
        let resolved = config
            .resolve_server(Some("http://localhost:8000/rest_api/v1/"))
            .unwrap();
        assert_eq!(resolved.host, "http://localhost:8000/rest_api/v1/");
        assert!(resolved.ssl_verify);
        assert!(resolved.token.is_none());
    }

    #[test]
    fn test_resolve_server_errors() {
        let config = Config::default();
        assert!(matches!(
            config.resolve_server(None),
            Err(PdcError::Configuration(_))
        ));
        assert!(matches!(
            config.resolve_server(Some("missing")),
            Err(PdcError::Configuration(msg)) if msg.contains("missing")
        ));
    }

    #[test]
    fn test_server_validation() {
        assert!(server("https://pdc.example.com/").validate().is_ok());
        assert!(server("pdc.example.com").validate().is_err());

        let mut zero_page = server("https://pdc.example.com/");
        zero_page.page_size = Some(0);
        assert!(zero_page.validate().is_err());
    }

    #[test]
    fn test_build_client_applies_overrides() {
        let mut config = server("https://pdc.example.com/rest_api/v1");
        config.page_size = Some(20);
        config.token = Some("from-config".to_string());

        let client = config.build_client(&ClientOverrides::default()).unwrap();
        assert_eq!(client.page_size(), Some(20));
        assert_eq!(
            client.base_url().as_str(),
            "https://pdc.example.com/rest_api/v1/"
        );

        let overrides = ClientOverrides {
            token: Some("from-env".to_string()),
            page_size: Some(100),
            insecure: true,
        };
        let client = config.build_client(&overrides).unwrap();
        assert_eq!(client.page_size(), Some(100));
    }
}
