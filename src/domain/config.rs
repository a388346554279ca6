//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the Matrix connection, the Sensu API and system settings.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    #[serde(default)]
    pub sensu: SensuConfig,
    #[serde(default)]
    pub system: SystemConfig,
}

impl AppConfig {
    /// Read and validate the YAML configuration at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| crate::strings::logs::config_read_error(&path.display().to_string()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: AppConfig =
            serde_yaml::from_str(content).context(crate::strings::logs::CONFIG_PARSE_ERROR)?;
        config.sensu.validate()?;
        Ok(config)
    }
}

/// Configuration for various connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub username: String,
    pub password: String,
    pub homeserver: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Connection settings for the Sensu API.
#[derive(Debug, Deserialize, Clone)]
pub struct SensuConfig {
    /// Host (optionally with scheme) of the API, e.g. `127.0.0.1` or `https://sensu.lan`.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_api_port")]
    pub api_port: u16,
    /// Suffix appended to bare hostnames.
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub api_user: Option<String>,
    #[serde(default)]
    pub api_pass: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for SensuConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_port: default_api_port(),
            domain: None,
            api_user: None,
            api_pass: None,
            timeout: default_timeout(),
        }
    }
}

impl SensuConfig {
    fn validate(&self) -> Result<()> {
        if self.api_port == 0 {
            bail!("sensu.api_port must be non-zero");
        }
        if self.timeout == 0 {
            bail!("sensu.timeout must be non-zero");
        }
        Ok(())
    }

    /// True when only one of `api_user` / `api_pass` is set, so auth is off.
    pub fn partial_credentials(&self) -> bool {
        self.api_user.is_some() != self.api_pass.is_some()
    }

    /// Basic-auth credentials, only when both halves are configured.
    pub fn credentials(&self) -> Option<(String, String)> {
        match (&self.api_user, &self.api_pass) {
            (Some(user), Some(pass)) => Some((user.trim().to_string(), pass.trim().to_string())),
            _ => None,
        }
    }

    /// The configured domain, ignoring an empty string.
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref().filter(|d| !d.is_empty())
    }

    /// Base URL of the API: `<scheme>://<api_url>:<api_port>`.
    pub fn base_url(&self) -> String {
        let host = self.api_url.trim_end_matches('/');
        if host.contains("://") {
            format!("{}:{}", host, self.api_port)
        } else {
            format!("http://{}:{}", host, self.api_port)
        }
    }

    /// Full URL for an API path such as `/clients`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}

fn default_api_url() -> String {
    "127.0.0.1".to_string()
}

fn default_api_port() -> u16 {
    4567
}

fn default_timeout() -> u64 {
    30
}

/// System-level settings for the bot.
#[derive(Debug, Deserialize, Clone)]
pub struct SystemConfig {
    /// Directory holding `session.log`.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Fallback filter directive when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_filter: None,
        }
    }
}

fn default_data_dir() -> String {
    "data".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"
services:
  matrix:
    username: sensubot
    password: hunter2
    homeserver: https://matrix.example.org
"#;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_yaml(MINIMAL).unwrap();
        assert_eq!(config.sensu.api_url, "127.0.0.1");
        assert_eq!(config.sensu.api_port, 4567);
        assert_eq!(config.sensu.timeout, 30);
        assert!(config.sensu.domain.is_none());
        assert!(config.sensu.credentials().is_none());
        assert_eq!(config.system.data_dir, "data");
        assert_eq!(config.sensu.base_url(), "http://127.0.0.1:4567");
    }

    #[test]
    fn test_full_sensu_section() {
        let yaml = format!(
            "{MINIMAL}sensu:\n  api_url: https://sensu.lan/\n  api_port: 8080\n  domain: example.com\n  api_user: \"admin\\n\"\n  api_pass: secret\n"
        );
        let config = AppConfig::from_yaml(&yaml).unwrap();
        assert_eq!(config.sensu.endpoint("/info"), "https://sensu.lan:8080/info");
        assert_eq!(config.sensu.domain(), Some("example.com"));
        assert_eq!(
            config.sensu.credentials(),
            Some(("admin".to_string(), "secret".to_string()))
        );
    }

    #[test]
    fn test_credentials_need_both_halves() {
        let sensu = SensuConfig {
            api_user: Some("admin".to_string()),
            ..SensuConfig::default()
        };
        assert!(sensu.credentials().is_none());
    }

    #[test]
    fn test_partial_credentials() {
        let user_only = SensuConfig {
            api_user: Some("admin".to_string()),
            ..SensuConfig::default()
        };
        assert!(user_only.partial_credentials());

        let both = SensuConfig {
            api_pass: Some("secret".to_string()),
            ..user_only
        };
        assert!(!both.partial_credentials());
        assert!(!SensuConfig::default().partial_credentials());
    }

    #[test]
    fn test_empty_domain_is_ignored() {
        let sensu = SensuConfig {
            domain: Some(String::new()),
            ..SensuConfig::default()
        };
        assert_eq!(sensu.domain(), None);
    }

    #[test]
    fn test_zero_port_rejected() {
        let yaml = format!("{MINIMAL}sensu:\n  api_port: 0\n");
        assert!(AppConfig::from_yaml(&yaml).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let yaml = format!("{MINIMAL}sensu:\n  timeout: 0\n");
        let err = AppConfig::from_yaml(&yaml).unwrap_err();
        assert!(err.to_string().contains("sensu.timeout"));
    }

    #[test]
    fn test_load_from_file() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, "{MINIMAL}")?;
        let config = AppConfig::load(file.path())?;
        assert_eq!(config.services.matrix.username, "sensubot");
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        assert!(AppConfig::load("/nonexistent/sensubot.yaml").is_err());
    }
}
