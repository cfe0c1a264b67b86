//! Client configuration.
//!
//! Values are layered: built-in defaults, then a TOML document, then
//! `SOAREP_*` environment variables. Callers (such as the CLI) may apply
//! their own overrides on top before building a registry.

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default server root.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9090";

/// Default whole-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout, in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding [`ClientConfig::base_url`].
pub const ENV_BASE_URL: &str = "SOAREP_BASE_URL";

/// Environment variable overriding [`ClientConfig::timeout_secs`].
pub const ENV_TIMEOUT_SECS: &str = "SOAREP_TIMEOUT_SECS";

/// Environment variable overriding [`ClientConfig::connect_timeout_secs`].
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "SOAREP_CONNECT_TIMEOUT_SECS";

/// Settings for talking to a repository server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Server root that resource templates are appended to.
    pub base_url: String,

    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,

    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,

    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: concat!("soarep-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::config(format!("invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a pretty TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Apply `SOAREP_*` overrides from the process environment.
    pub fn with_env(self) -> Result<Self> {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply `SOAREP_*` overrides using `lookup` in place of the environment.
    pub fn with_env_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = parse_secs(ENV_TIMEOUT_SECS, &secs)?;
        }
        if let Some(secs) = lookup(ENV_CONNECT_TIMEOUT_SECS) {
            self.connect_timeout_secs = parse_secs(ENV_CONNECT_TIMEOUT_SECS, &secs)?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check that the base URL parses and timeouts are non-zero.
    pub fn validate(&self) -> Result<()> {
        self.parsed_base_url()?;
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        if self.connect_timeout_secs == 0 {
            return Err(Error::config(
                "connect_timeout_secs must be greater than zero",
            ));
        }
        Ok(())
    }

    /// The base URL, parsed.
    pub fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_url(format!("{}: {e}", self.base_url)))?;
        if url.cannot_be_a_base() {
            return Err(Error::invalid_url(format!(
                "{} cannot be used as a base URL",
                self.base_url
            )));
        }
        Ok(url)
    }
}

fn parse_secs(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::config(format!("{key} must be a whole number of seconds, got {value:?}")))
}
