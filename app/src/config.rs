//! Application configuration.
//!
//! Values are layered: built-in defaults, then a `.env` file, then the
//! process environment, then command-line flags. The result is validated
//! once at startup and read-only afterwards.
//!
//! ## Variables
//!
//! - `NEWS_API_BASE_URL` - API base URL (default: `http://localhost:9000/api`)
//! - `LOG_FORMAT` - `text` or `json` (default: `text`)
//! - `RUST_LOG` - log filter (default: `warn`, `debug` with `--verbose`)

use anyhow::{anyhow, bail, Context, Result};
use clap::ValueEnum;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000/api";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub log_format: LogFormat,
    /// Default filter directive when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_format: LogFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Loads `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(base_url) = lookup("NEWS_API_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup("LOG_FORMAT") {
            config.log_format = LogFormat::from_str(raw.trim(), true)
                .map_err(|e| anyhow!("LOG_FORMAT must be `text` or `json`: {e}"))?;
        }
        Ok(config)
    }

    /// Ensures the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).with_context(|| format!("invalid base URL `{}`", self.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("base URL `{}` must use http or https", self.base_url);
        }
        if url.query().is_some() || url.fragment().is_some() {
            bail!("base URL `{}` must not carry a query or fragment", self.base_url);
        }
        Ok(())
    }
}
