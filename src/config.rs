//! Gate configuration: the two endpoints the flow talks to.
//!
//! Defaults are compiled in. Native builds can override them from the
//! environment (and a `.env` file); the browser entry point takes an optional
//! backend URL from the hosting page.

use crate::core::constants::endpoints;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {name}: {reason}")]
    InvalidUrl { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    pub terms_url: String,
    pub backend_url: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            terms_url: endpoints::TERMS_URL.to_string(),
            backend_url: endpoints::BUILD_BACKEND_URL
                .unwrap_or(endpoints::DEFAULT_BACKEND_URL)
                .to_string(),
        }
    }
}

impl GateConfig {
    pub fn new() -> Self { Self::default() }
    pub fn with_terms_url(mut self, url: impl Into<String>) -> Self { self.terms_url = url.into(); self }
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self { self.backend_url = url.into(); self }

    /// Both endpoints must be absolute http(s) URLs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("terms_url", &self.terms_url)?;
        check_url("backend_url", &self.backend_url)
    }

    /// Defaults overridden by `WALLETGATE_TERMS_URL` / `WALLETGATE_BACKEND_URL`.
    #[cfg(feature = "native")]
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        let mut config = Self::default();
        if let Some(url) = env_value("WALLETGATE_TERMS_URL") {
            config.terms_url = url;
        }
        if let Some(url) = env_value("WALLETGATE_BACKEND_URL") {
            config.backend_url = url;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(feature = "native")]
fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn check_url(name: &'static str, value: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl { name, reason: e.to_string() })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidUrl { name, reason: format!("unsupported scheme '{other}'") }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GateConfig::default();
        assert_eq!(config.terms_url, endpoints::TERMS_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_relative_and_non_http() {
        let relative = GateConfig::new().with_backend_url("/api/authorize");
        assert!(relative.validate().is_err());

        let ftp = GateConfig::new().with_terms_url("ftp://example.com/tandc");
        let err = ftp.validate().unwrap_err();
        assert!(err.to_string().contains("terms_url"));
    }
}
