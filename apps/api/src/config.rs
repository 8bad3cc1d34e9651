use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
/// Fails at startup if the Gemini API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub request_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable source. `from_env` passes the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            gemini_api_key: require(&lookup, "GEMINI_API_KEY")
                .or_else(|_| require(&lookup, "API_KEY"))
                .context("Set GEMINI_API_KEY (or API_KEY) to a Gemini API key")?,
            gemini_model: var("GEMINI_MODEL", DEFAULT_MODEL),
            gemini_base_url: var("GEMINI_BASE_URL", DEFAULT_BASE_URL),
            request_timeout_secs: var("REQUEST_TIMEOUT_SECS", "120")
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            port: var("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG", "info"),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn require(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_apply_when_only_key_is_set() {
        let config = load(&[("GEMINI_API_KEY", "k-123")]).unwrap();
        assert_eq!(config.gemini_api_key, "k-123");
        assert_eq!(config.gemini_model, DEFAULT_MODEL);
        assert_eq!(config.gemini_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(120));
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_api_key_fallback() {
        let config = load(&[("API_KEY", "fallback")]).unwrap();
        assert_eq!(config.gemini_api_key, "fallback");

        let config = load(&[("GEMINI_API_KEY", "primary"), ("API_KEY", "fallback")]).unwrap();
        assert_eq!(config.gemini_api_key, "primary");
    }

    #[test]
    fn test_blank_primary_key_falls_back() {
        let config = load(&[("GEMINI_API_KEY", "  "), ("API_KEY", "fallback")]).unwrap();
        assert_eq!(config.gemini_api_key, "fallback");
    }

    #[test]
    fn test_missing_key_fails() {
        let err = load(&[("GEMINI_MODEL", "gemini-2.5-pro")]).unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_blank_key_fails() {
        assert!(load(&[("GEMINI_API_KEY", ""), ("API_KEY", "   ")]).is_err());
    }

    #[test]
    fn test_non_numeric_timeout_fails() {
        let err = load(&[("GEMINI_API_KEY", "k"), ("REQUEST_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("REQUEST_TIMEOUT_SECS"));
    }

    #[test]
    fn test_overrides_are_read() {
        let config = load(&[
            ("GEMINI_API_KEY", "k"),
            ("GEMINI_MODEL", "gemini-2.5-pro"),
            ("GEMINI_BASE_URL", "http://127.0.0.1:9999"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("PORT", "3000"),
        ])
        .unwrap();
        assert_eq!(config.gemini_model, "gemini-2.5-pro");
        assert_eq!(config.gemini_base_url, "http://127.0.0.1:9999");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.port, 3000);
    }
}
