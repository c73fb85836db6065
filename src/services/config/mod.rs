//! Startup configuration from the process environment.

use std::time::Duration;

use crate::types::errors::ConfigError;

/// Environment variable holding the CurseForge API key.
pub const API_KEY_VAR: &str = "CURSEFORGE_API_KEY";

/// Default timeout for catalog lookup requests, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Static credential for the CurseForge fingerprint endpoint.
    pub curseforge_api_key: String,
    /// Applied to every catalog request.
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Load configuration, reading a `.env` file first if one is present.
    ///
    /// An unset or empty API key is a hard error; the fingerprint catalog
    /// rejects unauthenticated requests, so there is nothing useful to run.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv(); // .env is optional

        let key = std::env::var(API_KEY_VAR).unwrap_or_default();
        if key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey(API_KEY_VAR));
        }

        Ok(Self {
            curseforge_api_key: key,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test covers both branches: the key variable is process-global
    // state, so set/unset must not race across test threads.
    #[test]
    fn from_env_requires_api_key() {
        std::env::set_var(API_KEY_VAR, "test-key-123");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.curseforge_api_key, "test-key-123");
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        std::env::set_var(API_KEY_VAR, "   ");
        assert!(AppConfig::from_env().is_err());

        std::env::remove_var(API_KEY_VAR);
        assert!(AppConfig::from_env().is_err());
    }
}
