//! Configuration module
//!
//! Suite configuration resolved from defaults, environment variables and CLI
//! overrides, in that order.

mod env;

pub use env::{print_env_help, EnvBuilder, EnvConfig, EnvGuard};

/// Default API endpoint when none is configured
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved suite configuration
#[derive(Clone, Debug)]
pub struct SuiteConfig {
    /// Base API endpoint, no trailing slash
    pub endpoint: String,

    /// Bearer token for the valid credential set
    pub token: String,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SuiteConfig {
    /// Build configuration from environment variables over defaults
    pub fn from_env() -> Self {
        let env = EnvConfig::load();
        Self {
            endpoint: env.endpoint_or(DEFAULT_ENDPOINT),
            timeout_secs: env.timeout_or(DEFAULT_TIMEOUT_SECS),
            token: env.token.unwrap_or_default(),
        }
    }

    /// Override the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Override the timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Whether a bearer token was supplied
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SuiteConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(!config.has_token());
    }

    #[test]
    fn test_builder_overrides() {
        let config = SuiteConfig::default()
            .with_endpoint("http://127.0.0.1:9999")
            .with_token("t0ken")
            .with_timeout(5);

        assert_eq!(config.endpoint, "http://127.0.0.1:9999");
        assert_eq!(config.token, "t0ken");
        assert_eq!(config.timeout_secs, 5);
        assert!(config.has_token());
    }
}
