//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "GIST_SUITE";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// API endpoint from GIST_SUITE_ENDPOINT
    pub endpoint: Option<String>,
    /// Bearer token from GIST_SUITE_TOKEN
    pub token: Option<String>,
    /// Timeout from GIST_SUITE_TIMEOUT
    pub timeout: Option<u64>,
    /// Output format from GIST_SUITE_FORMAT
    pub format: Option<String>,
    /// Verbose from GIST_SUITE_VERBOSE
    pub verbose: Option<bool>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            endpoint: get_env("ENDPOINT"),
            token: get_env("TOKEN"),
            timeout: get_env_parse("TIMEOUT"),
            format: get_env("FORMAT"),
            verbose: get_env_bool("VERBOSE"),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.endpoint.is_some()
            || self.token.is_some()
            || self.timeout.is_some()
            || self.format.is_some()
            || self.verbose.is_some()
    }

    /// Get endpoint with fallback
    pub fn endpoint_or(&self, default: &str) -> String {
        self.endpoint.clone().unwrap_or_else(|| default.to_string())
    }

    /// Get timeout with fallback
    pub fn timeout_or(&self, default: u64) -> u64 {
        self.timeout.unwrap_or(default)
    }

    /// Get output format with fallback
    pub fn format_or(&self, default: &str) -> String {
        self.format.clone().unwrap_or_else(|| default.to_string())
    }

    /// Get verbose flag with fallback
    pub fn verbose_or(&self, default: bool) -> bool {
        self.verbose.unwrap_or(default)
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get environment variable and parse to type
fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    get_env(name).and_then(|v| v.parse().ok())
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}

/// Print all GIST_SUITE environment variables
pub fn print_env_help() {
    println!("Environment Variables:");
    println!();
    println!("  {ENV_PREFIX}_ENDPOINT    Base API endpoint (default: https://api.github.com)");
    println!("  {ENV_PREFIX}_TOKEN       Bearer token for the valid credential set");
    println!("  {ENV_PREFIX}_TIMEOUT     Request timeout in seconds");
    println!("  {ENV_PREFIX}_FORMAT      Output format (table, json, json-pretty, csv, summary)");
    println!("  {ENV_PREFIX}_VERBOSE     Enable verbose output (true/false)");
    println!();
    println!("Example:");
    println!("  export {ENV_PREFIX}_TOKEN=ghp_xxxxxxxx");
    println!("  gist-suite run --all");
}

/// Builder for setting environment variables (useful for testing)
pub struct EnvBuilder {
    vars: Vec<(String, String)>,
}

impl EnvBuilder {
    /// Create a new environment builder
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Set API endpoint
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_ENDPOINT"), endpoint.into()));
        self
    }

    /// Set bearer token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_TOKEN"), token.into()));
        self
    }

    /// Set timeout
    pub fn timeout(mut self, secs: u64) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_TIMEOUT"), secs.to_string()));
        self
    }

    /// Set output format
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_FORMAT"), format.into()));
        self
    }

    /// Set verbose flag
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_VERBOSE"), verbose.to_string()));
        self
    }

    /// Apply environment variables
    pub fn apply(self) {
        for (key, value) in self.vars {
            env::set_var(key, value);
        }
    }

    /// Apply and return guard that restores on drop
    pub fn apply_scoped(self) -> EnvGuard {
        let previous: Vec<_> = self
            .vars
            .iter()
            .map(|(k, _)| (k.clone(), env::var(k).ok()))
            .collect();

        self.apply();

        EnvGuard { previous }
    }
}

impl Default for EnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard that restores environment variables on drop
pub struct EnvGuard {
    previous: Vec<(String, Option<String>)>,
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.previous {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }
}
