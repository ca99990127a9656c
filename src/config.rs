//! # Plugin Configuration
//!
//! Plugin-level settings loaded from environment variables.

use std::time::Duration;

/// Plugin-level configuration
///
/// All settings have sensible defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    /// Width at which compact label, annotation and property lists are cut
    pub truncate_at: usize,
    /// Read timeout for Kubernetes API requests (seconds)
    pub request_timeout_secs: u64,
    /// Connect timeout for the Kubernetes API server (seconds)
    pub connect_timeout_secs: u64,
    /// Log level (error, warn, info, debug, trace) used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        use crate::constants::*;
        Self {
            truncate_at: DEFAULT_TRUNCATE_AT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl PluginConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        use crate::constants::*;
        Self {
            truncate_at: env_var_or_default("KN_KAMELET_TRUNCATE_AT", DEFAULT_TRUNCATE_AT),
            request_timeout_secs: env_var_or_default(
                "KN_KAMELET_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            ),
            connect_timeout_secs: env_var_or_default(
                "KN_KAMELET_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
            log_level: env_var_or_default_str("KN_KAMELET_LOG_LEVEL", DEFAULT_LOG_LEVEL)
                .to_lowercase(),
        }
    }

    /// Get request timeout duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Get connect timeout duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Read environment variable or return default value
fn env_var_or_default<T: std::str::FromStr>(key: &str, default: T) -> T
where
    <T as std::str::FromStr>::Err: std::fmt::Debug,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Read environment variable as string or return default
fn env_var_or_default_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
