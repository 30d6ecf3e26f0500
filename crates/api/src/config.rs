//! Application configuration loaded from environment variables.

use thiserror::Error;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Errors raised while reading configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PORT value {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `5000`)
///
/// The tracing filter comes from `RUST_LOG` and is read by the subscriber
/// directly.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// An unparsable `PORT` is reported and replaced by the default.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let port = match var("PORT") {
            Some(raw) => parse_port(&raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, port = DEFAULT_PORT, "falling back to default port");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| ConfigError::InvalidPort {
            value: raw.to_string(),
            reason: e.to_string(),
        })
}
