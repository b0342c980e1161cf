//! Environment-based configuration.
//!
//! Read once at startup:
//!
//! - `TRACKER_ADDR` - listen address, defaults to `0.0.0.0:3000`
//! - `TRACKER_TOKENS` - comma-separated `token:user` pairs for the session
//!   registry, e.g. `s3cret:user_1,other:user_2`
//! - `RUST_LOG` - log filter, consumed by the tracing subscriber

use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid listen address {0:?}")]
    InvalidAddr(String),

    #[error("Invalid token entry {0:?}, expected token:user")]
    InvalidToken(String),
}

/// Startup configuration for the service.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    /// `(token, user_id)` pairs for the session registry.
    pub tokens: Vec<(String, String)>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = std::env::var("TRACKER_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let addr: SocketAddr = addr.parse().map_err(|_| ConfigError::InvalidAddr(addr))?;

        let tokens = match std::env::var("TRACKER_TOKENS") {
            Ok(raw) => parse_tokens(&raw)?,
            Err(_) => Vec::new(),
        };

        Ok(Self { addr, tokens })
    }
}

fn parse_tokens(raw: &str) -> Result<Vec<(String, String)>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once(':') {
            Some((token, user)) if !token.is_empty() && !user.is_empty() => {
                Ok((token.to_string(), user.to_string()))
            }
            _ => Err(ConfigError::InvalidToken(entry.to_string())),
        })
        .collect()
}
