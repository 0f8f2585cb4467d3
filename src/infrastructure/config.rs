//! Server configuration loaded from the environment

use std::net::SocketAddr;

use thiserror::Error;

/// Port used when `PORT` is unset or empty
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Runtime configuration for the server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// `PORT` selects the listen port. Unset or empty falls back to
    /// [`DEFAULT_PORT`]; a non-numeric value is a startup error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok())?;
        Ok(Self { port })
    }

    /// Listen address on all interfaces
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_port(raw: Option<String>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) if value.is_empty() => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|source| ConfigError::InvalidPort { value, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_port_falls_back_to_default() {
        assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn empty_port_falls_back_to_default() {
        assert_eq!(parse_port(Some(String::new())).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn numeric_port_is_used() {
        assert_eq!(parse_port(Some("9090".to_string())).unwrap(), 9090);
    }

    #[test]
    fn malformed_port_is_rejected() {
        let err = parse_port(Some("not-a-port".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn addr_binds_all_interfaces() {
        let config = ServerConfig { port: 9090 };
        assert_eq!(config.addr().to_string(), "0.0.0.0:9090");
    }
}
