//! Server configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the server can start with zero
//! configuration for local development.

use std::net::SocketAddr;

use codechat_shared::constants::{DEFAULT_HTTP_PORT, MAX_BODY_BYTES};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address for the HTTP (axum) API server.
    /// Env: `PORT` (port only, bound on all interfaces) or `HTTP_ADDR`
    /// (full address, wins over `PORT`).
    /// Default: `0.0.0.0:3000`
    pub http_addr: SocketAddr,

    /// Largest JSON request body accepted, in bytes.
    /// Env: `MAX_BODY_BYTES`
    /// Default: 1 MiB
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: ([0, 0, 0, 0], DEFAULT_HTTP_PORT).into(),
            max_body_bytes: MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(port) = var("PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => config.http_addr.set_port(port),
                Err(_) => {
                    tracing::warn!(value = %port, "Invalid PORT, using default");
                }
            }
        }

        if let Some(addr) = var("HTTP_ADDR") {
            if let Ok(parsed) = addr.parse::<SocketAddr>() {
                config.http_addr = parsed;
            } else {
                tracing::warn!(
                    value = %addr,
                    "Invalid HTTP_ADDR, using default"
                );
            }
        }

        if let Some(val) = var("MAX_BODY_BYTES") {
            match val.parse::<usize>() {
                Ok(n) if n > 0 => config.max_body_bytes = n,
                _ => tracing::warn!(value = %val, "Invalid MAX_BODY_BYTES, using default"),
            }
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.http_addr, ([0, 0, 0, 0], 3000).into());
        assert_eq!(config.max_body_bytes, 1024 * 1024);
    }

    #[test]
    fn test_port_override() {
        let config = config_from(&[("PORT", "8081")]);
        assert_eq!(config.http_addr, ([0, 0, 0, 0], 8081).into());
    }

    #[test]
    fn test_http_addr_wins_over_port() {
        let config = config_from(&[("PORT", "8081"), ("HTTP_ADDR", "127.0.0.1:9000")]);
        assert_eq!(config.http_addr, ([127, 0, 0, 1], 9000).into());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("PORT", "not-a-port"),
            ("HTTP_ADDR", "nowhere"),
            ("MAX_BODY_BYTES", "0"),
        ]);
        assert_eq!(config.http_addr, ServerConfig::default().http_addr);
        assert_eq!(config.max_body_bytes, MAX_BODY_BYTES);
    }
}
