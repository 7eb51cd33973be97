/**
 * Server Configuration
 *
 * This module loads and validates server configuration from environment
 * variables, once, before any request is accepted.
 *
 * # Error Handling
 *
 * All required variables are checked together so a single startup failure
 * lists everything that is missing. Configuration errors at startup are
 * fatal (the binary exits); the auth gate additionally treats a missing
 * signing secret discovered mid-request as a per-request 500.
 */

use thiserror::Error;

/// Required environment variables, checked together at startup.
const REQUIRED_VARS: [&str; 5] = [
    "DATABASE_URL",
    "STREAM_API_KEY",
    "STREAM_API_SECRET",
    "JWT_SECRET",
    "SERVER_PORT",
];

/// Typed server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Chat provider API key
    pub stream_api_key: String,
    /// Chat provider API secret (signs provider tokens)
    pub stream_api_secret: String,
    /// Session-token signing secret
    pub jwt_secret: String,
    /// HTTP listen port
    pub port: u16,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVars(Vec<String>),
    #[error("invalid SERVER_PORT: {0}")]
    InvalidPort(String),
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let missing: Vec<String> = REQUIRED_VARS
            .iter()
            .filter(|name| lookup(name).map_or(true, |v| v.is_empty()))
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing));
        }

        let raw_port = lookup("SERVER_PORT").unwrap_or_default();
        let port = raw_port
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(raw_port))?;

        Ok(ServerConfig {
            database_url: lookup("DATABASE_URL").unwrap_or_default(),
            stream_api_key: lookup("STREAM_API_KEY").unwrap_or_default(),
            stream_api_secret: lookup("STREAM_API_SECRET").unwrap_or_default(),
            jwt_secret: lookup("JWT_SECRET").unwrap_or_default(),
            port,
        })
    }

    /// The signing secret, or `None` when it is not configured.
    ///
    /// The gate maps `None` to a 500 "Server configuration error" instead
    /// of crashing mid-request.
    pub fn session_secret(&self) -> Option<&str> {
        if self.jwt_secret.is_empty() {
            None
        } else {
            Some(&self.jwt_secret)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("DATABASE_URL", "postgres://localhost/chatlink"),
            ("STREAM_API_KEY", "key"),
            ("STREAM_API_SECRET", "secret"),
            ("JWT_SECRET", "jwt-secret"),
            ("SERVER_PORT", "3000"),
        ])
    }

    #[test]
    fn test_full_config_loads() {
        let env = full_env();
        let config = ServerConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.session_secret(), Some("jwt-secret"));
    }

    #[test]
    fn test_all_missing_vars_reported() {
        let result = ServerConfig::from_lookup(|_| None);
        match result.unwrap_err() {
            ConfigError::MissingVars(missing) => {
                assert_eq!(missing.len(), 5);
                assert!(missing.contains(&"JWT_SECRET".to_string()));
                assert!(missing.contains(&"SERVER_PORT".to_string()));
            }
            other => panic!("expected MissingVars, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let mut env = full_env();
        env.insert("JWT_SECRET", "");
        let result = ServerConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        match result.unwrap_err() {
            ConfigError::MissingVars(missing) => assert_eq!(missing, vec!["JWT_SECRET"]),
            other => panic!("expected MissingVars, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_port() {
        let mut env = full_env();
        env.insert("SERVER_PORT", "not-a-port");
        let result = ServerConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidPort(_))));
    }
}
