use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use axum::http::HeaderValue;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR `{value}` is not a valid socket address")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error("FRONTEND_URL `{0}` is not a valid origin header value")]
    InvalidFrontendUrl(String),
}

/// Runtime settings read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub environment: String,
    pub frontend_url: Option<HeaderValue>,
    pub static_dir: Option<PathBuf>,
    pub sentry_dsn: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_value = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_value.clone(),
                source,
            })?;

        let frontend_url = match get("FRONTEND_URL") {
            Some(url) => Some(
                HeaderValue::from_str(url.trim_end_matches('/'))
                    .map_err(|_| ConfigError::InvalidFrontendUrl(url.clone()))?,
            ),
            None => None,
        };

        Ok(Self {
            bind_addr,
            // for dev its 'development' and for prod anything else
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            frontend_url,
            static_dir: get("STATIC_DIR").map(PathBuf::from),
            sentry_dsn: get("SENTRY_DSN"),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert!(config.is_development());
        assert!(config.frontend_url.is_none());
        assert!(config.static_dir.is_none());
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn production_settings_are_read() {
        let config = config_from(&[
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("ENVIRONMENT", "production"),
            ("FRONTEND_URL", "https://jsskyline.com/"),
            ("STATIC_DIR", "frontend/dist"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert!(!config.is_development());
        assert_eq!(config.frontend_url.unwrap(), "https://jsskyline.com");
        assert_eq!(config.static_dir.unwrap(), PathBuf::from("frontend/dist"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("BIND_ADDR", "  "), ("SENTRY_DSN", "")]).unwrap();
        assert_eq!(config.bind_addr.port(), 3000);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = config_from(&[("BIND_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    }

    #[test]
    fn rejects_bad_frontend_url() {
        let err = config_from(&[("FRONTEND_URL", "https://bad\nhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFrontendUrl(_)));
    }
}
