//! Gateway Settings
//!
//! Environment-driven configuration for credentials, upstream base URLs,
//! CORS, and the listen address.

use crate::error::{GatewayError, Result};
use axum::http::HeaderValue;

/// Default cricket provider base URL
pub const CRICKET_BASE_URL: &str = "https://api.cricapi.com/v1";

/// Default football provider base URL
pub const FOOTBALL_BASE_URL: &str = "https://api.football-data.org/v4";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Runtime configuration for the gateway
#[derive(Debug, Clone)]
pub struct Settings {
    /// Credential sent to the cricket provider as the `apikey` query parameter
    pub cricket_api_key: String,

    /// Credential sent to the football provider as the `X-Auth-Token` header
    pub football_api_key: String,

    /// Cricket provider base URL
    pub cricket_base_url: String,

    /// Football provider base URL
    pub football_base_url: String,

    /// Allowed CORS origins; `None` means any origin
    pub cors_origins: Option<Vec<String>>,

    /// Listen host
    pub host: String,

    /// Listen port
    pub port: u16,
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let cricket_api_key = require(&lookup, "CRICKET_API_KEY")?;
        let football_api_key = require(&lookup, "FOOTBALL_API_KEY")?;

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => None,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid PORT '{}': {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            cricket_api_key,
            football_api_key,
            cricket_base_url: lookup("CRICKET_BASE_URL")
                .unwrap_or_else(|| CRICKET_BASE_URL.to_string()),
            football_base_url: lookup("FOOTBALL_BASE_URL")
                .unwrap_or_else(|| FOOTBALL_BASE_URL.to_string()),
            cors_origins,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    /// Socket address to bind the inbound listener on
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn require(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String> {
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            GatewayError::Config(format!("Missing required environment variable {}", name))
        })
}

/// Parse a comma-separated origin list; `*` anywhere means any origin.
///
/// Origins that cannot become a header value are a configuration error, not
/// something to drop silently.
fn parse_origins(raw: &str) -> Result<Option<Vec<String>>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return Ok(None);
    }

    for origin in &origins {
        if HeaderValue::from_str(origin).is_err() {
            return Err(GatewayError::Config(format!(
                "Invalid CORS origin '{}'",
                origin
            )));
        }
    }

    Ok(Some(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("CRICKET_API_KEY", "ck"),
            ("FOOTBALL_API_KEY", "fk"),
        ]))
        .unwrap();

        assert_eq!(settings.cricket_base_url, CRICKET_BASE_URL);
        assert_eq!(settings.football_base_url, FOOTBALL_BASE_URL);
        assert_eq!(settings.cors_origins, None);
        assert_eq!(settings.listen_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_missing_key_fails() {
        let result = Settings::from_lookup(lookup_from(&[("CRICKET_API_KEY", "ck")]));
        assert!(result.is_err());

        // Empty values count as missing
        let result = Settings::from_lookup(lookup_from(&[
            ("CRICKET_API_KEY", "ck"),
            ("FOOTBALL_API_KEY", ""),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_cors_origin_list() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("CRICKET_API_KEY", "ck"),
            ("FOOTBALL_API_KEY", "fk"),
            ("CORS_ORIGINS", "https://a.example, https://b.example"),
        ]))
        .unwrap();

        assert_eq!(
            settings.cors_origins,
            Some(vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ])
        );
    }

    #[test]
    fn test_cors_wildcard_means_any() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("CRICKET_API_KEY", "ck"),
            ("FOOTBALL_API_KEY", "fk"),
            ("CORS_ORIGINS", "*"),
        ]))
        .unwrap();

        assert_eq!(settings.cors_origins, None);
    }

    #[test]
    fn test_invalid_cors_origin_fails() {
        let result = Settings::from_lookup(lookup_from(&[
            ("CRICKET_API_KEY", "ck"),
            ("FOOTBALL_API_KEY", "fk"),
            ("CORS_ORIGINS", "https://ok.example,bad\norigin"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_port_fails() {
        let result = Settings::from_lookup(lookup_from(&[
            ("CRICKET_API_KEY", "ck"),
            ("FOOTBALL_API_KEY", "fk"),
            ("PORT", "not-a-port"),
        ]));
        assert!(result.is_err());
    }
}
