//! Upstream HTTP Client
//!
//! Async HTTP client that injects provider credentials and enforces the
//! outbound timeout.

use crate::config::Settings;
use crate::error::{GatewayError, Result};
use crate::routes::Provider;
use axum::http::StatusCode;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;

/// Every outbound call gets one attempt within this window; exceeding it is a
/// transport failure.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the football provider credential
const FOOTBALL_AUTH_HEADER: &str = "X-Auth-Token";

/// Base URL and credential for one provider
#[derive(Debug)]
struct Target {
    base_url: String,
    api_key: String,
}

/// HTTP client for the upstream providers
///
/// Holds one connection pool shared by both providers. Credential injection
/// happens here and nowhere else, so keys never reach route or response code.
pub struct UpstreamClient {
    /// Inner reqwest client
    client: Client,

    cricket: Target,
    football: Target,
}

impl UpstreamClient {
    /// Create a new upstream client from settings.
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            cricket: Target {
                base_url: settings.cricket_base_url.clone(),
                api_key: settings.cricket_api_key.clone(),
            },
            football: Target {
                base_url: settings.football_base_url.clone(),
                api_key: settings.football_api_key.clone(),
            },
        })
    }

    /// Issue a GET to a provider, injecting its credential.
    ///
    /// Returns the raw body on upstream 200. Any other upstream status becomes
    /// an `Upstream` error carrying that status; any failure constructing or
    /// executing the call becomes a `Transport` error. One attempt, no retries.
    pub async fn get(
        &self,
        provider: Provider,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Bytes> {
        let target = self.target(provider);
        let url = format!("{}{}", target.base_url.trim_end_matches('/'), path);

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        request = match provider {
            Provider::Cricket => request.query(&[("apikey", target.api_key.as_str())]),
            Provider::Football => request.header(FOOTBALL_AUTH_HEADER, &target.api_key),
        };

        let response = request.send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(GatewayError::Upstream { provider, status });
        }

        Ok(response.bytes().await?)
    }

    fn target(&self, provider: Provider) -> &Target {
        match provider {
            Provider::Cricket => &self.cricket,
            Provider::Football => &self.football,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            cricket_api_key: "ck".to_string(),
            football_api_key: "fk".to_string(),
            cricket_base_url: "http://cricket.local/v1".to_string(),
            football_base_url: "http://football.local/v4".to_string(),
            cors_origins: None,
            host: "127.0.0.1".to_string(),
            port: 0,
        }
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = UpstreamClient::new(&settings());
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_cricket_auth_is_query_param() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/currentMatches")
            .match_query(mockito::Matcher::UrlEncoded(
                "apikey".to_string(),
                "ck".to_string(),
            ))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let mut settings = settings();
        settings.cricket_base_url = server.url();
        let client = UpstreamClient::new(&settings).unwrap();

        let body = client
            .get(Provider::Cricket, "/currentMatches", &[])
            .await
            .unwrap();
        assert_eq!(&body[..], b"{}");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_football_auth_is_header() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/competitions")
            .match_header("x-auth-token", "fk")
            .with_status(200)
            .with_body("{\"count\":0}")
            .create_async()
            .await;

        let mut settings = settings();
        settings.football_base_url = server.url();
        let client = UpstreamClient::new(&settings).unwrap();

        let body = client
            .get(Provider::Football, "/competitions", &[])
            .await
            .unwrap();
        assert_eq!(&body[..], b"{\"count\":0}");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_200_becomes_upstream_error() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/matches")
            .with_status(429)
            .create_async()
            .await;

        let mut settings = settings();
        settings.football_base_url = server.url();
        let client = UpstreamClient::new(&settings).unwrap();

        let err = client
            .get(Provider::Football, "/matches", &[])
            .await
            .unwrap_err();
        match err {
            GatewayError::Upstream { provider, status } => {
                assert_eq!(provider, Provider::Football);
                assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
            }
            other => panic!("expected upstream error, got {}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_failure_becomes_transport_error() {
        // Nothing listens on the discard port
        let mut settings = settings();
        settings.cricket_base_url = "http://127.0.0.1:9".to_string();
        let client = UpstreamClient::new(&settings).unwrap();

        let err = client
            .get(Provider::Cricket, "/series", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }
}
