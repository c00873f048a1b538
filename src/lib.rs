//! Sportsgate - Sports Data API Gateway
//!
//! A backend proxy that forwards requests to third-party cricket and football
//! data providers, injecting API credentials server-side so browser clients
//! never see them.

pub mod client;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;

use client::UpstreamClient;
use config::Settings;
use error::Result;
use std::sync::Arc;

/// Process-wide gateway context
///
/// Constructed once at startup and passed to the router as shared state.
/// Cheap to clone; everything lives behind one `Arc`. Replaces the global
/// mutable client handles of a naive gateway with explicit scoped ownership:
/// dropping the last clone releases the HTTP client and its pool.
#[derive(Clone)]
pub struct Gateway {
    inner: Arc<GatewayInner>,
}

struct GatewayInner {
    settings: Settings,
    upstream: UpstreamClient,
}

impl Gateway {
    /// Create a gateway context from settings.
    pub fn new(settings: Settings) -> Result<Self> {
        let upstream = UpstreamClient::new(&settings)?;

        Ok(Self {
            inner: Arc::new(GatewayInner { settings, upstream }),
        })
    }

    /// Gateway settings
    pub fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    /// Shared upstream HTTP client
    pub fn upstream(&self) -> &UpstreamClient {
        &self.inner.upstream
    }
}
