//! Server Module
//!
//! Axum router assembly, CORS, and the serve loop.

pub mod forward;
pub mod health;

use crate::error::{GatewayError, Result};
use crate::routes;
use crate::Gateway;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Shared path prefix for the whole inbound surface
const API_PREFIX: &str = "/api";

/// Build the gateway router from the static route table.
///
/// Every proxied endpoint shares one generic handler; only `/health` is
/// local. All routes are mounted under [`API_PREFIX`].
pub fn router(gateway: Gateway) -> Router {
    let cors = cors_layer(gateway.settings().cors_origins.as_deref());

    let mut api = Router::new().route("/health", get(health::health));

    // Each table entry becomes one GET route sharing the generic forwarder;
    // the closure captures only the &'static spec.
    for spec in routes::TABLE {
        api = api.route(
            spec.inbound,
            get(
                move |State(gateway): State<Gateway>,
                      Path(params): Path<HashMap<String, String>>,
                      Query(query): Query<HashMap<String, String>>| async move {
                    forward::forward(&gateway, spec, &params, &query).await
                },
            ),
        );
    }

    Router::new()
        .nest(API_PREFIX, api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(gateway)
}

/// CORS policy: any origin unless an explicit allow-list is configured.
///
/// Credentials are only allowed alongside an explicit origin list; a wildcard
/// origin with credentials is rejected by browsers (and by tower-http).
fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    match origins {
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        Some(list) => {
            // Settings validation already rejects unparseable origins; if one
            // slips through anyway it must not vanish without a trace.
            let origins: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!("Ignoring invalid CORS origin '{}'", origin);
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        }
    }
}

/// Bind the listener and serve until shutdown is requested.
pub async fn run(gateway: Gateway) -> Result<()> {
    let addr = gateway.settings().listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| GatewayError::Config(format!("Failed to bind {}: {}", addr, e)))?;

    info!("Gateway listening on {}", addr);

    axum::serve(listener, router(gateway))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| GatewayError::Internal(format!("Server error: {}", e)))?;

    info!("Gateway shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
