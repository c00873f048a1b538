//! Generic Forwarding
//!
//! The single handler body behind every proxied route.

use crate::error::Result;
use crate::routes::RouteSpec;
use crate::Gateway;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use std::collections::HashMap;
use tracing::error;

/// Forward one inbound request according to its route spec.
///
/// Substitutes path captures into the upstream template, attaches fixed and
/// pass-through query parameters, performs the outbound call, and returns the
/// upstream body verbatim on 200. Errors are logged with provider and route
/// before being surfaced; nothing is swallowed or retried.
pub async fn forward(
    gateway: &Gateway,
    spec: &'static RouteSpec,
    params: &HashMap<String, String>,
    inbound_query: &HashMap<String, String>,
) -> Result<Response> {
    let (path, query) = spec.upstream_request(params, inbound_query).map_err(|e| {
        error!(
            provider = %spec.provider,
            route = spec.inbound,
            error = %e,
            "Failed to build upstream request"
        );
        e
    })?;

    match gateway.upstream().get(spec.provider, &path, &query).await {
        Ok(body) => Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response()),
        Err(e) => {
            error!(
                provider = %spec.provider,
                route = spec.inbound,
                error = %e,
                "Upstream request failed"
            );
            Err(e)
        }
    }
}
