//! Route Table
//!
//! The static mapping of inbound endpoints to upstream call templates.

use crate::error::{GatewayError, Result};
use std::collections::HashMap;
use std::fmt;

/// Upstream provider served by a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Cricket,
    Football,
}

impl Provider {
    /// Fixed message surfaced to callers when this provider returns a non-200
    pub fn error_label(&self) -> &'static str {
        match self {
            Provider::Cricket => "Cricket API error",
            Provider::Football => "Football API error",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Cricket => write!(f, "cricket"),
            Provider::Football => write!(f, "football"),
        }
    }
}

/// A single inbound-to-upstream route mapping
///
/// Routes are data, not code: every proxied endpoint is one entry in [`TABLE`]
/// and is interpreted by the same generic forwarding handler.
#[derive(Debug)]
pub struct RouteSpec {
    /// Inbound path template in axum syntax, e.g. `/cricket/match/{id}`
    pub inbound: &'static str,

    /// Provider that serves this route
    pub provider: Provider,

    /// Upstream path template; `{name}` placeholders are filled from the
    /// inbound path captures
    pub upstream: &'static str,

    /// Query parameters always sent upstream; values may contain placeholders
    pub query: &'static [(&'static str, &'static str)],

    /// Inbound query parameters forwarded upstream when present, omitted
    /// entirely when absent
    pub passthrough: &'static [&'static str],
}

impl RouteSpec {
    /// Build the upstream path and query pairs for one inbound request.
    ///
    /// Inbound query parameters not named in `passthrough` are ignored, so
    /// fixed parameters like `offset=0` cannot be overridden by the caller.
    pub fn upstream_request(
        &self,
        params: &HashMap<String, String>,
        inbound_query: &HashMap<String, String>,
    ) -> Result<(String, Vec<(String, String)>)> {
        let path = substitute(self.upstream, params)?;

        let mut query = Vec::with_capacity(self.query.len() + self.passthrough.len());
        for (name, value) in self.query {
            query.push(((*name).to_string(), substitute(value, params)?));
        }
        for name in self.passthrough {
            if let Some(value) = inbound_query.get(*name) {
                query.push(((*name).to_string(), value.clone()));
            }
        }

        Ok((path, query))
    }
}

/// The full route table: every proxied endpoint of the gateway.
///
/// Total by construction: each inbound path has exactly one upstream mapping,
/// and every placeholder resolves from the inbound captures (checked in tests).
pub static TABLE: &[RouteSpec] = &[
    RouteSpec {
        inbound: "/cricket/current-matches",
        provider: Provider::Cricket,
        upstream: "/currentMatches",
        query: &[("offset", "0")],
        passthrough: &[],
    },
    RouteSpec {
        inbound: "/cricket/match/{id}",
        provider: Provider::Cricket,
        upstream: "/match_info",
        query: &[("id", "{id}")],
        passthrough: &[],
    },
    RouteSpec {
        inbound: "/cricket/series",
        provider: Provider::Cricket,
        upstream: "/series",
        query: &[("offset", "0")],
        passthrough: &[],
    },
    RouteSpec {
        inbound: "/cricket/series-info/{id}",
        provider: Provider::Cricket,
        upstream: "/series_info",
        query: &[("id", "{id}")],
        passthrough: &[],
    },
    RouteSpec {
        inbound: "/football/competitions",
        provider: Provider::Football,
        upstream: "/competitions",
        query: &[],
        passthrough: &[],
    },
    RouteSpec {
        inbound: "/football/matches",
        provider: Provider::Football,
        upstream: "/matches",
        query: &[],
        passthrough: &["status"],
    },
    RouteSpec {
        inbound: "/football/competition/{code}/standings",
        provider: Provider::Football,
        upstream: "/competitions/{code}/standings",
        query: &[],
        passthrough: &[],
    },
    RouteSpec {
        inbound: "/football/competition/{code}/matches",
        provider: Provider::Football,
        upstream: "/competitions/{code}/matches",
        query: &[],
        passthrough: &["status"],
    },
    RouteSpec {
        inbound: "/football/match/{id}",
        provider: Provider::Football,
        upstream: "/matches/{id}",
        query: &[],
        passthrough: &[],
    },
    RouteSpec {
        inbound: "/football/team/{id}",
        provider: Provider::Football,
        upstream: "/teams/{id}",
        query: &[],
        passthrough: &[],
    },
];

/// Fill `{name}` placeholders in a template from captured path parameters.
pub fn substitute(template: &str, params: &HashMap<String, String>) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}').ok_or_else(|| {
            GatewayError::Internal(format!("Unclosed placeholder in template '{}'", template))
        })?;
        let name = &after[..end];
        let value = params.get(name).ok_or_else(|| {
            GatewayError::Internal(format!(
                "No capture '{}' for template '{}'",
                name, template
            ))
        })?;
        out.push_str(value);
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}
