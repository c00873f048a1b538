//! Client Module
//!
//! Outbound HTTP client with credential injection.

pub mod http;

pub use http::UpstreamClient;
