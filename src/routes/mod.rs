//! Routes Module
//!
//! The static route table mapping inbound endpoints to upstream templates.

pub mod table;

pub use table::{substitute, Provider, RouteSpec, TABLE};
