//! Configuration Module
//!
//! Environment-driven gateway settings.

pub mod settings;

pub use settings::{Settings, CRICKET_BASE_URL, FOOTBALL_BASE_URL};
