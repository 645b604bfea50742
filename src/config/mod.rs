//! # Configuration
//!
//! Environment-driven configuration for the URL builder:
//!
//! - [`env`] — low-level env var reading helpers
//! - [`service`] — the [`ServiceConfig`] loader

pub mod env;
pub mod service;

pub use service::{DEFAULT_ENDPOINT, ServiceConfig};
