//! # photosynth
//!
//! Client-side URL builder for the PhotoSynth image transformation service.
//!
//! This crate provides:
//! - Validated, table-driven construction of transformation URLs
//!   (`transform::UrlBuilder`)
//! - Environment-driven service configuration (`config::ServiceConfig`)
//! - Typed error reporting for the fatal failure modes (`error::BuildError`)
//!
//! ## Example usage (in another crate)
//!
//! ```rust
//! use photosynth::config::ServiceConfig;
//! use photosynth::transform::{TransformRequest, UrlBuilder};
//!
//! let config = ServiceConfig::new("https://ps.temperal.co/ps", Some("my-key"));
//! let builder = UrlBuilder::new(config);
//!
//! let mut request = TransformRequest::new("https://example.com/photo.jpg");
//! request.width = Some(640);
//! request.blur = Some(2.5);
//!
//! let url = builder.build(&request).unwrap();
//! assert!(url.starts_with("https://ps.temperal.co/ps?u="));
//! ```
// ===============================
// Re-exports of external crates
// ===============================

pub use chrono;
pub use dotenvy;
pub use rand;
pub use serde;
pub use url;

// ===============================
// Public modules
// ===============================
pub mod config;
pub mod error;
pub mod transform;
