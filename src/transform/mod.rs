//! # Transformation URL Construction
//!
//! Everything involved in turning a [`TransformRequest`] into a service URL:
//!
//! - [`params`] — request and value types ([`TransformRequest`], [`Format`],
//!   [`CacheBust`])
//! - [`rules`] — the declarative per-parameter validation table
//! - [`dimensions`] — width/height precedence and bucket rounding
//! - [`options`] — separator style and feature flags ([`BuilderOptions`])
//! - [`builder`] — the [`UrlBuilder`] itself

pub mod builder;
pub mod dimensions;
pub mod options;
pub mod params;
pub mod rules;

pub use builder::{UrlBuilder, is_valid_http_url};
pub use dimensions::round_multiple;
pub use options::{BuilderOptions, Features, Separator};
pub use params::{CacheBust, Format, TransformRequest};
