//! # URL Builder Errors
//!
//! The three fatal failure modes of URL construction. Everything else
//! (an out-of-range blur, a zero width, ...) is a silent per-parameter
//! omission, never an error.

use thiserror::Error;

/// Fatal error from [`crate::transform::UrlBuilder::build`].
///
/// When any of these is returned, no partial URL was constructed; callers
/// are expected to fall back to rendering the unmodified source URL.
///
/// # Example
/// ```
/// use photosynth::error::BuildError;
///
/// let err = BuildError::InvalidSourceUrl {
///     url: "ftp://example.com/a.jpg".into(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "invalid source image URL: ftp://example.com/a.jpg"
/// );
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// No access key on the request and no default key configured.
    #[error("no access key on the request and no default key configured")]
    MissingKey,

    /// The configured base endpoint is not an absolute `http(s)` URL.
    #[error("invalid service endpoint URL: {url}")]
    InvalidEndpoint { url: String },

    /// The supplied source image URL is not an absolute `http(s)` URL.
    #[error("invalid source image URL: {url}")]
    InvalidSourceUrl { url: String },
}
