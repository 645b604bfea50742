//! # Transformation Request Types
//!
//! Value types describing one URL-building request: the output [`Format`],
//! the [`CacheBust`] directive, and the [`TransformRequest`] itself.
//!
//! Every transformation parameter is optional; a parameter that is absent,
//! zero, or out of its declared range is simply left out of the generated
//! URL (see [`crate::transform::rules`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output image format requested from the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Avif,
    Gif,
    Jpeg,
    Png,
    Tiff,
    Webp,
}

impl Format {
    /// Wire name used in the `o=` fragment.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Avif => "avif",
            Self::Gif => "gif",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Tiff => "tiff",
            Self::Webp => "webp",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "avif" => Ok(Self::Avif),
            "gif" => Ok(Self::Gif),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "tiff" => Ok(Self::Tiff),
            "webp" => Ok(Self::Webp),
            _ => Err(()),
        }
    }
}

/// Cache-busting directive for the generated URL.
///
/// A non-`Off` directive appends a trailing `?none=<token>` suffix so HTTP
/// caches treat the URL as distinct.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBust {
    /// No suffix; identical requests produce identical URLs.
    #[default]
    Off,
    /// Volatile suffix seeded from the current time. Every call produces a
    /// distinct URL.
    Timestamp,
    /// Caller-supplied token (e.g. a content hash). Deterministic busting.
    Token(String),
}

/// One URL-building request.
///
/// Only `source_url` is required. `key` overrides the configured default
/// key; `measured_width` is a layout-measured fallback used when neither
/// `width` nor `height` is set.
///
/// # Example
/// ```rust
/// use photosynth::transform::{Format, TransformRequest};
///
/// let mut request = TransformRequest::new("https://example.com/a.jpg");
/// request.width = Some(640);
/// request.greyscale = true;
/// request.format = Some(Format::Webp);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformRequest {
    /// Absolute `http(s)` URL of the source image.
    pub source_url: String,
    /// Per-request access key; overrides the configured default.
    pub key: Option<String>,
    /// Return the source URL untransformed (plus any cache-bust suffix).
    pub bypass: bool,
    /// Cache-busting directive.
    pub cache_bust: CacheBust,
    /// Fallback width from a layout measurement, used only when neither
    /// `width` nor `height` is given.
    pub measured_width: Option<u32>,

    pub width: Option<u32>,
    pub height: Option<u32>,
    pub adaptive_histogram: Option<u32>,
    pub blur: Option<f64>,
    pub brightness: Option<f64>,
    pub gamma: Option<f64>,
    pub hue: Option<f64>,
    pub lightness: Option<f64>,
    pub saturation: Option<f64>,
    pub rotate: Option<f64>,
    pub sharpen: Option<f64>,
    pub crop_left_percent: Option<u32>,
    pub crop_top_percent: Option<u32>,
    pub crop_right_percent: Option<u32>,
    pub crop_bottom_percent: Option<u32>,
    pub normalize_lower: Option<u32>,
    pub normalize_upper: Option<u32>,
    pub greyscale: bool,
    pub format: Option<Format>,
}

impl TransformRequest {
    /// Creates a request for `source_url` with every parameter unset.
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_str() {
        assert_eq!("avif".parse(), Ok(Format::Avif));
        assert_eq!("JPG".parse(), Ok(Format::Jpeg));
        assert_eq!("jpeg".parse(), Ok(Format::Jpeg));
        assert_eq!("webp".parse(), Ok(Format::Webp));
        assert!("bmp".parse::<Format>().is_err());
    }

    #[test]
    fn format_wire_names_are_lowercase() {
        for (format, name) in [
            (Format::Avif, "avif"),
            (Format::Gif, "gif"),
            (Format::Jpeg, "jpeg"),
            (Format::Png, "png"),
            (Format::Tiff, "tiff"),
            (Format::Webp, "webp"),
        ] {
            assert_eq!(format.as_str(), name);
            assert_eq!(format.to_string(), name);
        }
    }

    #[test]
    fn format_serde_uses_wire_name() {
        let json = serde_json::to_string(&Format::Webp).unwrap();
        assert_eq!(json, "\"webp\"");

        let back: Format = serde_json::from_str("\"tiff\"").unwrap();
        assert_eq!(back, Format::Tiff);
    }

    #[test]
    fn new_request_has_no_parameters() {
        let request = TransformRequest::new("https://example.com/a.jpg");
        assert_eq!(request.source_url, "https://example.com/a.jpg");
        assert_eq!(request.key, None);
        assert!(!request.bypass);
        assert_eq!(request.cache_bust, CacheBust::Off);
        assert_eq!(request.width, None);
        assert_eq!(request.format, None);
        assert!(!request.greyscale);
    }

    #[test]
    fn request_deserializes_with_defaults() {
        let request: TransformRequest =
            serde_json::from_str(r#"{"source_url":"https://example.com/a.jpg","width":320}"#)
                .unwrap();
        assert_eq!(request.width, Some(320));
        assert_eq!(request.height, None);
        assert_eq!(request.cache_bust, CacheBust::Off);
    }
}
