//! # Builder Options
//!
//! Configuration for how the transformation URL is assembled.
//!
//! Historically the service shipped several near-identical builders that
//! differed only in fragment separator style and in which extras (rotate,
//! bypass, cache-busting) they supported. Those variants collapse here into
//! one implementation driven by [`BuilderOptions`].

use serde::{Deserialize, Serialize};

/// Fragment separator convention for the assembled URL.
///
/// - [`Separator::Ampersand`] (default): `<endpoint>?u=..&k=..&w=..`
/// - [`Separator::Comma`]: legacy path style, `<endpoint>/u=..,k=..,w=..`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    #[default]
    #[serde(alias = "amp")]
    Ampersand,
    Comma,
}

impl Separator {
    /// Separator placed between the endpoint and the first fragment.
    pub fn leading(self) -> char {
        match self {
            Self::Ampersand => '?',
            Self::Comma => '/',
        }
    }

    /// Separator placed between subsequent fragments.
    pub fn joining(self) -> char {
        match self {
            Self::Ampersand => '&',
            Self::Comma => ',',
        }
    }

    /// Parses a separator name as found in configuration (`"amp"`/`"comma"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "amp" | "ampersand" => Some(Self::Ampersand),
            "comma" => Some(Self::Comma),
            _ => None,
        }
    }
}

/// Optional builder capabilities, all enabled by default.
///
/// Disabling a feature makes the builder ignore the corresponding request
/// field; it never turns a request into an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    /// Emit the `r` (rotate) parameter when requested.
    pub rotate: bool,
    /// Honor `TransformRequest::bypass`.
    pub bypass: bool,
    /// Honor `TransformRequest::cache_bust`.
    pub cache_bust: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            rotate: true,
            bypass: true,
            cache_bust: true,
        }
    }
}

/// How the URL builder assembles its output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderOptions {
    /// Fragment separator convention.
    pub separator: Separator,
    /// Enabled builder capabilities.
    pub features: Features,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ampersand_with_all_features() {
        let opts = BuilderOptions::default();
        assert_eq!(opts.separator, Separator::Ampersand);
        assert!(opts.features.rotate);
        assert!(opts.features.bypass);
        assert!(opts.features.cache_bust);
    }

    #[test]
    fn separator_characters() {
        assert_eq!(Separator::Ampersand.leading(), '?');
        assert_eq!(Separator::Ampersand.joining(), '&');
        assert_eq!(Separator::Comma.leading(), '/');
        assert_eq!(Separator::Comma.joining(), ',');
    }

    #[test]
    fn separator_from_name() {
        assert_eq!(Separator::from_name("amp"), Some(Separator::Ampersand));
        assert_eq!(Separator::from_name("AMPERSAND"), Some(Separator::Ampersand));
        assert_eq!(Separator::from_name("comma"), Some(Separator::Comma));
        assert_eq!(Separator::from_name("pipe"), None);
    }
}
