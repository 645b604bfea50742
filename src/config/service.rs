//! # Service Configuration Loader
//!
//! Provides the PhotoSynth service configuration: base endpoint, default
//! access key, and URL-builder options.
//!
//! Automatically loads `.env` files for non-production environments.
//! It checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `PHOTOSYNTH_URL` | Base transformation endpoint | `https://ps.temperal.co/ps` |
//! | `PHOTOSYNTH_KEY` | Default access key | *none* |
//! | `PHOTOSYNTH_SEPARATOR` | Fragment style, `amp` or `comma` | `amp` |
//! | `PHOTOSYNTH_ROTATE` | Enable the rotate parameter | `true` |
//! | `PHOTOSYNTH_BYPASS` | Enable the bypass path | `true` |
//! | `PHOTOSYNTH_CACHE_BUST` | Enable cache-bust suffixes | `true` |
//!
//! # Example
//! ```rust,no_run
//! use photosynth::config::ServiceConfig;
//!
//! let cfg = ServiceConfig::from_env();
//! if !cfg.has_key() {
//!     eprintln!("no default PhotoSynth key configured");
//! }
//! ```

use std::env;

use crate::config::env::{read_flag, read_var};
use crate::transform::{BuilderOptions, Features, Separator};

/// Base endpoint used when `PHOTOSYNTH_URL` is unset.
pub const DEFAULT_ENDPOINT: &str = "https://ps.temperal.co/ps";

/// PhotoSynth service configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base transformation endpoint.
    pub endpoint: String,
    /// Default access key, overridden by a per-request key.
    pub key: Option<String>,
    /// URL assembly options.
    pub options: BuilderOptions,
}

impl ServiceConfig {
    /// Creates a configuration without touching the environment,
    /// with default [`BuilderOptions`].
    pub fn new(endpoint: impl Into<String>, key: Option<&str>) -> Self {
        Self {
            endpoint: endpoint.into(),
            key: key.map(str::to_string),
            options: BuilderOptions::default(),
        }
    }

    /// Loads the service configuration from environment variables.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Parses all supported environment variables and falls back to
    ///   defaults.
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        let endpoint = read_var("PHOTOSYNTH_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.into());
        let key = read_var("PHOTOSYNTH_KEY");

        let separator = read_var("PHOTOSYNTH_SEPARATOR")
            .and_then(|s| Separator::from_name(&s))
            .unwrap_or_default();
        let features = Features {
            rotate: read_flag("PHOTOSYNTH_ROTATE", true),
            bypass: read_flag("PHOTOSYNTH_BYPASS", true),
            cache_bust: read_flag("PHOTOSYNTH_CACHE_BUST", true),
        };

        Self {
            endpoint,
            key,
            options: BuilderOptions {
                separator,
                features,
            },
        }
    }

    /// Returns `true` if a default access key is configured.
    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_reads_endpoint_and_key() {
        temp_env::with_vars(
            vec![
                ("APP_ENV", Some("production")),
                ("PHOTOSYNTH_URL", Some("https://ps.internal/ps")),
                ("PHOTOSYNTH_KEY", Some("test-key")),
            ],
            || {
                let cfg = ServiceConfig::from_env();
                assert_eq!(cfg.endpoint, "https://ps.internal/ps");
                assert_eq!(cfg.key.as_deref(), Some("test-key"));
                assert!(cfg.has_key());
            },
        );
    }

    #[test]
    fn from_env_falls_back_to_default_endpoint() {
        temp_env::with_vars(
            vec![
                ("APP_ENV", Some("production")),
                ("PHOTOSYNTH_URL", None::<&str>),
                ("PHOTOSYNTH_KEY", None::<&str>),
            ],
            || {
                let cfg = ServiceConfig::from_env();
                assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
                assert!(!cfg.has_key());
            },
        );
    }

    #[test]
    fn from_env_parses_options() {
        temp_env::with_vars(
            vec![
                ("APP_ENV", Some("production")),
                ("PHOTOSYNTH_SEPARATOR", Some("comma")),
                ("PHOTOSYNTH_ROTATE", Some("off")),
                ("PHOTOSYNTH_CACHE_BUST", Some("1")),
            ],
            || {
                let cfg = ServiceConfig::from_env();
                assert_eq!(cfg.options.separator, Separator::Comma);
                assert!(!cfg.options.features.rotate);
                assert!(cfg.options.features.bypass);
                assert!(cfg.options.features.cache_bust);
            },
        );
    }

    #[test]
    fn from_env_ignores_unknown_separator() {
        temp_env::with_vars(
            vec![
                ("APP_ENV", Some("production")),
                ("PHOTOSYNTH_SEPARATOR", Some("pipe")),
            ],
            || {
                let cfg = ServiceConfig::from_env();
                assert_eq!(cfg.options.separator, Separator::Ampersand);
            },
        );
    }

    #[test]
    fn new_uses_default_options() {
        let cfg = ServiceConfig::new("https://ps.internal/ps", Some("k"));
        assert_eq!(cfg.options, BuilderOptions::default());
        assert_eq!(cfg.key.as_deref(), Some("k"));
    }
}
