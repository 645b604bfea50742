//! # Transformation URL Builder
//!
//! Assembles the final service URL from a [`TransformRequest`] and a
//! [`ServiceConfig`]: identity validation, table-driven parameter encoding,
//! composite crop/normalize fragments, and the optional cache-bust suffix.
//!
//! Only the identity checks (access key, endpoint URL, source URL) can fail;
//! every per-parameter failure silently drops that parameter so the URL is
//! built best-effort.

use chrono::Utc;
use rand::Rng;
use tracing::debug;
use url::Url;

use crate::config::ServiceConfig;
use crate::error::BuildError;
use crate::transform::dimensions::resolve_dimension;
use crate::transform::params::{CacheBust, TransformRequest};
use crate::transform::rules::{self, Rule};

/// Returns `true` if `s` parses as an absolute `http` or `https` URL.
pub fn is_valid_http_url(s: &str) -> bool {
    Url::parse(s)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Builds transformation URLs against one configured service.
///
/// # Example
/// ```rust
/// use photosynth::config::ServiceConfig;
/// use photosynth::transform::{TransformRequest, UrlBuilder};
///
/// let builder = UrlBuilder::new(ServiceConfig::new("https://ps.temperal.co/ps", Some("k1")));
///
/// let mut request = TransformRequest::new("https://example.com/a.jpg");
/// request.width = Some(640);
///
/// let url = builder.build(&request).unwrap();
/// assert_eq!(url, "https://ps.temperal.co/ps?u=https://example.com/a.jpg&k=k1&w=640");
/// ```
#[derive(Clone, Debug)]
pub struct UrlBuilder {
    config: ServiceConfig,
}

impl UrlBuilder {
    /// Creates a builder for the given service configuration.
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Builds the transformation URL for `request`.
    ///
    /// Fails only on the identity checks ([`BuildError`]); invalid optional
    /// parameters are dropped from the output instead.
    pub fn build(&self, request: &TransformRequest) -> Result<String, BuildError> {
        let options = self.config.options;

        // Bypass skips every check, including key and endpoint validation.
        if options.features.bypass && request.bypass {
            let mut url = request.source_url.clone();
            self.append_cache_bust(&mut url, request);
            return Ok(url);
        }

        let key = request
            .key
            .as_deref()
            .or(self.config.key.as_deref())
            .filter(|k| !k.is_empty())
            .ok_or(BuildError::MissingKey)?;
        if !is_valid_http_url(&self.config.endpoint) {
            return Err(BuildError::InvalidEndpoint {
                url: self.config.endpoint.clone(),
            });
        }
        if !is_valid_http_url(&request.source_url) {
            return Err(BuildError::InvalidSourceUrl {
                url: request.source_url.clone(),
            });
        }

        let join = options.separator.joining();
        let mut url = format!(
            "{}{}u={}{}k={}",
            self.config.endpoint,
            options.separator.leading(),
            request.source_url,
            join,
            key,
        );

        if let Some((rule, v)) =
            resolve_dimension(request.width, request.height, request.measured_width)
        {
            push_fragment(&mut url, join, rule.code, &v.to_string());
        }

        if let Some(v) = rules::ADAPTIVE_HISTOGRAM.check_int(request.adaptive_histogram) {
            push_fragment(&mut url, join, rules::ADAPTIVE_HISTOGRAM.code, &v.to_string());
        }

        let scalars: [(&Rule, Option<f64>); 8] = [
            (&rules::BLUR, request.blur),
            (&rules::BRIGHTNESS, request.brightness),
            (&rules::GAMMA, request.gamma),
            (&rules::HUE, request.hue),
            (&rules::LIGHTNESS, request.lightness),
            (&rules::SATURATION, request.saturation),
            (
                &rules::ROTATE,
                if options.features.rotate {
                    request.rotate
                } else {
                    None
                },
            ),
            (&rules::SHARPEN, request.sharpen),
        ];
        for (rule, value) in scalars {
            match rule.check_float(value) {
                Some(v) => push_fragment(&mut url, join, rule.code, &v.to_string()),
                None => {
                    if value.is_some() {
                        debug!(code = rule.code, "parameter failed validation, dropped");
                    }
                }
            }
        }

        push_crop(&mut url, join, request);
        push_normalize(&mut url, join, request);

        if request.greyscale {
            push_fragment(&mut url, join, "gr", "true");
        }
        if let Some(format) = request.format {
            push_fragment(&mut url, join, "o", format.as_str());
        }

        self.append_cache_bust(&mut url, request);
        Ok(url)
    }

    /// Appends the `?none=<token>` cache-bust suffix when requested and
    /// enabled. `Timestamp` tokens carry a random tail so two calls within
    /// the same millisecond still produce distinct URLs.
    fn append_cache_bust(&self, url: &mut String, request: &TransformRequest) {
        if !self.config.options.features.cache_bust {
            return;
        }
        let token = match &request.cache_bust {
            CacheBust::Off => return,
            CacheBust::Timestamp => format!(
                "{}{:04}",
                Utc::now().timestamp_millis(),
                rand::rng().random_range(0..10_000)
            ),
            CacheBust::Token(t) => {
                if t.is_empty() {
                    return;
                }
                t.clone()
            }
        };
        url.push_str("?none=");
        url.push_str(&token);
    }
}

fn push_fragment(url: &mut String, join: char, code: &str, value: &str) {
    url.push(join);
    url.push_str(code);
    url.push('=');
    url.push_str(value);
}

/// The four crop percentages form one fragment: any single valid field
/// triggers emission, with unset fields defaulting to 0, in
/// left/top/right/bottom order.
fn push_crop(url: &mut String, join: char, request: &TransformRequest) {
    let fields = [
        request.crop_left_percent,
        request.crop_top_percent,
        request.crop_right_percent,
        request.crop_bottom_percent,
    ];
    if fields.iter().any(|&v| rules::CROP.check_int(v).is_some()) {
        let value = fields.map(|v| v.unwrap_or(0).to_string()).join(",");
        push_fragment(url, join, rules::CROP.code, &value);
    }
}

/// The normalize pair is emitted only when both bounds validate and
/// `upper > lower` strictly; otherwise the pair is dropped entirely.
fn push_normalize(url: &mut String, join: char, request: &TransformRequest) {
    let lower = rules::NORMALIZE.check_int(request.normalize_lower);
    let upper = rules::NORMALIZE.check_int(request.normalize_upper);
    if let (Some(lower), Some(upper)) = (lower, upper) {
        if upper > lower {
            push_fragment(url, join, rules::NORMALIZE.code, &format!("{lower},{upper}"));
        }
    }
}
