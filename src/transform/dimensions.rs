//! # Output Dimension Resolution
//!
//! Exactly one dimension governs the output size. An explicit width wins
//! over an explicit height (preserving the source aspect ratio), and a
//! layout-measured width is the fallback when neither is given. The
//! surviving value is range-checked and then rounded up to a bucket size so
//! nearby layout measurements share a cache entry.

use tracing::debug;

use crate::transform::rules::{self, Rule};

/// Rounding bucket for resolved dimensions.
const BUCKET: u32 = 128;
/// Smallest dimension ever requested from the service.
const FLOOR: u32 = 64;

/// Rounds a dimension up to the nearest multiple of 128, with a floor of 64.
///
/// # Example
/// ```rust
/// use photosynth::transform::dimensions::round_multiple;
///
/// assert_eq!(round_multiple(64), 64);
/// assert_eq!(round_multiple(65), 128);
/// assert_eq!(round_multiple(129), 256);
/// assert_eq!(round_multiple(256), 256);
/// ```
pub fn round_multiple(v: u32) -> u32 {
    if v <= FLOOR {
        FLOOR
    } else {
        v.div_ceil(BUCKET) * BUCKET
    }
}

/// Resolves the single governing dimension for a request.
///
/// Returns the rule (width or height) and the rounded value to emit, or
/// `None` when no dimension was supplied or the survivor fails its range
/// check (a non-fatal omission, like any other parameter).
pub fn resolve_dimension(
    width: Option<u32>,
    height: Option<u32>,
    measured_width: Option<u32>,
) -> Option<(&'static Rule, u32)> {
    let (rule, requested) = match (width, height) {
        (Some(w), h) => {
            if h.is_some() {
                debug!(width = w, "height discarded in favor of width");
            }
            (&rules::WIDTH, w)
        }
        (None, Some(h)) => (&rules::HEIGHT, h),
        (None, None) => (&rules::WIDTH, measured_width?),
    };

    rule.check_int(Some(requested))
        .map(|v| (rule, round_multiple(v)))
}
