//! # Parameter Validation Rules
//!
//! One declarative [`Rule`] per transformation parameter: the short wire
//! code, the expected scalar kind, and an inclusive numeric range. The
//! builder iterates these instead of hand-writing a branch per field.
//!
//! Validation follows the service's historical semantics: a value that is
//! absent, zero, or non-finite never validates, even when zero lies inside
//! the declared range (`adaptive_histogram = 0` is always omitted). A value
//! failing its rule is dropped from the URL, never an error.

/// Expected scalar kind of a parameter value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// Whole number.
    Int,
    /// Any finite number.
    Float,
}

/// Declarative validation rule for one transformation parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rule {
    /// Short code used in the URL fragment (`w`, `b`, `ga`, ...).
    pub code: &'static str,
    pub kind: ValueKind,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
}

pub const WIDTH: Rule = Rule { code: "w", kind: ValueKind::Int, min: 1.0, max: 5000.0 };
pub const HEIGHT: Rule = Rule { code: "h", kind: ValueKind::Int, min: 1.0, max: 5000.0 };
pub const ADAPTIVE_HISTOGRAM: Rule = Rule { code: "ah", kind: ValueKind::Int, min: 0.0, max: 100.0 };
pub const BLUR: Rule = Rule { code: "b", kind: ValueKind::Float, min: 0.2, max: 20.0 };
pub const BRIGHTNESS: Rule = Rule { code: "br", kind: ValueKind::Float, min: 0.0, max: 20.0 };
pub const GAMMA: Rule = Rule { code: "ga", kind: ValueKind::Float, min: 1.0, max: 3.0 };
pub const HUE: Rule = Rule { code: "hu", kind: ValueKind::Float, min: 1.0, max: 180.0 };
pub const LIGHTNESS: Rule = Rule { code: "l", kind: ValueKind::Float, min: 0.0, max: 200.0 };
pub const SATURATION: Rule = Rule { code: "s", kind: ValueKind::Float, min: 0.0, max: 20.0 };
pub const ROTATE: Rule = Rule { code: "r", kind: ValueKind::Float, min: -360.0, max: 360.0 };
pub const SHARPEN: Rule = Rule { code: "sh", kind: ValueKind::Float, min: 0.1, max: 10.0 };
/// Component rule for each of the four crop percentages.
pub const CROP: Rule = Rule { code: "c", kind: ValueKind::Int, min: 1.0, max: 99.0 };
/// Component rule for each normalize bound.
pub const NORMALIZE: Rule = Rule { code: "n", kind: ValueKind::Int, min: 1.0, max: 99.0 };

impl Rule {
    /// Returns `true` if `v` validates under this rule.
    ///
    /// Zero and non-finite values are treated as absent and rejected before
    /// any range check runs.
    pub fn accepts(&self, v: f64) -> bool {
        if v == 0.0 || !v.is_finite() {
            return false;
        }
        if self.kind == ValueKind::Int && v.fract() != 0.0 {
            return false;
        }
        self.min <= v && v <= self.max
    }

    /// Passes an optional integer parameter through this rule.
    pub fn check_int(&self, v: Option<u32>) -> Option<u32> {
        v.filter(|&v| self.accepts(f64::from(v)))
    }

    /// Passes an optional float parameter through this rule.
    pub fn check_float(&self, v: Option<f64>) -> Option<f64> {
        v.filter(|&v| self.accepts(v))
    }
}
