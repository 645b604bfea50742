//! # Environment Variable Utilities
//!
//! Small helpers for reading configuration out of the process environment:
//! boolean feature toggles and cleaned-up string values.
//!
//! Values are trimmed and stripped of surrounding quotes before use, so
//! `PHOTOSYNTH_KEY="abc"` and `PHOTOSYNTH_KEY=abc` behave identically.
//! Each helper has a `_from` variant taking a provider closure so tests can
//! run without touching the real environment.
//!
//! # Examples
//! ```rust,no_run
//! use photosynth::config::env::{read_flag, read_var};
//!
//! let rotate_enabled = read_flag("PHOTOSYNTH_ROTATE", true);
//! let key = read_var("PHOTOSYNTH_KEY");
//! ```

/// Trims whitespace and strips one layer of surrounding quotes.
fn clean(v: &str) -> &str {
    v.trim().trim_matches(|c| c == '"' || c == '\'')
}

/// Reads a boolean flag from an environment variable.
///
/// Returns `true` for any of the following case-insensitive values:
/// `"1"`, `"true"`, `"yes"`, `"on"`; `false` for anything else that is set;
/// `default` when the variable is missing.
pub fn read_flag(name: &str, default: bool) -> bool {
    read_flag_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a boolean flag using a custom provider function.
///
/// Useful for testing or mocking environment sources.
///
/// # Example
/// ```rust
/// use photosynth::config::env::read_flag_from;
///
/// assert!(read_flag_from(|_| Some("yes".into()), "PHOTOSYNTH_BYPASS", false));
/// ```
pub fn read_flag_from<F>(provider: F, name: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match provider(name) {
        Some(v) => matches!(
            clean(&v).to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        None => default,
    }
}

/// Reads a cleaned string from an environment variable.
///
/// Returns `None` when the variable is missing or blank after cleaning,
/// so an empty `PHOTOSYNTH_KEY=` never masquerades as a configured key.
pub fn read_var(name: &str) -> Option<String> {
    read_var_from(|k| std::env::var(k).ok(), name)
}

/// Reads a cleaned string using a custom provider function.
pub fn read_var_from<F>(provider: F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    provider(name).and_then(|v| {
        let s = clean(&v);
        if s.is_empty() {
            None
        } else {
            Some(s.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_flag_true_variants() {
        for val in ["1", "true", "TRUE", "yes", "YES", "on", "On"] {
            let got = read_flag_from(|_| Some(val.into()), "X", false);
            assert!(got, "Expected {val:?} to be truthy");
        }
    }

    #[test]
    fn read_flag_false_variants() {
        for val in ["0", "false", "no", "off", "xyz", ""] {
            let got = read_flag_from(|_| Some(val.into()), "X", true);
            assert!(!got, "Expected {val:?} to be falsy");
        }
    }

    #[test]
    fn read_flag_default_when_missing() {
        assert!(read_flag_from(|_| None, "X", true));
        assert!(!read_flag_from(|_| None, "X", false));
    }

    #[test]
    fn read_flag_strips_quotes() {
        assert!(read_flag_from(|_| Some("\"true\"".into()), "X", false));
        assert!(read_flag_from(|_| Some("'yes'".into()), "X", false));
    }

    #[test]
    fn read_var_cleans_value() {
        let got = read_var_from(|_| Some("  \"ps-key\" ".into()), "KEY");
        assert_eq!(got.as_deref(), Some("ps-key"));
    }

    #[test]
    fn read_var_blank_is_none() {
        assert_eq!(read_var_from(|_| Some("   ".into()), "KEY"), None);
        assert_eq!(read_var_from(|_| Some("\"\"".into()), "KEY"), None);
        assert_eq!(read_var_from(|_| None, "KEY"), None);
    }
}
