//! Environment variable utilities
//!
//! Typed lookups with defaults, used by [`crate::config::CheckConfig`].
//!
//! # Usage
//!
//! ```ignore
//! use gcheck_core::env::{env_get, env_get_bool};
//!
//! let level: LogLevel = env_get("GCHECK_LOG_LEVEL", LogLevel::Info);
//! let backtraces: bool = env_get_bool("GCHECK_BACKTRACE", true);
//! ```

use std::str::FromStr;

/// Get environment variable parsed as type T, or return default
///
/// Unset and unparsable values both fall back to `default`.
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env_get_opt(key).unwrap_or(default)
}

/// Parse a boolean flag value.
///
/// Accepts `1/true/yes/on` and `0/false/no/off`, case-insensitive.
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Get environment variable as boolean
///
/// Unset or unrecognised values return the default.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .and_then(|v| parse_bool(&v))
        .unwrap_or(default)
}

/// Get environment variable as optional value
///
/// `Some(T)` only if the variable is set and parses.
#[inline]
pub fn env_get_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Get environment variable as string, or return default
#[inline]
pub fn env_get_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Check if environment variable is set (regardless of value)
#[inline]
pub fn env_is_set(key: &str) -> bool {
    std::env::var_os(key).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNSET: &str = "__GCHECK_TEST_UNSET_VAR__";

    #[test]
    fn test_unset_falls_back() {
        assert_eq!(env_get(UNSET, 42usize), 42);
        assert!(env_get_bool(UNSET, true));
        assert!(!env_get_bool(UNSET, false));
        assert_eq!(env_get_opt::<u8>(UNSET), None);
        assert_eq!(env_get_str(UNSET, "hello"), "hello");
        assert!(!env_is_set(UNSET));
    }

    #[test]
    fn test_parse_bool() {
        for on in ["1", "true", "TRUE", "yes", "On", " on "] {
            assert_eq!(parse_bool(on), Some(true), "{on:?}");
        }
        for off in ["0", "false", "no", "OFF"] {
            assert_eq!(parse_bool(off), Some(false), "{off:?}");
        }
        assert_eq!(parse_bool("garbage"), None);
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn test_set_values() {
        std::env::set_var("__GCHECK_TEST_NUM__", " 123 ");
        assert_eq!(env_get("__GCHECK_TEST_NUM__", 0usize), 123);
        std::env::remove_var("__GCHECK_TEST_NUM__");

        std::env::set_var("__GCHECK_TEST_BOOL__", "garbage");
        assert!(env_get_bool("__GCHECK_TEST_BOOL__", true));
        std::env::remove_var("__GCHECK_TEST_BOOL__");

        std::env::set_var("__GCHECK_TEST_BAD__", "not_a_number");
        assert_eq!(env_get("__GCHECK_TEST_BAD__", 99usize), 99);
        std::env::remove_var("__GCHECK_TEST_BAD__");
    }
}
