//! Value guards.
//!
//! Precondition checks that return typed errors instead of terminating the
//! process, leaving the exit decision to the caller (the CLI maps validation
//! errors to exit code 2 in `output::response`; a caller that wants the old
//! keep-going behavior just inspects and drops the `Err`).
//!
//! Emptiness checks exist for container shapes only: slices cover lists,
//! arrays, and tuple-as-array data; maps cover mappings. Other types have no
//! emptiness to check, so no guard accepts them.

use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};

/// Require an Option to contain a value.
///
/// Replaces the common pattern:
/// ```ignore
/// value.ok_or_else(|| Error::validation_missing_value("field", "msg"))?
/// ```
///
/// With:
/// ```ignore
/// guard::require(value, "field", "msg")?
/// ```
pub fn require<T>(opt: Option<T>, field: &str, message: &str) -> Result<T> {
    opt.ok_or_else(|| Error::validation_missing_value(field, message))
}

/// Require an Option to contain a value, with hints for resolution.
pub fn require_with_hints<T>(
    opt: Option<T>,
    field: &str,
    message: &str,
    hints: Vec<String>,
) -> Result<T> {
    opt.ok_or_else(|| {
        let mut err = Error::validation_missing_value(field, message);
        for hint in hints {
            err = err.with_hint(hint);
        }
        err
    })
}

/// Require a string to be non-empty after trimming.
///
/// Returns a reference to the trimmed string on success.
pub fn require_non_empty<'a>(value: &'a str, field: &str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::validation_invalid_argument(field, message))
    } else {
        Ok(trimmed)
    }
}

/// Require a slice to be non-empty.
pub fn require_non_empty_slice<'a, T>(
    values: &'a [T],
    field: &str,
    message: &str,
) -> Result<&'a [T]> {
    if values.is_empty() {
        Err(Error::validation_empty_collection(field, "slice", message))
    } else {
        Ok(values)
    }
}

/// Require a hash map to be non-empty.
pub fn require_non_empty_map<'a, K, V>(
    map: &'a HashMap<K, V>,
    field: &str,
    message: &str,
) -> Result<&'a HashMap<K, V>> {
    if map.is_empty() {
        Err(Error::validation_empty_collection(field, "map", message))
    } else {
        Ok(map)
    }
}

/// Require an ordered map to be non-empty.
pub fn require_non_empty_btree_map<'a, K, V>(
    map: &'a BTreeMap<K, V>,
    field: &str,
    message: &str,
) -> Result<&'a BTreeMap<K, V>> {
    if map.is_empty() {
        Err(Error::validation_empty_collection(field, "map", message))
    } else {
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn require_returns_value_when_some() {
        let result = require(Some("value"), "field", "msg");
        assert_eq!(result.unwrap(), "value");
    }

    #[test]
    fn require_returns_error_when_none() {
        let result: Result<&str> = require(None, "field", "Missing field");
        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationMissingValue);
    }

    #[test]
    fn require_err_can_be_inspected_and_dropped() {
        // The redesigned force_exit=false: the caller decides, nothing exits.
        let result: Result<&str> = require(None, "field", "Missing field");
        if result.is_err() {
            // keep going
        }
    }

    #[test]
    fn require_with_hints_attaches_hints() {
        let result: Result<&str> =
            require_with_hints(None, "path", "Missing path", vec!["Pass --path".to_string()]);
        let err = result.unwrap_err();
        assert_eq!(err.hints.len(), 1);
    }

    #[test]
    fn require_non_empty_passes_for_non_empty() {
        let result = require_non_empty("hello", "field", "msg");
        assert_eq!(result.unwrap(), "hello");
    }

    #[test]
    fn require_non_empty_trims_whitespace() {
        let result = require_non_empty("  hello  ", "field", "msg");
        assert_eq!(result.unwrap(), "hello");
    }

    #[test]
    fn require_non_empty_fails_for_whitespace_only() {
        let result = require_non_empty("   ", "field", "Cannot be empty");
        assert!(result.is_err());
    }

    #[test]
    fn require_non_empty_slice_passes_for_non_empty() {
        let values = vec![1, 2, 3];
        let result = require_non_empty_slice(&values, "field", "msg");
        assert_eq!(result.unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn require_non_empty_slice_names_container_kind() {
        let values: Vec<i32> = vec![];
        let err = require_non_empty_slice(&values, "field", "Cannot be empty").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationEmptyCollection);
        assert_eq!(err.details["kind"], "slice");
    }

    #[test]
    fn require_non_empty_map_names_container_kind() {
        let map: HashMap<String, i32> = HashMap::new();
        let err = require_non_empty_map(&map, "field", "Cannot be empty").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationEmptyCollection);
        assert_eq!(err.details["kind"], "map");
    }

    #[test]
    fn require_non_empty_btree_map_passes_for_non_empty() {
        let mut map = BTreeMap::new();
        map.insert("k", 1);
        assert!(require_non_empty_btree_map(&map, "field", "msg").is_ok());
    }
}
