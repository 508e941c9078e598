//! Optional path extraction over untyped JSON.
//!
//! Every field of a report row is read through `lookup`, so a missing key at any
//! depth yields `None` instead of an error.

use serde_json::Value;

/// Follows `path` through nested objects, returning `None` as soon as a key is
/// missing or an intermediate value is not an object.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.as_object()?.get(*key))
}

/// `lookup` narrowed to a finite number.
pub fn lookup_f64(value: &Value, path: &[&str]) -> Option<f64> {
    lookup(value, path)?.as_f64().filter(|n| n.is_finite())
}

/// `lookup` narrowed to a string.
pub fn lookup_str<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    lookup(value, path)?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_nested_value() {
        let value = json!({"a": {"b": {"c": 1}}});
        assert_eq!(lookup(&value, &["a", "b", "c"]), Some(&json!(1)));
    }

    #[test]
    fn test_lookup_empty_path_returns_root() {
        let value = json!({"a": 1});
        assert_eq!(lookup(&value, &[]), Some(&value));
    }

    #[test]
    fn test_lookup_missing_key() {
        let value = json!({"a": {"b": {}}});
        assert_eq!(lookup(&value, &["a", "b", "c"]), None);
        assert_eq!(lookup(&value, &["x"]), None);
    }

    #[test]
    fn test_lookup_through_non_object() {
        let value = json!({"a": [1, 2, 3], "b": "text", "c": null});
        assert_eq!(lookup(&value, &["a", "0"]), None);
        assert_eq!(lookup(&value, &["b", "len"]), None);
        assert_eq!(lookup(&value, &["c", "d"]), None);
    }

    #[test]
    fn test_lookup_f64_rejects_non_numbers() {
        let value = json!({"n": 0.5, "s": "0.5", "z": null, "i": 1});
        assert_eq!(lookup_f64(&value, &["n"]), Some(0.5));
        assert_eq!(lookup_f64(&value, &["i"]), Some(1.0));
        assert_eq!(lookup_f64(&value, &["s"]), None);
        assert_eq!(lookup_f64(&value, &["z"]), None);
    }

    #[test]
    fn test_lookup_str() {
        let value = json!({"d": {"displayValue": "1.2 s", "score": 0.8}});
        assert_eq!(lookup_str(&value, &["d", "displayValue"]), Some("1.2 s"));
        assert_eq!(lookup_str(&value, &["d", "score"]), None);
    }
}
