//! String helpers for reading loosely-typed payload fields.

use serde_json::{Map, Value};

/// Converts an empty string to `None`, otherwise returns `Some(value)`.
///
/// # Examples
///
/// ```
/// use hwstatus_domain::common::none_if_empty;
///
/// assert_eq!(none_if_empty("hello"), Some("hello"));
/// assert_eq!(none_if_empty(""), None);
/// assert_eq!(none_if_empty(" "), Some(" ")); // Whitespace is not empty
/// ```
pub fn none_if_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Reads the first non-empty string stored under any of `keys`.
///
/// Keys are tried in order, so the canonical spelling goes first and legacy
/// aliases after it. Non-string values count as absent.
///
/// # Examples
///
/// ```
/// use hwstatus_domain::common::str_field;
///
/// let obj = serde_json::json!({"homework_name": "hw1", "name": ""});
/// let map = obj.as_object().unwrap();
/// assert_eq!(str_field(map, &["name", "homework_name"]), Some("hw1"));
/// assert_eq!(str_field(map, &["status"]), None);
/// ```
pub fn str_field<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .filter_map(Value::as_str)
        .find_map(none_if_empty)
}
