//! Lenient accessors for JSON object members.
//!
//! Every accessor returns `None` when the member is missing, `null`, or of
//! the wrong type. Parsers build on these so that missing optional data
//! never turns into an error.

use chrono::NaiveDate;
use serde_json::{Map, Value};

pub type Object = Map<String, Value>;

pub fn object_member<'a>(obj: &'a Object, key: &str) -> Option<&'a Object> {
    obj.get(key).and_then(Value::as_object)
}

pub fn array_member<'a>(obj: &'a Object, key: &str) -> Option<&'a Vec<Value>> {
    obj.get(key).and_then(Value::as_array)
}

pub fn long_member(obj: &Object, key: &str) -> Option<i64> {
    obj.get(key).and_then(Value::as_i64)
}

pub fn int_member(obj: &Object, key: &str) -> Option<i32> {
    long_member(obj, key).and_then(|v| i32::try_from(v).ok())
}

pub fn double_member(obj: &Object, key: &str) -> Option<f64> {
    obj.get(key).and_then(Value::as_f64)
}

pub fn bool_member(obj: &Object, key: &str) -> Option<bool> {
    obj.get(key).and_then(Value::as_bool)
}

pub fn string_member(obj: &Object, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Parse an ISO `YYYY-MM-DD` date member.
pub fn date_member(obj: &Object, key: &str) -> Option<NaiveDate> {
    obj.get(key)
        .and_then(Value::as_str)
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

/// Integers in an array member; non-integer entries are skipped.
pub fn int_list_member(obj: &Object, key: &str) -> Vec<i32> {
    array_member(obj, key)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_i64)
                .filter_map(|v| i32::try_from(v).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Insert `value` under `key` only when present.
pub fn put_opt<T: Into<Value>>(obj: &mut Object, key: &str, value: Option<T>) {
    if let Some(value) = value {
        obj.insert(key.to_string(), value.into());
    }
}
