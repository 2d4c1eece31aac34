// SPDX-License-Identifier: MIT

//! Attribute helpers for dynamic objects
//!
//! Objects are `serde_json::Value`s. Attribute paths use dot notation
//! (`"user.email"`); a numeric segment indexes into an array (`"tags.0"`).

use crate::error::ExosError;
use serde_json::{Map, Value};

/// Follow a dotted path through nested objects and arrays
pub fn get_path<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(value, |current, part| match current {
        Value::Object(map) => map.get(part),
        Value::Array(items) => part.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Extract the attribute at `path`, failing if any segment is missing
pub fn xattr<'v>(value: &'v Value, path: &str) -> Result<&'v Value, ExosError> {
    get_path(value, path).ok_or_else(|| ExosError::attribute_not_found(path))
}

/// Extract the attribute at `path`, or `default` if it is missing
pub fn xattr_or(value: &Value, path: &str, default: Value) -> Value {
    get_path(value, path).cloned().unwrap_or(default)
}

/// Build a mapper that extracts the attribute at `path`.
///
/// `mattr("user.email")` behaves like `|account| account.user.email`.
pub fn mattr(path: impl Into<String>) -> impl Fn(&Value) -> Result<Value, ExosError> {
    let path = path.into();
    move |value: &Value| xattr(value, &path).cloned()
}

/// Extract the attribute at `path` from every item
pub fn map_attr<'v, I>(path: &str, items: I) -> Result<Vec<&'v Value>, ExosError>
where
    I: IntoIterator<Item = &'v Value>,
{
    items.into_iter().map(|item| xattr(item, path)).collect()
}

/// Pair every item with the attributes named by `attrs`
pub fn zip_with_attr<'v, I>(
    items: I,
    attrs: &[&str],
) -> Result<Vec<(&'v Value, Vec<&'v Value>)>, ExosError>
where
    I: IntoIterator<Item = &'v Value>,
{
    items
        .into_iter()
        .map(|item| {
            let values = attrs
                .iter()
                .map(|attr| xattr(item, attr))
                .collect::<Result<Vec<_>, _>>()?;
            Ok((item, values))
        })
        .collect()
}

/// Set `key` on `object` and hand the same object back.
///
/// A non-object is replaced by an empty object first.
pub fn setattr(object: &mut Value, key: impl Into<String>, value: Value) -> &mut Value {
    setattrs(object, [(key, value)])
}

/// Set every field of `fields` on `object`
pub fn setattrs<I, K>(object: &mut Value, fields: I) -> &mut Value
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    let mut map = match std::mem::take(object) {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    for (key, value) in fields {
        map.insert(key.into(), value);
    }
    *object = Value::Object(map);
    object
}

/// Shallow-merge objects left to right into a new object.
///
/// Later keys win, inputs are left untouched and non-objects are skipped.
pub fn extend(objects: &[&Value]) -> Value {
    let merged = objects
        .iter()
        .filter_map(|object| object.as_object())
        .fold(Map::new(), |mut acc, object| {
            for (k, v) in object {
                acc.insert(k.clone(), v.clone());
            }
            acc
        });
    Value::Object(merged)
}
