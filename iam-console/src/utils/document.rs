//! Helpers for the semi-structured documents exchanged with the console
//! backend. Templates and creation payloads are plain JSON trees; these
//! functions address them by dotted path (`a.b.c`) and merge them.

use serde_json::{Map, Value};

/// Looks up a dotted path in a document.
pub fn get_path<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(document, |node, key| node.get(key))
}

/// Writes `value` at a dotted path, creating intermediate objects.
///
/// Any non-object found along the way is replaced by an empty object.
pub fn set_path(document: &mut Value, path: &str, value: Value) {
    let mut node = document;
    let mut keys = path.split('.').peekable();

    while let Some(key) = keys.next() {
        if !node.is_object() {
            *node = Value::Object(Map::new());
        }
        let Some(map) = node.as_object_mut() else {
            return;
        };

        if keys.peek().is_none() {
            map.insert(key.to_string(), value);
            return;
        }

        node = map
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
}

/// Recursively merges `source` into `target`, later values winning.
///
/// Objects merge key by key and arrays merge index by index, so a shorter
/// source array only overwrites the leading elements of the target. `null`
/// in the source counts as "not provided" and never clears a target value.
pub fn merge(target: &mut Value, source: &Value) {
    match (target, source) {
        (Value::Object(dst), Value::Object(src)) => {
            for (key, value) in src {
                if value.is_null() {
                    continue;
                }
                match dst.get_mut(key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        dst.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (Value::Array(dst), Value::Array(src)) => {
            for (index, value) in src.iter().enumerate() {
                match dst.get_mut(index) {
                    Some(existing) => merge(existing, value),
                    None => dst.push(value.clone()),
                }
            }
        }
        (target, source) => {
            if !source.is_null() {
                *target = source.clone();
            }
        }
    }
}

/// Collects the non-empty strings of a list value. Anything that is not a
/// list yields nothing; non-string and empty entries are dropped.
pub fn non_empty_strings(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .filter(|item| !item.trim().is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
