//! Response shapes differ per backend route: some wrap the payload in
//! `{success, data}`, some return it bare, Mongo documents carry `_id`.

use serde_json::{Map, Value};

/// `{data: T}` becomes `T`; anything else is returned as is.
pub fn unwrap_data(body: Value) -> Value {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) if !data.is_null() => data,
            Some(_) => {
                map.insert("data".to_string(), Value::Null);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    }
}

/// Always yields a list. Shapes that are neither a list nor a wrapped list
/// are logged and treated as empty.
pub fn unwrap_list(body: Value, resource: &str) -> Vec<Value> {
    match unwrap_data(body) {
        Value::Array(items) => items.into_iter().map(normalize_id).collect(),
        Value::Null => Vec::new(),
        other => {
            tracing::warn!(resource, body = %other, "unexpected list response");
            Vec::new()
        }
    }
}

pub fn unwrap_item(body: Value) -> Value {
    normalize_id(unwrap_data(body))
}

/// Copies Mongo's `_id` into `id` when the document has no usable `id`.
pub fn normalize_id(value: Value) -> Value {
    let Value::Object(mut map) = value else {
        return value;
    };

    if !has_id(&map) {
        if let Some(raw) = map.get("_id").and_then(id_string) {
            map.insert("id".to_string(), Value::String(raw));
        }
    }

    Value::Object(map)
}

fn has_id(map: &Map<String, Value>) -> bool {
    map.get("id").and_then(id_string).is_some()
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map.get("$oid").and_then(id_string),
        _ => None,
    }
}
