//! Field decoders that turn unexpected JSON types into "absent" instead of
//! failing the whole response.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::config::Layout;
use crate::{Product, Suggestions};

fn value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Option::<Value>::deserialize(deserializer)
}

pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(matches!(value(deserializer)?, Some(Value::Bool(true))))
}

pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(value(deserializer)?.as_ref().and_then(scalar_text))
}

/// Only genuine JSON strings; a number where a URL or id belongs is dropped.
pub fn plain_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match value(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(string(deserializer)?.unwrap_or_default())
}

pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match value(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite()))
}

pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match value(deserializer)? {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

pub fn small_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(integer(deserializer)?.and_then(|n| u32::try_from(n).ok()).filter(|n| *n > 0))
}

pub fn fraction<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f32>, D::Error> {
    Ok(number(deserializer)?.map(|n| n as f32))
}

pub fn optional_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(match value(deserializer)? {
        Some(Value::Bool(b)) => Some(b),
        _ => None,
    })
}

pub fn layout<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Layout>, D::Error> {
    Ok(match value(deserializer)? {
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Some(Layout::Grid),
            "list" => Some(Layout::List),
            _ => None,
        },
        _ => None,
    })
}

pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Ok(integer(deserializer)?.and_then(|n| u64::try_from(n).ok()))
}

pub fn string_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match value(deserializer)? {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

pub fn optional_string_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    Ok(match value(deserializer)? {
        Some(Value::Array(items)) => Some(items.iter().filter_map(scalar_text).collect()),
        _ => None,
    })
}

pub fn object<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Map<String, Value>, D::Error> {
    Ok(match value(deserializer)? {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    })
}

pub fn products<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Product>, D::Error> {
    Ok(match value(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

pub fn suggestions<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Suggestions, D::Error> {
    Ok(match value(deserializer)? {
        Some(item @ Value::Object(_)) => serde_json::from_value(item).unwrap_or_default(),
        _ => Suggestions::default(),
    })
}
