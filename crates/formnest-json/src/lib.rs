#![doc = include_str!("../README.md")]

mod config;
mod error;

pub use config::{Config, NonFinitePolicy};
pub use error::EncodeError;

use formnest_document::{FormDocument, FormValue};
use serde_json::Value as JsonValue;
use tracing::debug;

/// Convert a generic value into a JSON value.
pub fn value_to_json(value: &FormValue, config: &Config) -> Result<JsonValue, EncodeError> {
    convert_value(value, config, &mut String::new())
}

/// Materialize a document and convert it into a JSON value.
pub fn document_to_json(doc: &FormDocument, config: &Config) -> Result<JsonValue, EncodeError> {
    value_to_json(&doc.to_value(), config)
}

/// Compact JSON text.
pub fn to_string(value: &FormValue, config: &Config) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(&value_to_json(value, config)?)?)
}

/// JSON text indented by two spaces.
pub fn to_string_pretty(value: &FormValue, config: &Config) -> Result<String, EncodeError> {
    Ok(serde_json::to_string_pretty(&value_to_json(value, config)?)?)
}

fn convert_value(
    value: &FormValue,
    config: &Config,
    path: &mut String,
) -> Result<JsonValue, EncodeError> {
    match value {
        FormValue::Null => Ok(JsonValue::Null),
        FormValue::Bool(b) => Ok(JsonValue::Bool(*b)),
        FormValue::Integer(i) => Ok(JsonValue::Number((*i).into())),
        FormValue::Float(f) => match serde_json::Number::from_f64(*f) {
            Some(num) => Ok(JsonValue::Number(num)),
            None => match config.non_finite {
                NonFinitePolicy::Error => Err(EncodeError::NonFiniteFloat {
                    path: path.clone(),
                    value: *f,
                }),
                NonFinitePolicy::Null => {
                    debug!(path = %path, value = %f, "non-finite float written as null");
                    Ok(JsonValue::Null)
                }
            },
        },
        FormValue::String(s) => Ok(JsonValue::String(s.clone())),
        FormValue::Array(items) => {
            let mut result = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let len = path.len();
                path.push_str(&format!("[{index}]"));
                result.push(convert_value(item, config, path)?);
                path.truncate(len);
            }
            Ok(JsonValue::Array(result))
        }
        FormValue::Object(map) => {
            let mut result = serde_json::Map::new();
            for (key, item) in map {
                let len = path.len();
                if path.is_empty() {
                    path.push_str(key);
                } else {
                    path.push_str(&format!("[{key}]"));
                }
                result.insert(key.clone(), convert_value(item, config, path)?);
                path.truncate(len);
            }
            Ok(JsonValue::Object(result))
        }
    }
}
