use core::fmt::Display;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::Map;

const TRUE_LITERALS: [&str; 6] = ["1", "t", "T", "TRUE", "true", "True"];
const FALSE_LITERALS: [&str; 6] = ["0", "f", "F", "FALSE", "false", "False"];

/// Read a boolean literal: `1 t T TRUE true True` or `0 f F FALSE false False`.
pub fn parse_bool_literal(raw: &str) -> Option<bool> {
    if TRUE_LITERALS.contains(&raw) {
        Some(true)
    } else if FALSE_LITERALS.contains(&raw) {
        Some(false)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValueKind::Null => write!(f, "null"),
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::Float => write!(f, "float"),
            ValueKind::String => write!(f, "string"),
            ValueKind::Array => write!(f, "array"),
            ValueKind::Object => write!(f, "object"),
        }
    }
}

/// `inf`, `infinity` or `nan` in any case, optionally signed. Other text
/// that parses to a non-finite float is out of range and stays text.
fn is_non_finite_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|literal| unsigned.eq_ignore_ascii_case(literal))
}

/// A leaf value after coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Scalar {
    /// Coerce raw text, trying integer, then float, then boolean, and
    /// finally keeping the text as is.
    ///
    /// ```
    /// use formnest_document::value::Scalar;
    ///
    /// assert_eq!(Scalar::coerce("42"), Scalar::Integer(42));
    /// assert_eq!(Scalar::coerce("1.5"), Scalar::Float(1.5));
    /// assert_eq!(Scalar::coerce("true"), Scalar::Bool(true));
    /// assert_eq!(Scalar::coerce("1"), Scalar::Integer(1));
    /// assert_eq!(Scalar::coerce("hello"), Scalar::Text("hello".to_string()));
    /// ```
    pub fn coerce(raw: &str) -> Self {
        if let Ok(int) = raw.parse::<i64>() {
            return Scalar::Integer(int);
        }
        if let Ok(float) = raw.parse::<f64>()
            && (float.is_finite() || is_non_finite_literal(raw))
        {
            return Scalar::Float(float);
        }
        if let Some(b) = parse_bool_literal(raw) {
            return Scalar::Bool(b);
        }
        Scalar::Text(raw.to_string())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Scalar::Integer(_) => ValueKind::Integer,
            Scalar::Float(_) => ValueKind::Float,
            Scalar::Bool(_) => ValueKind::Bool,
            Scalar::Text(_) => ValueKind::String,
        }
    }

    pub fn to_value(&self) -> FormValue {
        match self {
            Scalar::Integer(i) => FormValue::Integer(*i),
            Scalar::Float(f) => FormValue::Float(*f),
            Scalar::Bool(b) => FormValue::Bool(*b),
            Scalar::Text(s) => FormValue::String(s.clone()),
        }
    }
}

/// Generic nested value produced by materializing a [`FormDocument`](crate::document::FormDocument).
///
/// `Null` only appears as a placeholder for array slots that no key supplied.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<FormValue>),
    Object(Map<String, FormValue>),
}

impl FormValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            FormValue::Null => ValueKind::Null,
            FormValue::Bool(_) => ValueKind::Bool,
            FormValue::Integer(_) => ValueKind::Integer,
            FormValue::Float(_) => ValueKind::Float,
            FormValue::String(_) => ValueKind::String,
            FormValue::Array(_) => ValueKind::Array,
            FormValue::Object(_) => ValueKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FormValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FormValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FormValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FormValue::Float(f) => Some(*f),
            FormValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FormValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[FormValue]> {
        match self {
            FormValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map<String, FormValue>> {
        match self {
            FormValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Look up an object member.
    pub fn get(&self, key: &str) -> Option<&FormValue> {
        self.as_object()?.get(key)
    }

    /// Look up an array slot.
    pub fn at(&self, index: usize) -> Option<&FormValue> {
        self.as_array()?.get(index)
    }
}

impl From<Scalar> for FormValue {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Integer(i) => FormValue::Integer(i),
            Scalar::Float(f) => FormValue::Float(f),
            Scalar::Bool(b) => FormValue::Bool(b),
            Scalar::Text(s) => FormValue::String(s),
        }
    }
}

impl From<bool> for FormValue {
    fn from(b: bool) -> Self {
        FormValue::Bool(b)
    }
}

impl From<i64> for FormValue {
    fn from(i: i64) -> Self {
        FormValue::Integer(i)
    }
}

impl From<f64> for FormValue {
    fn from(f: f64) -> Self {
        FormValue::Float(f)
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::String(s.to_string())
    }
}

impl From<String> for FormValue {
    fn from(s: String) -> Self {
        FormValue::String(s)
    }
}

impl Serialize for FormValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FormValue::Null => serializer.serialize_unit(),
            FormValue::Bool(b) => serializer.serialize_bool(*b),
            FormValue::Integer(i) => serializer.serialize_i64(*i),
            FormValue::Float(f) => serializer.serialize_f64(*f),
            FormValue::String(s) => serializer.serialize_str(s),
            FormValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            FormValue::Object(map) => {
                let mut ser = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    ser.serialize_entry(key, value)?;
                }
                ser.end()
            }
        }
    }
}
