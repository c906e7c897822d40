//! Conversions for callers that read single raw values themselves.

use core::num::{ParseFloatError, ParseIntError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("empty {0}")]
    Empty(&'static str),
    #[error("invalid timestamp format: {0}")]
    Timestamp(#[source] ParseIntError),
    #[error("invalid integer: {0}")]
    Int(#[source] ParseIntError),
    #[error("invalid float: {0}")]
    Float(#[source] ParseFloatError),
}

/// Read a Unix timestamp in seconds.
pub fn parse_timestamp(timestamp: &str) -> Result<i64, ValueError> {
    if timestamp.is_empty() {
        return Err(ValueError::Empty("timestamp"));
    }
    timestamp.parse().map_err(ValueError::Timestamp)
}

pub fn parse_int(value: &str) -> Result<i64, ValueError> {
    if value.is_empty() {
        return Err(ValueError::Empty("value"));
    }
    value.parse().map_err(ValueError::Int)
}

pub fn parse_float(value: &str) -> Result<f64, ValueError> {
    if value.is_empty() {
        return Err(ValueError::Empty("value"));
    }
    value.parse().map_err(ValueError::Float)
}
