#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("cannot represent {value} at `{path}` as a JSON number")]
    NonFiniteFloat { path: String, value: f64 },
    #[error("failed to write JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PartialEq for EncodeError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                EncodeError::NonFiniteFloat { path: p1, value: v1 },
                EncodeError::NonFiniteFloat { path: p2, value: v2 },
            ) => p1 == p2 && (v1 == v2 || (v1.is_nan() && v2.is_nan())),
            _ => false,
        }
    }
}
