/// What to do with floats JSON cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonFinitePolicy {
    /// Fail with [`EncodeError::NonFiniteFloat`](crate::EncodeError::NonFiniteFloat).
    #[default]
    Error,
    /// Write `null` instead.
    Null,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub non_finite: NonFinitePolicy,
}
