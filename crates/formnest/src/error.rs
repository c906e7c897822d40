use formnest_document::DecodeError;
use formnest_json::EncodeError;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("failed to decode form data: {0}")]
    Decode(#[from] DecodeError),
    #[error("failed to encode JSON: {0}")]
    Encode(#[from] EncodeError),
}
