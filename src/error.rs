use thiserror::Error;

/// Failure decoding an API response body. Malformed values inside a
/// well-formed record are recovered field-by-field and never surface here;
/// this only fires when a body is not the record it claims to be.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Malformed signal payload: {0}")]
    Signal(#[source] serde_json::Error),
    #[error("Malformed analysis post payload: {0}")]
    Post(#[source] serde_json::Error),
}
