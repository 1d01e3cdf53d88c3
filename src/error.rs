//! Library error type.

/// Errors raised while loading or rendering a submission.
///
/// Blank strings, empty collections and unknown occurrence codes are not
/// errors: the renderer omits whatever has no content.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to deserialize submission: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error("unknown {field} code: {code}")]
    UnknownCode { field: &'static str, code: i64 },
}

pub type RenderResult<T> = Result<T, RenderError>;
