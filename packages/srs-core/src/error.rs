use thiserror::Error;

#[derive(Debug, Error)]
pub enum SrsError {
    /// Precondition violation by the caller: blank item id, negative limit,
    /// negative timestamps.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Input could not be decoded into records
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("encode error: {0}")]
    Encode(String),
}

impl SrsError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, SrsError>;
