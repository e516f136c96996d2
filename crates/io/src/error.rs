use thiserror::Error;

/// Errors raised while packing values into the wire format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IoError {
    /// A string cannot be represented in the writer's character encoding.
    #[error("cannot encode value as {encoding}: {message}")]
    Encoding {
        encoding: &'static str,
        message: String,
    },

    /// A varint ran out of input or does not fit in 64 bits.
    #[error("malformed varint: {0}")]
    MalformedVarint(String),

    /// A field holds a value the wire format cannot express.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl IoError {
    pub fn encoding(encoding: &'static str, message: impl Into<String>) -> Self {
        Self::Encoding {
            encoding,
            message: message.into(),
        }
    }

    pub fn malformed_varint(message: impl Into<String>) -> Self {
        Self::MalformedVarint(message.into())
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation(message.into())
    }
}

pub type IoResult<T> = Result<T, IoError>;
