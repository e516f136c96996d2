use proton_io::IoError;
use thiserror::Error;

/// Errors surfaced by the signing seam's collaborators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignerError {
    #[error("no signing key available for {0}")]
    KeyUnavailable(String),

    #[error("signing failed: {0}")]
    Failed(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error("invalid block id {id:?}: {reason}")]
    InvalidBlockId { id: String, reason: String },

    #[error("invalid chain id: {0}")]
    InvalidChainId(String),

    #[error("invalid action data: {0}")]
    InvalidHexData(String),

    #[error(transparent)]
    Signing(#[from] SignerError),
}

impl ChainError {
    pub fn invalid_block_id(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBlockId {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

pub type ChainResult<T> = Result<T, ChainError>;
