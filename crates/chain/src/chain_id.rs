use crate::{ChainError, ChainResult};
use proton_config::TransactionSettings;
use std::fmt;
use std::str::FromStr;

pub const CHAIN_ID_SIZE: usize = 32;

/// Identifier of the chain a signature is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId([u8; CHAIN_ID_SIZE]);

impl ChainId {
    pub const fn new(bytes: [u8; CHAIN_ID_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_hex(value: &str) -> ChainResult<Self> {
        let bytes = hex::decode(value).map_err(|err| ChainError::InvalidChainId(err.to_string()))?;
        let bytes = <[u8; CHAIN_ID_SIZE]>::try_from(bytes.as_slice()).map_err(|_| {
            ChainError::InvalidChainId(format!(
                "expected {CHAIN_ID_SIZE} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(bytes))
    }

    /// The chain id configured in `settings`, falling back to the network's.
    pub fn from_settings(settings: &TransactionSettings) -> ChainResult<Self> {
        let id = settings.resolved_chain_id().ok_or_else(|| {
            ChainError::InvalidChainId("settings do not name a chain id".to_string())
        })?;
        Self::from_hex(id)
    }

    pub fn as_bytes(&self) -> &[u8; CHAIN_ID_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for ChainId {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
