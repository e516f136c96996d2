use crate::{ChainResult, SignedTransaction};
use proton_io::PackableExt;
use serde::{Deserialize, Serialize};

/// Compression applied to `packed_trx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    #[default]
    None,
}

/// Request body of the node's `push_transaction` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedTransaction {
    pub signatures: Vec<String>,
    pub compression: Compression,
    /// Hex of the packed context-free data, empty when there is none
    pub packed_context_free_data: String,
    /// Hex of the packed transaction
    pub packed_trx: String,
}

impl PackedTransaction {
    pub fn from_signed(signed: &SignedTransaction) -> ChainResult<Self> {
        let packed_trx = signed.transaction().to_packed_bytes()?;
        Ok(Self {
            signatures: signed.signatures().to_vec(),
            compression: Compression::None,
            packed_context_free_data: hex::encode(signed.packed_context_free_data()),
            packed_trx: hex::encode(packed_trx),
        })
    }
}
