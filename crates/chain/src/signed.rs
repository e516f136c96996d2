//! Handing packed bytes to an external signer.
//!
//! Key storage, digest computation and signature generation all live
//! outside this crate. A [`TransactionSigner`] receives the chain id and the
//! packed bytes and returns a signature string (e.g. `SIG_K1_...`).

use crate::{ChainId, ChainResult, SignerError, Transaction};
use proton_io::{BinaryWriter, PackableExt};
use tracing::debug;

/// Everything a signer needs to produce one signature.
#[derive(Debug, Clone, Copy)]
pub struct SigningRequest<'a> {
    pub chain_id: &'a ChainId,
    pub packed_trx: &'a [u8],
    /// Empty when the transaction carries no context-free data.
    pub packed_context_free_data: &'a [u8],
}

/// Signing capability supplied by the key-storage collaborator.
pub trait TransactionSigner {
    fn sign(&self, request: &SigningRequest<'_>) -> Result<String, SignerError>;
}

impl<F> TransactionSigner for F
where
    F: Fn(&SigningRequest<'_>) -> Result<String, SignerError>,
{
    fn sign(&self, request: &SigningRequest<'_>) -> Result<String, SignerError> {
        self(request)
    }
}

/// A transaction together with its signatures and context-free data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignedTransaction {
    transaction: Transaction,
    signatures: Vec<String>,
    context_free_data: Vec<Vec<u8>>,
}

impl SignedTransaction {
    pub fn new(transaction: Transaction) -> Self {
        Self {
            transaction,
            ..Self::default()
        }
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    /// Mutable access to the transaction. Existing signatures no longer
    /// cover the modified bytes and are dropped.
    pub fn transaction_mut(&mut self) -> &mut Transaction {
        self.signatures.clear();
        &mut self.transaction
    }

    pub fn signatures(&self) -> &[String] {
        &self.signatures
    }

    pub fn context_free_data(&self) -> &[Vec<u8>] {
        &self.context_free_data
    }

    pub fn add_context_free_data(&mut self, data: impl Into<Vec<u8>>) {
        self.signatures.clear();
        self.context_free_data.push(data.into());
    }

    /// Packs the context-free data as a list of length-prefixed buffers, or
    /// returns an empty buffer when there is none.
    pub fn packed_context_free_data(&self) -> Vec<u8> {
        if self.context_free_data.is_empty() {
            return Vec::new();
        }

        let mut writer = BinaryWriter::new();
        writer.put_variable_uint(self.context_free_data.len() as u64);
        for data in &self.context_free_data {
            writer.put_var_bytes(data);
        }
        writer.into_bytes()
    }

    /// Packs the transaction once and appends the signature `signer` returns.
    pub fn sign_with<S>(&mut self, signer: &S, chain_id: &ChainId) -> ChainResult<()>
    where
        S: TransactionSigner + ?Sized,
    {
        let packed_trx = self.transaction.to_packed_bytes()?;
        let packed_context_free_data = self.packed_context_free_data();
        let request = SigningRequest {
            chain_id,
            packed_trx: &packed_trx,
            packed_context_free_data: &packed_context_free_data,
        };

        let signature = signer.sign(&request)?;
        debug!(
            chain_id = %chain_id,
            bytes = packed_trx.len(),
            signatures = self.signatures.len() + 1,
            "signed transaction"
        );
        self.signatures.push(signature);
        Ok(())
    }
}
