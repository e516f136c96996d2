//! # Proton Chain
//!
//! Transaction model and canonical packing for Proton (EOSIO-family) chains.
//!
//! A [`Transaction`] is built from a [`TransactionHeader`] and a list of
//! [`Action`]s, packed into the exact byte layout nodes verify signatures
//! against, and handed to an external [`TransactionSigner`].
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use proton_chain::{Action, PermissionLevel, Transaction, TransactionHeader};
//! use proton_io::PackableExt;
//!
//! let expiration = Utc.timestamp_opt(1_700_000_000, 0).single().unwrap();
//! let mut tx = Transaction::new(TransactionHeader::new(expiration, 100, 12345));
//! tx.add_action(
//!     Action::new("eosio.token", "transfer")
//!         .with_authorization(PermissionLevel::active("alice"))
//!         .with_data(vec![0u8; 16]),
//! );
//!
//! let bytes = tx.to_packed_bytes().unwrap();
//! assert_eq!(bytes.last(), Some(&0x00)); // no extensions
//! ```

pub mod action;
pub mod chain_id;
pub mod error;
pub mod extension;
pub mod header;
pub mod packed;
pub mod permission;
pub mod signed;
pub mod transaction;

pub use action::Action;
pub use chain_id::{ChainId, CHAIN_ID_SIZE};
pub use error::{ChainError, ChainResult, SignerError};
pub use extension::TransactionExtension;
pub use header::{TransactionHeader, BLOCK_ID_SIZE, FIXED_HEADER_SIZE};
pub use packed::{Compression, PackedTransaction};
pub use permission::PermissionLevel;
pub use signed::{SignedTransaction, SigningRequest, TransactionSigner};
pub use transaction::Transaction;
