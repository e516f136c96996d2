//! # Proton-RS: transaction packing for Proton chains
//!
//! Builds unsigned Proton (EOSIO-family) transactions and packs them into
//! the canonical byte layout nodes verify signatures against.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use proton_rs::prelude::*;
//!
//! let expiration = Utc.timestamp_opt(1_700_000_000, 0).single().unwrap();
//! let mut tx = Transaction::new(TransactionHeader::new(expiration, 100, 12345));
//! tx.add_action(
//!     Action::new("eosio.token", "transfer")
//!         .with_authorization(PermissionLevel::active("alice"))
//!         .with_data(vec![0u8; 16]),
//! );
//!
//! let packed = tx.to_packed_bytes()?;
//! assert_eq!(packed.len(), tx.packed_size());
//! # Ok::<(), proton_rs::io::IoError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`proton_io`] - Varint codec, binary writer and the `Packable` trait
//! - [`proton_config`] - Transaction settings loaded from TOML
//! - [`proton_chain`] - Header, actions, transaction and the signing seam

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use proton_chain as chain;
pub use proton_config as config;
pub use proton_io as io;

/// Common imports for building and packing transactions
pub mod prelude {
    pub use crate::chain::{
        Action, ChainId, PackedTransaction, PermissionLevel, SignedTransaction, SigningRequest,
        Transaction, TransactionExtension, TransactionHeader, TransactionSigner,
    };
    pub use crate::config::{NetworkType, TransactionSettings};
    pub use crate::io::{BinaryWriter, Packable, PackableExt};
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
