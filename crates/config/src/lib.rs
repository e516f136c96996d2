//! Proton Configuration Module
//!
//! Settings consumed when transaction headers are built from chain head
//! information.

mod error;
mod network;
mod settings;

pub use error::{ConfigError, ConfigResult};
pub use network::{NetworkType, MAINNET_CHAIN_ID, TESTNET_CHAIN_ID};
pub use settings::TransactionSettings;
