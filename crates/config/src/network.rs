//! Network type and chain identifiers

use serde::{Deserialize, Serialize};

/// Proton mainnet chain id.
pub const MAINNET_CHAIN_ID: &str =
    "384da888112027f0321850a169f737c33e53b388aad48b5adace4bab97f437e0";

/// Proton testnet chain id.
pub const TESTNET_CHAIN_ID: &str =
    "71ee83bcf52142d61019d95f9cc5427ba6a0d7ff8accd9e2088ae2abeaf3d3dd";

/// The network a transaction is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    #[default]
    MainNet,
    TestNet,
    /// Any other chain; the chain id must be configured explicitly.
    Custom,
}

impl NetworkType {
    /// Well-known chain id of the network, if it has one.
    #[must_use]
    pub const fn chain_id(&self) -> Option<&'static str> {
        match self {
            Self::MainNet => Some(MAINNET_CHAIN_ID),
            Self::TestNet => Some(TESTNET_CHAIN_ID),
            Self::Custom => None,
        }
    }
}
