//! Transaction settings
//!
//! Defaults applied when a transaction header is built from chain head
//! information. Every field is optional in the TOML source.

use crate::{ConfigError, ConfigResult, NetworkType};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Settings used when building transaction headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSettings {
    /// Network the transactions target
    #[serde(default)]
    pub network: NetworkType,

    /// Explicit chain id (hex), overrides the network's well-known id
    #[serde(default)]
    pub chain_id: Option<String>,

    /// Seconds after the head block time at which a transaction expires
    #[serde(default = "default_expiration_seconds")]
    pub expiration_seconds: u32,

    /// Upper bound on billed NET, in 8-byte words (0 = no explicit limit)
    #[serde(default)]
    pub max_net_usage_words: u32,

    /// Upper bound on billed CPU, in milliseconds (0 = no explicit limit)
    #[serde(default)]
    pub max_cpu_usage_ms: u8,

    /// Seconds the transaction is delayed before execution
    #[serde(default)]
    pub delay_sec: u32,
}

fn default_expiration_seconds() -> u32 {
    30
}

impl Default for TransactionSettings {
    fn default() -> Self {
        Self {
            network: NetworkType::default(),
            chain_id: None,
            expiration_seconds: default_expiration_seconds(),
            max_net_usage_words: 0,
            max_cpu_usage_ms: 0,
            delay_sec: 0,
        }
    }
}

impl TransactionSettings {
    /// Parses and validates settings from TOML text.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let settings: Self = toml::from_str(source)?;
        settings.validate()?;
        debug!(
            network = ?settings.network,
            expiration_seconds = settings.expiration_seconds,
            "loaded transaction settings"
        );
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Loads settings from `path` when it exists, otherwise returns defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// The chain id transactions are signed for.
    pub fn resolved_chain_id(&self) -> Option<&str> {
        self.chain_id.as_deref().or_else(|| self.network.chain_id())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.expiration_seconds == 0 {
            return Err(ConfigError::Invalid(
                "expiration_seconds must be greater than zero".to_string(),
            ));
        }

        match self.resolved_chain_id() {
            None => Err(ConfigError::Invalid(
                "custom network requires an explicit chain_id".to_string(),
            )),
            Some(id) if id.len() != 64 || !id.bytes().all(|b| b.is_ascii_hexdigit()) => Err(
                ConfigError::Invalid(format!("chain_id {id:?} is not 64 hex characters")),
            ),
            Some(_) => Ok(()),
        }
    }
}
