use crate::{Action, ChainResult, TransactionExtension, TransactionHeader};
use chrono::{DateTime, Utc};
use proton_config::TransactionSettings;
use proton_io::{helper, BinaryWriter, IoResult, Packable};
use serde::{Deserialize, Serialize, Serializer};
use tracing::{trace, warn};

/// An unsigned transaction: header, context-free actions, actions and
/// extensions.
///
/// `actions` stays `None` until the first [`Transaction::add_action`]; it is
/// packed exactly like an empty list. Cloning (see [`Transaction::deep_copy`])
/// yields a transaction whose actions are owned copies, so authorization
/// variants can be explored on a clone without touching the original.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(flatten)]
    header: TransactionHeader,

    #[serde(default)]
    context_free_actions: Vec<Action>,

    #[serde(default, serialize_with = "actions_or_empty")]
    actions: Option<Vec<Action>>,

    #[serde(default)]
    transaction_extensions: Vec<TransactionExtension>,
}

fn actions_or_empty<S: Serializer>(
    actions: &Option<Vec<Action>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    actions.as_deref().unwrap_or_default().serialize(serializer)
}

impl Transaction {
    /// Creates a transaction with no actions.
    pub fn new(header: TransactionHeader) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    /// Builds the header from `settings` and the current chain head.
    pub fn from_settings(
        settings: &TransactionSettings,
        head_block_id: &str,
        head_block_time: DateTime<Utc>,
    ) -> ChainResult<Self> {
        let mut header = TransactionHeader {
            max_net_usage_words: settings.max_net_usage_words,
            max_cpu_usage_ms: settings.max_cpu_usage_ms,
            delay_sec: settings.delay_sec,
            ..TransactionHeader::default()
        };
        header.set_reference_block(head_block_id)?;
        header.set_expiration_from(head_block_time, settings.expiration_seconds)?;
        Ok(Self::new(header))
    }

    /// Returns an independent copy.
    ///
    /// The header is copied by value and every action is cloned into a new
    /// list, including its authorization list and payload buffer.
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    pub fn header(&self) -> &TransactionHeader {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut TransactionHeader {
        &mut self.header
    }

    /// Appends an action, creating the list on first use.
    pub fn add_action(&mut self, action: Action) {
        self.actions.get_or_insert_with(|| Vec::with_capacity(1)).push(action);
    }

    /// Actions in insertion order; empty when none were added.
    pub fn actions(&self) -> &[Action] {
        self.actions.as_deref().unwrap_or_default()
    }

    /// Mutable access to the actions, if the list exists.
    pub fn actions_mut(&mut self) -> Option<&mut Vec<Action>> {
        self.actions.as_mut()
    }

    pub fn set_actions(&mut self, actions: Option<Vec<Action>>) {
        self.actions = actions;
    }

    pub fn action_count(&self) -> usize {
        self.actions().len()
    }

    pub fn add_context_free_action(&mut self, action: Action) {
        self.context_free_actions.push(action);
    }

    pub fn context_free_actions(&self) -> &[Action] {
        &self.context_free_actions
    }

    pub fn context_free_action_count(&self) -> usize {
        self.context_free_actions.len()
    }

    pub fn add_extension(&mut self, extension: TransactionExtension) {
        self.transaction_extensions.push(extension);
    }

    pub fn extensions(&self) -> &[TransactionExtension] {
        &self.transaction_extensions
    }
}

impl Packable for Transaction {
    /// Packs the whole transaction or nothing: on error the writer is left
    /// as it was before the call.
    fn pack(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        if !self.transaction_extensions.is_empty() {
            warn!(
                count = self.transaction_extensions.len(),
                "packing transaction with reserved extensions"
            );
        }

        let start = writer.len();
        writer.put_atomic(|w| {
            self.header.pack(w)?;
            w.put_collection(Some(self.context_free_actions.as_slice()))?;
            w.put_collection(self.actions.as_deref())?;
            w.put_collection(Some(self.transaction_extensions.as_slice()))
        })?;

        trace!(
            context_free_actions = self.context_free_actions.len(),
            actions = self.action_count(),
            bytes = writer.len() - start,
            "packed transaction"
        );
        Ok(())
    }

    fn packed_size(&self) -> usize {
        self.header.packed_size()
            + helper::collection_size(Some(self.context_free_actions.as_slice()))
            + helper::collection_size(self.actions.as_deref())
            + helper::collection_size(Some(self.transaction_extensions.as_slice()))
    }
}
