use proton_io::{helper, BinaryWriter, IoResult, Packable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An `actor@permission` pair authorizing an action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PermissionLevel {
    pub actor: String,
    pub permission: String,
}

impl PermissionLevel {
    pub fn new(actor: impl Into<String>, permission: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            permission: permission.into(),
        }
    }

    /// `actor@active`, the level most transfers are signed with.
    pub fn active(actor: impl Into<String>) -> Self {
        Self::new(actor, "active")
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.actor, self.permission)
    }
}

impl Packable for PermissionLevel {
    fn pack(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.put_string(&self.actor)?;
        writer.put_string(&self.permission)
    }

    fn packed_size(&self) -> usize {
        helper::var_size_str(&self.actor) + helper::var_size_str(&self.permission)
    }
}
