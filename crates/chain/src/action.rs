use crate::{ChainError, ChainResult, PermissionLevel};
use proton_io::{helper, BinaryWriter, IoResult, Packable};
use serde::{Deserialize, Serialize};

/// A single contract invocation.
///
/// `data` holds the already-serialized action arguments; it is packed as an
/// opaque, length-prefixed byte sequence. Cloning an action copies its
/// authorization list and payload, so a clone never aliases the original.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Action {
    /// Contract account the action is dispatched to.
    pub account: String,

    /// Action name within the contract.
    pub name: String,

    /// Permission levels that authorize the action, in signing order.
    pub authorization: Vec<PermissionLevel>,

    /// Packed action arguments, hex-encoded in JSON.
    #[serde(with = "hex")]
    pub data: Vec<u8>,
}

impl Action {
    pub fn new(account: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            name: name.into(),
            authorization: Vec::new(),
            data: Vec::new(),
        }
    }

    pub fn with_authorization(mut self, level: PermissionLevel) -> Self {
        self.authorization.push(level);
        self
    }

    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }

    /// Sets the payload from hex, as returned by an `abi_json_to_bin` call.
    pub fn with_hex_data(mut self, data: &str) -> ChainResult<Self> {
        self.data = hex::decode(data).map_err(|err| ChainError::InvalidHexData(err.to_string()))?;
        Ok(self)
    }

    pub fn add_authorization(&mut self, level: PermissionLevel) {
        self.authorization.push(level);
    }

    pub fn set_authorization(&mut self, authorization: Vec<PermissionLevel>) {
        self.authorization = authorization;
    }

    pub fn data_hex(&self) -> String {
        hex::encode(&self.data)
    }
}

impl Packable for Action {
    fn pack(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.put_string(&self.account)?;
        writer.put_string(&self.name)?;
        writer.put_collection(Some(self.authorization.as_slice()))?;
        writer.put_var_bytes(&self.data);
        Ok(())
    }

    fn packed_size(&self) -> usize {
        helper::var_size_str(&self.account)
            + helper::var_size_str(&self.name)
            + helper::collection_size(Some(self.authorization.as_slice()))
            + helper::var_size_bytes(&self.data)
    }
}
