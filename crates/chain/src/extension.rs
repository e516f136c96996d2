use proton_io::{helper, BinaryWriter, IoResult, Packable};
use serde::{Deserialize, Serialize};

/// A type-tagged opaque buffer appended to a transaction.
///
/// Readers that do not know `kind` skip the record. Nothing in this crate
/// interprets the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionExtension {
    #[serde(rename = "type")]
    pub kind: u16,

    #[serde(with = "hex")]
    pub data: Vec<u8>,
}

impl TransactionExtension {
    pub fn new(kind: u16, data: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            data: data.into(),
        }
    }
}

impl Packable for TransactionExtension {
    fn pack(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.put_variable_uint(u64::from(self.kind));
        writer.put_var_bytes(&self.data);
        Ok(())
    }

    fn packed_size(&self) -> usize {
        helper::var_size(u64::from(self.kind)) + helper::var_size_bytes(&self.data)
    }
}
