//! The packing capability shared by every wire-level entity.

use crate::{varint, BinaryWriter, IoResult};

/// A value that can lay itself out in the transaction wire format.
pub trait Packable {
    /// Appends the canonical encoding of `self` to `writer`.
    fn pack(&self, writer: &mut BinaryWriter) -> IoResult<()>;

    /// The number of bytes `pack` writes with a UTF-8 writer.
    fn packed_size(&self) -> usize;
}

/// Extension methods for packable values.
pub trait PackableExt: Packable {
    /// Packs into a fresh buffer and returns it.
    ///
    /// Nothing is returned unless the whole value packed successfully.
    fn to_packed_bytes(&self) -> IoResult<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(self.packed_size());
        self.pack(&mut writer)?;
        Ok(writer.into_bytes())
    }
}

impl<T: Packable + ?Sized> PackableExt for T {}

impl Packable for String {
    fn pack(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.put_string(self)
    }

    fn packed_size(&self) -> usize {
        helper::var_size_str(self)
    }
}

impl Packable for str {
    fn pack(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.put_string(self)
    }

    fn packed_size(&self) -> usize {
        helper::var_size_str(self)
    }
}

/// Size helpers for length-prefixed values.
pub mod helper {
    use super::{varint, Packable};

    #[inline]
    pub fn var_size(value: u64) -> usize {
        varint::encoded_len(value)
    }

    #[inline]
    pub fn var_size_bytes(bytes: &[u8]) -> usize {
        var_size(bytes.len() as u64) + bytes.len()
    }

    #[inline]
    pub fn var_size_str(value: &str) -> usize {
        var_size_bytes(value.as_bytes())
    }

    /// Size of a collection packed with [`crate::BinaryWriter::put_collection`].
    #[inline]
    pub fn collection_size<T: Packable>(items: Option<&[T]>) -> usize {
        let items = items.unwrap_or_default();
        var_size(items.len() as u64) + items.iter().map(Packable::packed_size).sum::<usize>()
    }
}
