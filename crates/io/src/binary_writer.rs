use crate::{varint, IoError, IoResult, Packable};
use encoding_rs::Encoding;

/// An append-only sink that lays values out in the transaction wire format.
///
/// Fixed-width integers are little-endian, lengths and counts are LEB128
/// varints, strings are length-prefixed in the writer's character encoding.
/// Bytes already written are never removed or reordered.
///
/// # Examples
///
/// ```rust
/// use proton_io::BinaryWriter;
///
/// let mut writer = BinaryWriter::new();
/// writer.put_u32_le(42);
/// writer.put_string("eosio").unwrap();
///
/// assert_eq!(writer.as_bytes(), [42, 0, 0, 0, 5, b'e', b'o', b's', b'i', b'o']);
/// ```
#[derive(Debug, Clone)]
pub struct BinaryWriter {
    buffer: Vec<u8>,
    encoding: &'static Encoding,
}

impl Default for BinaryWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self::with_encoding(encoding_rs::UTF_8)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            encoding: encoding_rs::UTF_8,
        }
    }

    /// Creates a writer that encodes strings with `encoding` instead of UTF-8.
    pub fn with_encoding(encoding: &'static Encoding) -> Self {
        Self {
            buffer: Vec::new(),
            encoding,
        }
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.buffer)
    }

    pub fn put_byte(&mut self, value: u8) {
        self.buffer.push(value);
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    pub fn put_bool(&mut self, value: bool) {
        self.buffer.push(value as u8);
    }

    pub fn put_u8(&mut self, value: u8) {
        self.buffer.push(value);
    }

    pub fn put_u16_le(&mut self, value: u16) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    pub fn put_u32_le(&mut self, value: u32) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    pub fn put_u64_le(&mut self, value: u64) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    pub fn put_variable_uint(&mut self, value: u64) {
        varint::encode_into(value, &mut self.buffer);
    }

    /// Writes a varint length followed by the raw bytes.
    pub fn put_var_bytes(&mut self, bytes: &[u8]) {
        self.put_variable_uint(bytes.len() as u64);
        self.buffer.extend_from_slice(bytes);
    }

    /// Writes a length-prefixed string in the writer's encoding.
    pub fn put_string(&mut self, value: &str) -> IoResult<()> {
        if self.encoding == encoding_rs::UTF_8 {
            self.put_var_bytes(value.as_bytes());
            return Ok(());
        }

        let (bytes, output, had_errors) = self.encoding.encode(value);
        if output != self.encoding {
            return Err(IoError::encoding(
                self.encoding.name(),
                "encoding is not usable as an output encoding",
            ));
        }
        if had_errors {
            return Err(IoError::encoding(
                self.encoding.name(),
                format!("{value:?} contains unmappable characters"),
            ));
        }
        self.put_var_bytes(&bytes);
        Ok(())
    }

    pub fn put_packable<T: Packable + ?Sized>(&mut self, value: &T) -> IoResult<()> {
        value.pack(self)
    }

    /// Writes a varint element count followed by each element in order.
    ///
    /// `None` packs exactly like an empty collection.
    pub fn put_collection<T: Packable>(&mut self, items: Option<&[T]>) -> IoResult<()> {
        let items = items.unwrap_or_default();
        self.put_variable_uint(items.len() as u64);
        for item in items {
            item.pack(self)?;
        }
        Ok(())
    }

    /// Runs `pack` against a scratch writer and appends its output only on
    /// success. On failure this writer is left exactly as it was.
    pub fn put_atomic<F>(&mut self, pack: F) -> IoResult<()>
    where
        F: FnOnce(&mut BinaryWriter) -> IoResult<()>,
    {
        let mut scratch = BinaryWriter::with_encoding(self.encoding);
        pack(&mut scratch)?;
        self.buffer.extend_from_slice(&scratch.buffer);
        Ok(())
    }
}
