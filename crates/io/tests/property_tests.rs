//! Property-based tests for proton-io
//!
//! These tests use proptest to verify:
//! - Varint round-trips through decode with the exact consumed length
//! - Varint encodings are minimal
//! - Collections are packed with a matching length prefix

use proptest::prelude::*;
use proton_io::{helper, varint, BinaryWriter, IoResult, Packable};

#[derive(Debug, Clone)]
struct Word(String);

impl Packable for Word {
    fn pack(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.put_string(&self.0)
    }

    fn packed_size(&self) -> usize {
        helper::var_size_str(&self.0)
    }
}

proptest! {
    /// decode(encode(n)) == (n, encode(n).len())
    #[test]
    fn test_varint_roundtrip(value in any::<u64>()) {
        let encoded = varint::encode(value);
        prop_assert_eq!(varint::decode(&encoded).unwrap(), (value, encoded.len()));
    }

    /// Only the final byte lacks the continuation flag, and it is never a
    /// padding zero unless the value itself is zero.
    #[test]
    fn test_varint_minimal(value in any::<u64>()) {
        let encoded = varint::encode(value);
        let (last, head) = encoded.split_last().unwrap();
        prop_assert!(head.iter().all(|b| b & 0x80 != 0));
        prop_assert_eq!(last & 0x80, 0);
        if value != 0 {
            prop_assert_ne!(*last, 0);
        }
        prop_assert_eq!(encoded.len(), varint::encoded_len(value));
    }

    /// Trailing data after a varint is never consumed.
    #[test]
    fn test_varint_ignores_trailing(value in any::<u64>(), tail in any::<Vec<u8>>()) {
        let mut encoded = varint::encode(value);
        let len = encoded.len();
        encoded.extend_from_slice(&tail);
        prop_assert_eq!(varint::decode(&encoded).unwrap(), (value, len));
    }

    /// Any strict prefix of an encoding is rejected.
    #[test]
    fn test_varint_truncation_rejected(value in 128u64..) {
        let encoded = varint::encode(value);
        prop_assert!(varint::decode(&encoded[..encoded.len() - 1]).is_err());
    }

    /// The collection prefix equals the element count and elements follow in order.
    #[test]
    fn test_collection_prefix(words in prop::collection::vec("[a-z1-5.]{0,12}", 0..40)) {
        let items: Vec<Word> = words.iter().cloned().map(Word).collect();
        let mut writer = BinaryWriter::new();
        writer.put_collection(Some(items.as_slice())).unwrap();

        let bytes = writer.into_bytes();
        let (count, mut offset) = varint::decode(&bytes).unwrap();
        prop_assert_eq!(count as usize, items.len());

        for word in &words {
            let (len, used) = varint::decode(&bytes[offset..]).unwrap();
            offset += used;
            prop_assert_eq!(&bytes[offset..offset + len as usize], word.as_bytes());
            offset += len as usize;
        }
        prop_assert_eq!(offset, bytes.len());
        prop_assert_eq!(bytes.len(), helper::collection_size(Some(items.as_slice())));
    }
}
