//! The fixed-layout fields every transaction starts with.

use crate::{ChainError, ChainResult};
use chrono::{DateTime, Duration, SubsecRound, Utc};
use proton_io::{helper, BinaryWriter, IoError, IoResult, Packable};
use serde::{Deserialize, Serialize};

/// Length of a block id in bytes.
pub const BLOCK_ID_SIZE: usize = 32;

/// Bytes of the header that have a fixed width on the wire:
/// expiration (4) + ref_block_num (2) + ref_block_prefix (4) + max_cpu_usage_ms (1).
pub const FIXED_HEADER_SIZE: usize = 4 + 2 + 4 + 1;

/// Transaction header.
///
/// Wire layout, in this exact order:
///
/// | field               | encoding              |
/// |---------------------|-----------------------|
/// | expiration          | u32 LE, unix seconds  |
/// | ref_block_num       | u16 LE                |
/// | ref_block_prefix    | u32 LE                |
/// | max_net_usage_words | varint                |
/// | max_cpu_usage_ms    | u8                    |
/// | delay_sec           | varint                |
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionHeader {
    /// Time after which the transaction can no longer be included in a block.
    #[serde(with = "time_point_sec")]
    pub expiration: DateTime<Utc>,

    /// Low 16 bits of the reference block number.
    pub ref_block_num: u16,

    /// Bytes 8..12 of the reference block id, little-endian.
    pub ref_block_prefix: u32,

    /// NET billing limit in 8-byte words, 0 for no explicit limit.
    pub max_net_usage_words: u32,

    /// CPU billing limit in milliseconds, 0 for no explicit limit.
    pub max_cpu_usage_ms: u8,

    /// Seconds to delay execution.
    pub delay_sec: u32,
}

impl TransactionHeader {
    pub fn new(expiration: DateTime<Utc>, ref_block_num: u16, ref_block_prefix: u32) -> Self {
        Self {
            expiration: expiration.trunc_subsecs(0),
            ref_block_num,
            ref_block_prefix,
            ..Self::default()
        }
    }

    /// Sets the TAPoS reference from the hex id of a recent block.
    ///
    /// The block number is the big-endian u32 in the first four bytes of the
    /// id; only its low 16 bits are kept. The prefix is the little-endian u32
    /// at bytes 8..12.
    pub fn set_reference_block(&mut self, block_id: &str) -> ChainResult<()> {
        let bytes = hex::decode(block_id)
            .map_err(|err| ChainError::invalid_block_id(block_id, err.to_string()))?;
        let id = <[u8; BLOCK_ID_SIZE]>::try_from(bytes.as_slice()).map_err(|_| {
            ChainError::invalid_block_id(
                block_id,
                format!("expected {BLOCK_ID_SIZE} bytes, got {}", bytes.len()),
            )
        })?;

        let block_num = u32::from_be_bytes([id[0], id[1], id[2], id[3]]);
        self.ref_block_num = (block_num & 0xFFFF) as u16;
        self.ref_block_prefix = u32::from_le_bytes([id[8], id[9], id[10], id[11]]);
        Ok(())
    }

    /// Sets the expiration to `seconds` after `head_block_time`.
    pub fn set_expiration_from(
        &mut self,
        head_block_time: DateTime<Utc>,
        seconds: u32,
    ) -> ChainResult<()> {
        let expiration = head_block_time
            .checked_add_signed(Duration::seconds(i64::from(seconds)))
            .ok_or_else(|| {
                IoError::invariant(format!(
                    "expiration {head_block_time} + {seconds}s is out of range"
                ))
            })?;
        self.expiration = expiration.trunc_subsecs(0);
        Ok(())
    }

    /// Expiration as the u32 seconds-since-epoch the wire format carries.
    pub fn expiration_timestamp(&self) -> IoResult<u32> {
        let seconds = self.expiration.timestamp();
        u32::try_from(seconds).map_err(|_| {
            IoError::invariant(format!(
                "expiration {} ({seconds}s) does not fit in an unsigned 32-bit timestamp",
                self.expiration
            ))
        })
    }
}

impl Packable for TransactionHeader {
    fn pack(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        // Validate before writing so a bad header leaves the writer untouched.
        let expiration = self.expiration_timestamp()?;

        writer.put_u32_le(expiration);
        writer.put_u16_le(self.ref_block_num);
        writer.put_u32_le(self.ref_block_prefix);
        writer.put_variable_uint(u64::from(self.max_net_usage_words));
        writer.put_u8(self.max_cpu_usage_ms);
        writer.put_variable_uint(u64::from(self.delay_sec));
        Ok(())
    }

    fn packed_size(&self) -> usize {
        FIXED_HEADER_SIZE
            + helper::var_size(u64::from(self.max_net_usage_words))
            + helper::var_size(u64::from(self.delay_sec))
    }
}

/// `time_point_sec` as rendered by node APIs: `2023-11-14T22:13:20`, UTC, no zone suffix.
mod time_point_sec {
    use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let text = String::deserialize(deserializer)?;
        let naive = NaiveDateTime::parse_from_str(text.trim_end_matches('Z'), FORMAT)
            .map_err(D::Error::custom)?;
        Ok(Utc.from_utc_datetime(&naive))
    }
}
