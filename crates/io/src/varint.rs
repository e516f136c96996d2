//! LEB128 variable-length unsigned integers.
//!
//! Every byte carries seven bits of the value, least significant group
//! first. The high bit is set on all bytes except the last one, so the
//! encoding of a value is unique and never padded:
//!
//! - `0` encodes as `[0x00]`
//! - `127` encodes as `[0x7F]`
//! - `128` encodes as `[0x80, 0x01]`
//! - `624485` encodes as `[0xE5, 0x8E, 0x26]`
//!
//! All length prefixes of the transaction wire format use this encoding.

use crate::{IoError, IoResult};

/// Maximum number of bytes a `u64` can occupy once encoded.
pub const MAX_VARINT_LEN: usize = 10;

const CONTINUATION: u8 = 0x80;
const PAYLOAD_MASK: u8 = 0x7F;

/// Encodes `value` into a freshly allocated buffer.
#[inline]
pub fn encode(value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(value));
    encode_into(value, &mut out);
    out
}

/// Appends the encoding of `value` to `out`.
#[inline]
pub fn encode_into(mut value: u64, out: &mut Vec<u8>) {
    loop {
        let byte = (value as u8) & PAYLOAD_MASK;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | CONTINUATION);
    }
}

/// Returns the number of bytes `encode(value)` produces.
#[inline]
pub fn encoded_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    bits.max(1).div_ceil(7)
}

/// Decodes a varint from the front of `bytes`.
///
/// Returns the value together with the number of bytes consumed. Trailing
/// bytes after the terminating byte are left untouched.
pub fn decode(bytes: &[u8]) -> IoResult<(u64, usize)> {
    let mut value: u64 = 0;

    for (index, &byte) in bytes.iter().enumerate() {
        if index == MAX_VARINT_LEN {
            return Err(IoError::malformed_varint(format!(
                "encoding longer than {MAX_VARINT_LEN} bytes"
            )));
        }

        let payload = u64::from(byte & PAYLOAD_MASK);
        let shift = 7 * index as u32;
        // The tenth byte may only contribute the single remaining bit.
        if index == MAX_VARINT_LEN - 1 && payload > 1 {
            return Err(IoError::malformed_varint("value overflows 64 bits"));
        }
        value |= payload << shift;

        if byte & CONTINUATION == 0 {
            return Ok((value, index + 1));
        }
    }

    Err(IoError::malformed_varint(format!(
        "input exhausted after {} bytes without a terminating byte",
        bytes.len()
    )))
}
