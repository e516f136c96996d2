//! # Proton IO
//!
//! Wire-level building blocks for packing EOSIO-family transactions.
//!
//! - [`varint`]: LEB128 variable-length unsigned integers
//! - [`BinaryWriter`]: append-only sink with typed `put_*` operations
//! - [`Packable`]: the capability every wire entity implements
//!
//! ## Example
//!
//! ```rust
//! use proton_io::{varint, BinaryWriter};
//!
//! let mut writer = BinaryWriter::new();
//! writer.put_variable_uint(300);
//! assert_eq!(writer.as_bytes(), varint::encode(300).as_slice());
//! assert_eq!(varint::decode(writer.as_bytes()).unwrap(), (300, 2));
//! ```

mod binary_writer;
mod error;
mod packable;
pub mod varint;

pub use binary_writer::BinaryWriter;
pub use error::{IoError, IoResult};
pub use packable::{helper, Packable, PackableExt};
