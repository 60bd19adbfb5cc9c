//! tagpack is a compact binary encoding for a closed set of value kinds:
//! unsigned 64-bit integers, 64-bit floats, byte strings and ordered lists of
//! any of these, nested to any depth.
//!
//! Every value is written as an 8-byte little-endian tag followed by its
//! payload. Fixed-width kinds carry 8 bytes, `Bytes` carries a length and the
//! raw bytes, and `List` carries an element count followed by each element's
//! own tagged encoding. A [`Sequence`] is the top-level packet: an item count
//! and then the tagged items.
//!
//! ```text
//! packet         := item_count:u64 item*
//! item           := tag:u64 payload
//! payload(UInt)  := value:u64
//! payload(Float) := value:f64
//! payload(Bytes) := length:u64 bytes[length]
//! payload(List)  := count:u64 item{count}
//! ```
//!
//! Decoding is recursive, so its stack depth grows with the nesting depth of
//! the input. Callers handling untrusted data should bound input size
//! accordingly.
//!
//! # Examples
//!
//! ```
//! use tagpack::{Value, decode, encode, list};
//! use bytes::Bytes;
//!
//! let value = list!["qwerty", 100500u64];
//! let bytes = encode(&value);
//!
//! let decoded = decode(Bytes::from(bytes)).unwrap();
//! assert_eq!(decoded, value);
//! assert_eq!(decoded.as_list().unwrap()[1], Value::UInt(100500));
//! ```

mod any;
mod buf;
mod decode;
mod encode;
mod error;
mod sequence;
mod traits;
mod types;

pub use crate::any::AnyValue;
pub use crate::decode::{decode, decode_at};
pub use crate::encode::{encode, encode_into, encoded_len};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::sequence::Sequence;
pub use crate::traits::Kind;
pub use crate::types::{Tag, Value};

/// Builds a [`Value::List`] from a comma-separated list of anything that
/// converts into a [`Value`].
///
/// ```
/// use tagpack::{Value, list};
///
/// let inner = list![1u64];
/// let value = list![&inner, "text", 2.5f64, list![]];
/// assert_eq!(value.as_list().unwrap().len(), 4);
/// assert_eq!(value.as_list().unwrap()[0], inner);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::Value::List(::std::vec::Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Value::List(::std::vec![$($crate::Value::from($item)),+])
    };
}
