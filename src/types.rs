use std::fmt;
use std::hash::{Hash, Hasher};

use bytes::Bytes;

use crate::buf::BytesRef;
use crate::{Error, ErrorKind, Kind, Result};

/// Tags identifying each value kind in the tagpack binary format.
///
/// On the wire a tag is a little-endian `u64` written before every value,
/// including each element of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum Tag {
    UInt = 0,
    Float = 1,
    Bytes = 2,
    List = 3,
}

impl Tag {
    pub fn from_u64(raw: u64) -> Option<Self> {
        match raw {
            0 => Some(Tag::UInt),
            1 => Some(Tag::Float),
            2 => Some(Tag::Bytes),
            3 => Some(Tag::List),
            _ => None,
        }
    }

    pub(crate) fn read(data: &mut BytesRef) -> Result<Tag> {
        Tag::try_from(data.read_u64()?)
    }

    /// Lowercase name of the kind, as used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Tag::UInt => "uint",
            Tag::Float => "float",
            Tag::Bytes => "bytes",
            Tag::List => "list",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Tag> for u64 {
    fn from(tag: Tag) -> u64 {
        tag as u64
    }
}

impl TryFrom<u64> for Tag {
    type Error = Error;

    fn try_from(raw: u64) -> Result<Self> {
        Tag::from_u64(raw).ok_or_else(|| Error::new(ErrorKind::UnknownTag(raw)))
    }
}

/// A tagpack value: one of the four kinds the format can carry.
///
/// Equality is structural. Floats compare by bit pattern, so `NaN` equals a
/// `NaN` with the same bits while `0.0` and `-0.0` are different values. This
/// keeps `==` in step with byte equality of the encoded form.
#[derive(Debug, Clone)]
pub enum Value {
    /// Unsigned 64-bit integer.
    UInt(u64),

    /// 64-bit IEEE-754 floating point.
    Float(f64),

    /// Raw bytes, text or otherwise.
    Bytes(Bytes),

    /// Ordered, possibly heterogeneous, list of values.
    List(Vec<Value>),
}

impl Value {
    pub fn tag(&self) -> Tag {
        match self {
            Value::UInt(_) => Tag::UInt,
            Value::Float(_) => Tag::Float,
            Value::Bytes(_) => Tag::Bytes,
            Value::List(_) => Tag::List,
        }
    }

    /// The zero or empty value of the kind named by `tag`.
    pub fn zero(tag: Tag) -> Value {
        match tag {
            Tag::UInt => Value::UInt(0),
            Tag::Float => Value::Float(0.0),
            Tag::Bytes => Value::Bytes(Bytes::new()),
            Tag::List => Value::List(Vec::new()),
        }
    }

    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Value::UInt(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag().hash(state);
        match self {
            Value::UInt(n) => n.hash(state),
            Value::Float(n) => n.to_bits().hash(state),
            Value::Bytes(b) => b.hash(state),
            Value::List(items) => items.hash(state),
        }
    }
}

macro_rules! impl_value_from {
    ($ty:ty, |$v:ident| $conv:expr) => {
        impl From<$ty> for Value {
            fn from($v: $ty) -> Self {
                $conv
            }
        }
    };
}

impl_value_from!(u64, |n| Value::UInt(n));
impl_value_from!(f64, |n| Value::Float(n));
impl_value_from!(Bytes, |b| Value::Bytes(b));
impl_value_from!(Vec<u8>, |b| Value::Bytes(Bytes::from(b)));
impl_value_from!(&[u8], |b| Value::Bytes(Bytes::copy_from_slice(b)));
impl_value_from!(String, |s| Value::Bytes(Bytes::from(s)));
impl_value_from!(&str, |s| Value::Bytes(Bytes::copy_from_slice(s.as_bytes())));
impl_value_from!(Vec<Value>, |items| Value::List(items));
impl_value_from!(&Value, |v| v.clone());

macro_rules! impl_kind {
    ($ty:ty, $tag:expr, |$v:ident| $into:expr, $variant:pat => $from:expr) => {
        impl Kind for $ty {
            const TAG: Tag = $tag;

            fn into_value(self) -> Value {
                let $v = self;
                $into
            }

            fn from_value(value: Value) -> Result<Self> {
                match value {
                    $variant => Ok($from),
                    other => Err(Error::type_mismatch(Self::TAG, other.tag())),
                }
            }
        }
    };
}

impl_kind!(u64, Tag::UInt, |n| Value::UInt(n), Value::UInt(n) => n);
impl_kind!(f64, Tag::Float, |n| Value::Float(n), Value::Float(n) => n);
impl_kind!(Bytes, Tag::Bytes, |b| Value::Bytes(b), Value::Bytes(b) => b);
impl_kind!(Vec<u8>, Tag::Bytes, |b| Value::Bytes(Bytes::from(b)), Value::Bytes(b) => b.to_vec());
impl_kind!(Vec<Value>, Tag::List, |items| Value::List(items), Value::List(items) => items);

impl Kind for String {
    const TAG: Tag = Tag::Bytes;

    fn into_value(self) -> Value {
        Value::Bytes(Bytes::from(self))
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(b) => String::from_utf8(b.to_vec())
                .map_err(|_| Error::new(ErrorKind::InvalidUtf8)),
            other => Err(Error::type_mismatch(Self::TAG, other.tag())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Tag, Value};
    use crate::{Error, ErrorKind};
    use bytes::Bytes;

    #[test]
    fn test_tag_from_u64() {
        assert_eq!(Tag::from_u64(0), Some(Tag::UInt));
        assert_eq!(Tag::from_u64(1), Some(Tag::Float));
        assert_eq!(Tag::from_u64(2), Some(Tag::Bytes));
        assert_eq!(Tag::from_u64(3), Some(Tag::List));
        assert_eq!(Tag::from_u64(4), None);
        assert_eq!(Tag::from_u64(u64::MAX), None);
        assert_eq!(
            Tag::try_from(7u64),
            Err(Error::new(ErrorKind::UnknownTag(7)))
        );
        assert_eq!(u64::from(Tag::List), 3);
    }

    #[test]
    fn test_zero() {
        for tag in [Tag::UInt, Tag::Float, Tag::Bytes, Tag::List] {
            assert_eq!(Value::zero(tag).tag(), tag);
        }
        assert_eq!(Value::zero(Tag::Bytes), Value::Bytes(Bytes::new()));
        assert_eq!(Value::zero(Tag::List), Value::List(vec![]));
    }

    #[test]
    fn test_no_numeric_coercion() {
        assert_ne!(Value::UInt(1), Value::Float(1.0));
        assert_ne!(Value::UInt(0), Value::Float(0.0));
    }

    #[test]
    fn test_float_bit_equality() {
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert_ne!(Value::Float(0.0), Value::Float(-0.0));
        assert_ne!(Value::Float(0.1 + 0.2), Value::Float(0.3));
    }

    #[test]
    fn test_structural_equality() {
        let a = Value::List(vec![Value::from("qwerty"), Value::UInt(100500)]);
        let b = Value::List(vec![
            Value::Bytes(Bytes::from_static(b"qwerty")),
            Value::from(100500u64),
        ]);
        assert_eq!(a, b);

        let reordered = Value::List(vec![Value::UInt(100500), Value::from("qwerty")]);
        assert_ne!(a, reordered);
        assert_ne!(a, Value::List(vec![Value::from("qwerty")]));
        assert_ne!(Value::List(vec![]), Value::Bytes(Bytes::new()));
    }

    #[test]
    fn test_hash_matches_eq() {
        let mut set = HashSet::new();
        set.insert(Value::Float(f64::NAN));
        set.insert(Value::Float(f64::NAN));
        set.insert(Value::UInt(1));
        set.insert(Value::List(vec![Value::UInt(1)]));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_accessors() {
        let v = Value::from(vec![1u8, 2, 3]);
        assert_eq!(v.as_bytes().map(|b| &b[..]), Some(&[1u8, 2, 3][..]));
        assert_eq!(v.as_uint(), None);
        assert_eq!(Value::Float(2.5).as_float(), Some(2.5));
        assert_eq!(
            Value::List(vec![Value::UInt(9)]).as_list(),
            Some(&[Value::UInt(9)][..])
        );
    }
}
