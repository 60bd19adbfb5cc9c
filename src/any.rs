use bytes::Bytes;

use crate::buf::BytesRef;
use crate::decode::read_payload;
use crate::{Error, ErrorKind, Kind, Result, Tag, Value, encode_into};

/// A type-erased handle holding exactly one value of any kind.
///
/// This is the element type of a [`Sequence`](crate::Sequence), and what a
/// decoder produces when it only learns the kind of a value from the tag it
/// reads off the wire. Typed access checks the tag and fails with
/// `TypeMismatch` rather than guessing.
///
/// Two wrappers are equal when their tags match and their values are equal.
/// The tag is read from the held value, so comparing values covers both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnyValue {
    value: Value,
}

impl AnyValue {
    pub fn new(value: impl Into<Value>) -> Self {
        AnyValue {
            value: value.into(),
        }
    }

    /// Creates a wrapper holding the zero value of the kind named by `tag`.
    /// Decoding starts from one of these once the tag is known.
    pub fn from_tag(tag: Tag) -> Self {
        AnyValue {
            value: Value::zero(tag),
        }
    }

    pub fn tag(&self) -> Tag {
        self.value.tag()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Returns a copy of the payload as `T`.
    pub fn get<T: Kind>(&self) -> Result<T> {
        self.expect(T::TAG)?;
        T::from_value(self.value.clone())
    }

    /// Consumes the wrapper and returns the payload as `T`.
    pub fn into_inner<T: Kind>(self) -> Result<T> {
        self.expect(T::TAG)?;
        T::from_value(self.value)
    }

    pub fn as_uint(&self) -> Result<u64> {
        match self.value {
            Value::UInt(n) => Ok(n),
            _ => Err(self.mismatch(Tag::UInt)),
        }
    }

    pub fn as_float(&self) -> Result<f64> {
        match self.value {
            Value::Float(n) => Ok(n),
            _ => Err(self.mismatch(Tag::Float)),
        }
    }

    pub fn as_bytes(&self) -> Result<&Bytes> {
        match &self.value {
            Value::Bytes(b) => Ok(b),
            _ => Err(self.mismatch(Tag::Bytes)),
        }
    }

    /// Borrows a `Bytes` payload as text.
    pub fn as_str(&self) -> Result<&str> {
        std::str::from_utf8(self.as_bytes()?).map_err(|_| Error::new(ErrorKind::InvalidUtf8))
    }

    pub fn as_list(&self) -> Result<&[Value]> {
        match &self.value {
            Value::List(items) => Ok(items),
            _ => Err(self.mismatch(Tag::List)),
        }
    }

    /// Serializes the held value, tag included.
    pub fn encode(&self) -> Vec<u8> {
        crate::encode(&self.value)
    }

    pub fn encode_into(&self, buffer: &mut Vec<u8>) {
        encode_into(buffer, &self.value);
    }

    /// Decodes the tagged value starting at `offset`, returning it together
    /// with the offset just past its last byte.
    ///
    /// The tag picks the kind of an empty wrapper, which is then filled from
    /// the payload that follows.
    pub fn decode_at(data: &Bytes, offset: usize) -> Result<(AnyValue, usize)> {
        let mut reader = BytesRef::at(data, offset)?;
        let mut item = AnyValue::from_tag(Tag::read(&mut reader)?);
        item.read_payload(&mut reader)?;
        Ok((item, reader.position()))
    }

    /// Replaces the held value with one decoded from `data`, keeping the
    /// current kind. The tag must already have been consumed.
    pub(crate) fn read_payload(&mut self, data: &mut BytesRef) -> Result<()> {
        self.value = read_payload(data, self.tag())?;
        Ok(())
    }

    fn expect(&self, tag: Tag) -> Result<()> {
        if self.tag() != tag {
            return Err(self.mismatch(tag));
        }
        Ok(())
    }

    fn mismatch(&self, expected: Tag) -> Error {
        Error::type_mismatch(expected, self.tag())
    }
}

impl From<AnyValue> for Value {
    fn from(any: AnyValue) -> Value {
        any.value
    }
}

impl From<&AnyValue> for AnyValue {
    fn from(any: &AnyValue) -> AnyValue {
        any.clone()
    }
}

macro_rules! impl_any_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AnyValue {
                fn from(v: $ty) -> Self {
                    AnyValue::new(v)
                }
            }
        )*
    };
}

impl_any_from!(
    Value,
    &Value,
    u64,
    f64,
    Bytes,
    Vec<u8>,
    &[u8],
    String,
    &str,
    Vec<Value>,
);

#[cfg(test)]
mod tests {
    use super::AnyValue;
    use crate::{Error, ErrorKind, Tag, Value, list};
    use bytes::Bytes;

    #[test]
    fn test_tag_follows_value() {
        assert_eq!(AnyValue::from(1u64).tag(), Tag::UInt);
        assert_eq!(AnyValue::from(1.0f64).tag(), Tag::Float);
        assert_eq!(AnyValue::from("s").tag(), Tag::Bytes);
        assert_eq!(AnyValue::from(list![]).tag(), Tag::List);
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(AnyValue::from_tag(Tag::UInt), AnyValue::from(0u64));
        assert_eq!(AnyValue::from_tag(Tag::Float), AnyValue::from(0.0f64));
        assert_eq!(AnyValue::from_tag(Tag::Bytes), AnyValue::from(""));
        assert_eq!(AnyValue::from_tag(Tag::List), AnyValue::from(Vec::<Value>::new()));
    }

    #[test]
    fn test_typed_access() {
        let any = AnyValue::from(100500u64);
        assert_eq!(any.get::<u64>(), Ok(100500));
        assert_eq!(any.as_uint(), Ok(100500));
        assert_eq!(
            any.get::<f64>(),
            Err(Error::type_mismatch(Tag::Float, Tag::UInt))
        );
        assert_eq!(
            any.as_list(),
            Err(Error::type_mismatch(Tag::List, Tag::UInt))
        );

        let any = AnyValue::from("qwerty");
        assert_eq!(any.as_str(), Ok("qwerty"));
        assert_eq!(any.get::<String>(), Ok("qwerty".to_string()));
        assert_eq!(any.as_bytes(), Ok(&Bytes::from_static(b"qwerty")));
        assert_eq!(
            any.as_float(),
            Err(Error::type_mismatch(Tag::Float, Tag::Bytes))
        );

        let any = AnyValue::from(vec![0xC3u8, 0x28]);
        assert_eq!(any.as_str(), Err(Error::new(ErrorKind::InvalidUtf8)));
        assert_eq!(any.get::<Vec<u8>>(), Ok(vec![0xC3, 0x28]));
    }

    #[test]
    fn test_into_inner() {
        let any = AnyValue::from(list![1u64, "a"]);
        assert_eq!(
            any.clone().into_inner::<Vec<Value>>(),
            Ok(vec![Value::UInt(1), Value::from("a")])
        );
        assert_eq!(
            any.into_inner::<Bytes>(),
            Err(Error::type_mismatch(Tag::Bytes, Tag::List))
        );
    }

    #[test]
    fn test_into_inner_checks_tag_first() {
        assert_eq!(
            AnyValue::from(vec![0xFFu8]).into_inner::<u64>(),
            Err(Error::type_mismatch(Tag::UInt, Tag::Bytes))
        );
        assert_eq!(
            AnyValue::from(1.5f64).into_inner::<String>(),
            Err(Error::type_mismatch(Tag::Bytes, Tag::Float))
        );
        assert_eq!(
            AnyValue::from(vec![0xFFu8]).into_inner::<String>(),
            Err(Error::new(ErrorKind::InvalidUtf8))
        );
    }

    #[test]
    fn test_decode_at() {
        let mut buffer = crate::encode(&list!["qwerty", 100500u64]);
        buffer.extend(crate::encode(&Value::Float(2.5)));
        let data = Bytes::from(buffer);

        let (first, offset) = AnyValue::decode_at(&data, 0).unwrap();
        assert_eq!(first, AnyValue::from(list!["qwerty", 100500u64]));
        assert_eq!(offset, 54);

        let (second, offset) = AnyValue::decode_at(&data, offset).unwrap();
        assert_eq!(second.as_float(), Ok(2.5));
        assert_eq!(offset, data.len());

        assert_eq!(
            AnyValue::decode_at(&data, offset),
            Err(Error::new(ErrorKind::TruncatedInput {
                needed: 8,
                available: 0
            }))
        );
        assert_eq!(
            AnyValue::decode_at(&Bytes::from_static(&[5, 0, 0, 0, 0, 0, 0, 0]), 0),
            Err(Error::new(ErrorKind::UnknownTag(5)))
        );
    }

    #[test]
    fn test_copies_are_deep() {
        let original = AnyValue::from(list![list!["inner"]]);
        let mut copy = AnyValue::from(&original);
        assert_eq!(copy, original);

        copy = AnyValue::from(list![list!["changed"]]);
        assert_ne!(copy, original);
        assert_eq!(original.as_list(), Ok(&[list!["inner"]][..]));
    }

    #[test]
    fn test_equality() {
        assert_eq!(AnyValue::from(3u64), AnyValue::new(Value::UInt(3)));
        assert_ne!(AnyValue::from(3u64), AnyValue::from(3.0f64));
        assert_ne!(AnyValue::from(""), AnyValue::from(list![]));
        assert_ne!(AnyValue::from(list![]), AnyValue::from(list![0u64]));
        assert_eq!(AnyValue::from(f64::NAN), AnyValue::from(f64::NAN));
        assert_ne!(AnyValue::from(0.0f64), AnyValue::from(-0.0f64));
    }

    #[test]
    fn test_encode_matches_value() {
        let value = list!["x", 1.25f64];
        assert_eq!(AnyValue::from(&value).encode(), crate::encode(&value));
    }
}
