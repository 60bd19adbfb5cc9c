use bytes::Bytes;

use crate::buf::BytesRef;
use crate::decode::read_counted;
use crate::encode::{items_len, write_items};
use crate::{AnyValue, Error, ErrorKind, Result, Tag};

/// An ordered packet of values of any kind: the top-level unit of
/// serialization.
///
/// On the wire a sequence is an item count followed by each item's tagged
/// encoding, which is exactly the payload of a `List` without the leading
/// tag.
///
/// # Examples
///
/// ```
/// use tagpack::{Sequence, list};
///
/// let mut packet = Sequence::new();
/// packet.push(list!["qwerty", 100500u64]);
///
/// let bytes = packet.serialize();
/// let items = Sequence::deserialize(bytes.clone().into()).unwrap();
/// assert_eq!(items, packet.items());
/// assert_eq!(items.into_iter().collect::<Sequence>().serialize(), bytes);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence {
    items: Vec<AnyValue>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value of any kind, or an existing [`AnyValue`].
    pub fn push(&mut self, value: impl Into<AnyValue>) {
        self.items.push(value.into());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AnyValue> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnyValue> {
        self.items.iter()
    }

    pub fn items(&self) -> &[AnyValue] {
        &self.items
    }

    pub fn into_items(self) -> Vec<AnyValue> {
        self.items
    }

    /// Serializes the sequence: the item count, then every item in insertion
    /// order.
    pub fn serialize(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.serialized_len());
        write_items(&mut buffer, self.items.iter().map(AnyValue::value));
        buffer
    }

    /// Returns the exact number of bytes `serialize` produces.
    pub fn serialized_len(&self) -> usize {
        items_len(self.items.iter().map(AnyValue::value))
    }

    /// Decodes a serialized sequence that must span all of `data`.
    pub fn deserialize(data: Bytes) -> Result<Vec<AnyValue>> {
        let (items, consumed) = Self::deserialize_prefix(&data)?;

        if consumed != data.len() {
            return Err(Error::new(ErrorKind::ExtraData {
                bytes_remaining: data.len() - consumed,
            }));
        }

        Ok(items)
    }

    /// Decodes a serialized sequence from the start of `data`, returning the
    /// items and the number of bytes they occupied. Anything after that is
    /// ignored.
    pub fn deserialize_prefix(data: &Bytes) -> Result<(Vec<AnyValue>, usize)> {
        let mut reader = BytesRef::new(data);
        let items = read_counted(&mut reader, |reader| {
            let mut item = AnyValue::from_tag(Tag::read(reader)?);
            item.read_payload(reader)?;
            Ok(item)
        })?;
        Ok((items, reader.position()))
    }
}

impl From<Vec<AnyValue>> for Sequence {
    fn from(items: Vec<AnyValue>) -> Self {
        Sequence { items }
    }
}

impl<T: Into<AnyValue>> FromIterator<T> for Sequence {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: Into<AnyValue>> Extend<T> for Sequence {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Sequence {
    type Item = AnyValue;
    type IntoIter = std::vec::IntoIter<AnyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a AnyValue;
    type IntoIter = std::slice::Iter<'a, AnyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
