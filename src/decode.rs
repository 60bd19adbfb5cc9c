use bytes::Bytes;

use crate::buf::BytesRef;
use crate::encode::WORD;
use crate::{Error, ErrorKind, Result, Tag, Value};

/// The smallest possible encoded item: a tag plus one word of payload.
const MIN_ITEM_LEN: usize = 2 * WORD;

/// Decode a single tagged value that must span all of `data`.
pub fn decode(data: Bytes) -> Result<Value> {
    let mut reader = BytesRef::new(&data);
    let value = read_item(&mut reader)?;

    if !reader.is_empty() {
        return Err(Error::new(ErrorKind::ExtraData {
            bytes_remaining: reader.len(),
        }));
    }

    Ok(value)
}

/// Decode the tagged value starting at `offset`, returning it together with
/// the offset just past its last byte.
///
/// Trailing data after the value is left alone, so this can walk a buffer of
/// back-to-back items.
pub fn decode_at(data: &Bytes, offset: usize) -> Result<(Value, usize)> {
    let mut reader = BytesRef::at(data, offset)?;
    let value = read_item(&mut reader)?;
    Ok((value, reader.position()))
}

pub(crate) fn read_item(data: &mut BytesRef) -> Result<Value> {
    let tag = Tag::read(data)?;
    read_payload(data, tag)
}

/// Reads the payload of a value whose tag has already been consumed.
pub(crate) fn read_payload(data: &mut BytesRef, tag: Tag) -> Result<Value> {
    match tag {
        Tag::UInt => Ok(Value::UInt(data.read_u64()?)),
        Tag::Float => Ok(Value::Float(f64::from_bits(data.read_u64()?))),
        Tag::Bytes => {
            let len = data.read_u64()?;
            Ok(Value::Bytes(data.read_len(len)?.to_bytes()))
        }
        Tag::List => Ok(Value::List(read_counted(data, read_item)?)),
    }
}

/// Reads an element count, then that many items using `read`.
///
/// The count is a number of items, not bytes: each item has to be decoded to
/// find where the next one starts.
pub(crate) fn read_counted<'a, T>(
    data: &mut BytesRef<'a>,
    mut read: impl FnMut(&mut BytesRef<'a>) -> Result<T>,
) -> Result<Vec<T>> {
    let count = data.read_u64()?;

    // A forged count must not turn into a huge allocation before any item is
    // read, so only reserve what the remaining input could actually hold.
    let fits = (data.len() / MIN_ITEM_LEN) as u64;
    let mut items = Vec::with_capacity(count.min(fits) as usize);

    for _ in 0..count {
        items.push(read(data)?);
    }

    Ok(items)
}
