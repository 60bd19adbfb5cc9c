use crate::Value;

/// Size of every fixed-width field on the wire: tags, counts, lengths and the
/// `UInt`/`Float` payloads.
pub(crate) const WORD: usize = 8;

/// Serialize a value, tag included, to a new buffer.
pub fn encode(value: &Value) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(encoded_len(value));
    encode_into(&mut buffer, value);
    buffer
}

/// Append the encoding of `value`, tag included, to `buffer`.
pub fn encode_into(buffer: &mut Vec<u8>, value: &Value) {
    write_u64(buffer, value.tag().into());
    match value {
        Value::UInt(n) => buffer.extend_from_slice(&n.to_le_bytes()),
        Value::Float(n) => buffer.extend_from_slice(&n.to_le_bytes()),
        Value::Bytes(b) => {
            write_u64(buffer, b.len() as u64);
            buffer.extend_from_slice(b);
        }
        Value::List(items) => write_items(buffer, items.iter()),
    }
}

/// Returns the exact number of bytes `encode` produces for `value`.
pub fn encoded_len(value: &Value) -> usize {
    WORD + match value {
        Value::UInt(_) | Value::Float(_) => WORD,
        Value::Bytes(b) => WORD + b.len(),
        Value::List(items) => items_len(items.iter()),
    }
}

/// Writes an element count followed by each item's tagged encoding. Lists and
/// whole packets share this framing.
pub(crate) fn write_items<'a>(
    buffer: &mut Vec<u8>,
    items: impl ExactSizeIterator<Item = &'a Value>,
) {
    write_u64(buffer, items.len() as u64);
    for item in items {
        encode_into(buffer, item);
    }
}

pub(crate) fn items_len<'a>(items: impl Iterator<Item = &'a Value>) -> usize {
    WORD + items.map(encoded_len).sum::<usize>()
}

fn write_u64(buffer: &mut Vec<u8>, n: u64) {
    buffer.extend_from_slice(&n.to_le_bytes());
}
