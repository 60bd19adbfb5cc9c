//! tagpack_ascii provides a human-readable ASCII format for tagpack binary
//! data, and the round-trip check used to validate captured packets.
//!
//! This crate is primarily used through its binaries: `tagpack2ascii` for
//! pretty-printing a packet, and `tagpack_roundtrip` for checking that a
//! packet re-encodes to the exact bytes it was decoded from.

mod format;

pub use crate::format::{sequence_to_ascii, to_ascii};

use tagpack::Sequence;

/// Parses a binary tagpack packet and formats it as ASCII.
pub fn tagpack2ascii(data: &[u8]) -> Result<String, tagpack::Error> {
    let bytes = bytes::Bytes::from(data.to_vec());
    let packet = Sequence::from(Sequence::deserialize(bytes)?);
    log::debug!("decoded {} items from {} bytes", packet.len(), data.len());
    Ok(sequence_to_ascii(&packet))
}

/// Decodes a packet, pushes every item into a fresh sequence and reports
/// whether serializing that sequence reproduces `data` exactly.
///
/// Trailing bytes after the last item are not an error here; they simply
/// make the comparison fail.
pub fn roundtrip(data: &[u8]) -> Result<bool, tagpack::Error> {
    let bytes = bytes::Bytes::from(data.to_vec());
    let (items, consumed) = Sequence::deserialize_prefix(&bytes)?;
    if consumed != data.len() {
        log::warn!("{} trailing bytes after packet", data.len() - consumed);
    }

    let mut packet = Sequence::new();
    for item in items {
        packet.push(item);
    }

    let reencoded = packet.serialize();
    log::debug!(
        "re-encoded {} items into {} bytes (input {} bytes)",
        packet.len(),
        reencoded.len(),
        data.len()
    );
    Ok(reencoded == data)
}
