use crate::{Error, ErrorKind, Result};

/// A read cursor over a shared `Bytes` buffer.
///
/// Reads split off the front of the remaining data, so everything returned is
/// a view into the original allocation and can be promoted back to a `Bytes`
/// without copying.
pub struct BytesRef<'a> {
    b: &'a bytes::Bytes,
    data: &'a [u8],
}

impl<'a> BytesRef<'a> {
    pub fn new(b: &'a bytes::Bytes) -> Self {
        BytesRef { b, data: b }
    }

    /// Creates a cursor positioned `offset` bytes into `b`.
    ///
    /// Skipping to the offset is itself a read, so an offset past the end
    /// fails with `needed` set to the offset and `available` set to the
    /// buffer length.
    pub fn at(b: &'a bytes::Bytes, offset: usize) -> Result<Self> {
        let mut reader = BytesRef::new(b);
        reader.read(offset)?;
        Ok(reader)
    }

    pub fn read(&mut self, amt: usize) -> Result<Self> {
        if amt > self.len() {
            return Err(Error::new(ErrorKind::TruncatedInput {
                needed: amt as u64,
                available: self.len(),
            }));
        }
        let (result, data) = self.data.split_at(amt);
        self.data = data;
        Ok(BytesRef {
            b: self.b,
            data: result,
        })
    }

    /// Reads a length-prefixed run of `amt` bytes, where `amt` came off the
    /// wire and may not fit in memory at all.
    pub fn read_len(&mut self, amt: u64) -> Result<Self> {
        match usize::try_from(amt) {
            Ok(amt) => self.read(amt),
            Err(_) => Err(Error::new(ErrorKind::TruncatedInput {
                needed: amt,
                available: self.len(),
            })),
        }
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        let bytes: [u8; 8] = self.read(8)?.as_ref().try_into().unwrap();
        Ok(u64::from_le_bytes(bytes))
    }

    /// Number of bytes consumed from the start of the underlying buffer.
    pub fn position(&self) -> usize {
        self.data.as_ptr() as usize - self.b.as_ptr() as usize
    }

    /// Returns the remaining data as a zero-copy `Bytes` slice.
    pub fn to_bytes(&self) -> bytes::Bytes {
        self.b.slice_ref(self.data)
    }
}

impl std::ops::Deref for BytesRef<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.data
    }
}
