use super::error::PacketError;

pub struct PacketReader<'a> {
    bytes: &'a [u8],
}

impl<'a> PacketReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), PacketError> {
        if self.bytes.len() < needed {
            return Err(PacketError::OutOfRange {
                needed,
                actual: self.bytes.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, PacketError> {
        self.bytes
            .get(offset)
            .copied()
            .ok_or(PacketError::OutOfRange {
                needed: offset + 1,
                actual: self.bytes.len(),
            })
    }

    pub fn read_u32_be(&self, offset: usize) -> Result<u32, PacketError> {
        let bytes = self.read_slice(offset..offset + 4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], PacketError> {
        self.bytes
            .get(range.clone())
            .ok_or(PacketError::OutOfRange {
                needed: range.end,
                actual: self.bytes.len(),
            })
    }
}
