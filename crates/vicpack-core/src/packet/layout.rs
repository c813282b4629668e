pub const PACKET_ID_OFFSET: usize = 2;
pub const REQUEST_ID_OFFSET: usize = 3;
pub const MEASUREMENT_COUNT_OFFSET: usize = 4;

/// Bytes from start-of-packet to the first measurement record.
pub const HEADER_LEN: usize = 5;
/// One measurement record: 1 type byte + 4 big-endian value bytes.
pub const STRIDE: usize = 5;
