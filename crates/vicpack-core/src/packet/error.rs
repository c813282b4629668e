use thiserror::Error;

#[derive(Debug, Error)]
pub enum PacketError {
    /// Odd-length or non-hex input; no partial packet is produced.
    #[error("malformed input: {detail}")]
    MalformedInput { detail: String },
    /// The declared layout points past the end of the byte sequence.
    #[error("offset out of range: need {needed} bytes, got {actual}")]
    OutOfRange { needed: usize, actual: usize },
}
