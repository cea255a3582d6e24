use std::io;

/// Errors that can occur when consuming bits from a
/// [`BitStream`](crate::BitStream).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BitStreamError {
    /// Fewer bits are queued than the operation needs.
    #[error("end of stream: requested {requested} bits, {available} available")]
    EndOfStream {
        /// The number of bits the operation needed.
        requested: usize,
        /// The number of bits queued in the stream.
        available: usize,
    },
}

impl From<BitStreamError> for io::Error {
    fn from(err: BitStreamError) -> Self {
        match err {
            BitStreamError::EndOfStream { .. } => {
                io::Error::new(io::ErrorKind::UnexpectedEof, err)
            }
        }
    }
}
