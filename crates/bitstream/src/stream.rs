use std::io;

use bytes::{Buf, BufMut, BytesMut};

use crate::bit::{BYTE_MAX_BIT, BYTE_MIN_BIT, Bit, read_bit, write_bit};
use crate::error::BitStreamError;

/// A growable sequence of bits.
///
/// Bits are appended at the tail with [`write_bit`](Self::write_bit) and
/// [`write_byte`](Self::write_byte), consumed from the head with
/// [`read_bit`](Self::read_bit) and [`read_byte`](Self::read_byte) (queue
/// order), or taken back from the tail with [`pop_bit`](Self::pop_bit) (stack
/// order). Within each byte the most significant bit comes first.
///
/// The stream is not synchronized; share it between threads behind a lock.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct BitStream {
    storage: BytesMut,
    /// Bits written into the last byte of `storage`, in `0..=8`.
    tail: u8,
    /// Bits consumed from the first byte of `storage`, in `0..=8`.
    head: u8,
}

impl BitStream {
    /// Creates an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a byte aligned stream holding the bits of `data`.
    pub fn from_bytes(data: impl AsRef<[u8]>) -> Self {
        let storage = BytesMut::from(data.as_ref());
        let tail = if storage.is_empty() {
            BYTE_MIN_BIT
        } else {
            BYTE_MAX_BIT
        };

        Self {
            storage,
            tail,
            head: BYTE_MIN_BIT,
        }
    }

    /// Returns the number of bytes in storage, including partially used
    /// bytes at either end.
    #[inline(always)]
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.storage.len()
    }

    /// Returns the number of bits queued in the stream.
    #[inline]
    #[must_use]
    pub fn bit_len(&self) -> usize {
        if self.storage.is_empty() {
            return 0;
        }

        ((self.storage.len() - 1) * BYTE_MAX_BIT as usize + self.tail as usize)
            .saturating_sub(self.head as usize)
    }

    /// Checks if no bits are queued in the stream.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bit_len() == 0
    }

    /// Appends a single bit at the tail.
    pub fn write_bit(&mut self, bit: Bit) {
        self.reserve_tail();

        // New bytes start zeroed, so a zero bit only moves the cursor.
        if let (Bit::One, Some(last)) = (bit, self.storage.last_mut()) {
            *last = write_bit(*last, bit, self.tail);
        }

        self.tail += 1;
    }

    /// Consumes a single bit from the head.
    pub fn read_bit(&mut self) -> Result<Bit, BitStreamError> {
        self.ensure_available(1)?;

        if self.head == BYTE_MAX_BIT {
            self.drop_head_byte();
        }

        let bit = read_bit(self.storage[0], self.head);
        self.head += 1;

        Ok(bit)
    }

    /// Appends the 8 bits of `byte` at the tail, most significant bit first.
    ///
    /// This is equivalent to eight calls to [`write_bit`](Self::write_bit).
    pub fn write_byte(&mut self, byte: u8) {
        self.reserve_tail();

        let tail = self.tail;
        if let Some(last) = self.storage.last_mut() {
            *last |= byte >> tail;
        }

        if tail == BYTE_MIN_BIT {
            self.tail = BYTE_MAX_BIT;
        } else {
            // The low `tail` bits spill into a fresh byte, which leaves the
            // tail cursor where it was.
            self.storage.put_u8(byte << (BYTE_MAX_BIT - tail));
            tracing::trace!(byte_len = self.storage.len(), "appended tail byte");
        }
    }

    /// Consumes 8 bits from the head and returns them as a byte.
    ///
    /// Fails without consuming anything if fewer than 8 bits are queued.
    pub fn read_byte(&mut self) -> Result<u8, BitStreamError> {
        self.ensure_available(BYTE_MAX_BIT as usize)?;

        if self.head == BYTE_MAX_BIT {
            self.drop_head_byte();
        }

        if self.head == BYTE_MIN_BIT {
            let byte = self.storage[0];
            self.storage.advance(1);
            tracing::trace!(byte_len = self.storage.len(), "dropped head byte");
            return Ok(byte);
        }

        // 8 bits span the rest of the first byte and the first `head` bits of
        // the second one. Dropping the first byte consumes 8 bits, so the head
        // cursor keeps its value.
        let head = self.head;
        let mut byte = self.storage[0] << head;
        self.storage.advance(1);
        tracing::trace!(byte_len = self.storage.len(), "dropped head byte");
        byte |= self.storage[0] >> (BYTE_MAX_BIT - head);

        Ok(byte)
    }

    /// Consumes a single bit from the tail, undoing the last
    /// [`write_bit`](Self::write_bit).
    pub fn pop_bit(&mut self) -> Result<Bit, BitStreamError> {
        self.ensure_available(1)?;

        if self.tail == BYTE_MIN_BIT {
            self.storage.truncate(self.storage.len() - 1);
            self.tail = BYTE_MAX_BIT;
            tracing::trace!(byte_len = self.storage.len(), "dropped tail byte");
        }

        self.tail -= 1;

        let mut bit = Bit::Zero;
        if let Some(last) = self.storage.last_mut() {
            bit = read_bit(*last, self.tail);
            // Keep everything past the tail cursor zeroed for `write_bit`.
            *last = write_bit(*last, Bit::Zero, self.tail);
        }

        Ok(bit)
    }

    fn ensure_available(&self, requested: usize) -> Result<(), BitStreamError> {
        let available = self.bit_len();
        if available < requested {
            return Err(BitStreamError::EndOfStream { requested, available });
        }

        Ok(())
    }

    /// Makes sure the last byte of storage has room for at least one more bit.
    fn reserve_tail(&mut self) {
        if self.storage.is_empty() {
            self.head = BYTE_MIN_BIT;
            self.tail = BYTE_MAX_BIT;
        }

        if self.tail == BYTE_MAX_BIT {
            self.storage.put_u8(0);
            self.tail = BYTE_MIN_BIT;
            tracing::trace!(byte_len = self.storage.len(), "appended tail byte");
        }
    }

    fn drop_head_byte(&mut self) {
        self.storage.advance(1);
        self.head = BYTE_MIN_BIT;
        tracing::trace!(
            byte_len = self.storage.len(),
            bit_len = self.bit_len(),
            "dropped head byte"
        );
    }
}

impl Extend<Bit> for BitStream {
    fn extend<I: IntoIterator<Item = Bit>>(&mut self, iter: I) {
        for bit in iter {
            self.write_bit(bit);
        }
    }
}

impl FromIterator<Bit> for BitStream {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        let mut stream = Self::new();
        stream.extend(iter);
        stream
    }
}

impl io::Write for BitStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for byte in buf {
            self.write_byte(*byte);
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Read for BitStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut read = 0;
        for byte in buf.iter_mut() {
            match self.read_byte() {
                Ok(value) => *byte = value,
                Err(BitStreamError::EndOfStream { .. }) => break,
            }
            read += 1;
        }

        Ok(read)
    }
}
