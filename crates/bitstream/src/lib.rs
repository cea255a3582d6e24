//! Bit level helpers and a growable bit buffer.
//!
//! [`read_bit`], [`write_bit`] and [`reverse_byte`] work on a single byte,
//! addressing bits by offset where offset 0 is the most significant bit.
//! [`byte_to_bits`] and [`bytes_to_bits`] expand bytes into [`Bit`]s.
//!
//! [`BitStream`] is a buffer of bits that can be used as a queue (write at the
//! tail, read from the head) or as a stack (write and pop at the tail).
//!
//! ```rust
//! # fn test() -> Result<(), bitstream::BitStreamError> {
//! use bitstream::{Bit, BitStream};
//!
//! let mut stream = BitStream::new();
//! stream.write_bit(Bit::One);
//! stream.write_byte(0b1100_0011);
//! stream.write_bit(Bit::Zero);
//! assert_eq!(stream.bit_len(), 10);
//!
//! assert_eq!(stream.pop_bit()?, Bit::Zero);
//! assert_eq!(stream.read_bit()?, Bit::One);
//! assert_eq!(stream.read_byte()?, 0b1100_0011);
//!
//! assert!(stream.read_bit().is_err());
//! # Ok(())
//! # }
//! # test().expect("failed to run test");
//! ```
//!
//! ## License
//!
//! This project is licensed under the [MIT](./LICENSE.MIT) or [Apache-2.0](./LICENSE.Apache-2.0) license.
//! You can choose between one of them if you use this work.
//!
//! `SPDX-License-Identifier: MIT OR Apache-2.0`
#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(unsafe_code)]

mod bit;
mod conv;
mod error;
mod stream;
#[cfg(test)]
mod test_utils;

pub use bit::{BYTE_MAX_BIT, BYTE_MIN_BIT, Bit, read_bit, reverse_byte, write_bit};
pub use conv::{byte_to_bits, bytes_to_bits};
pub use error::BitStreamError;
pub use stream::BitStream;
