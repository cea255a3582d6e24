use std::fmt;
use std::ops::Not;

/// The lowest valid bit offset within a byte.
pub const BYTE_MIN_BIT: u8 = 0;

/// The number of bits in a byte, one past the highest valid bit offset.
pub const BYTE_MAX_BIT: u8 = 8;

/// A single binary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Bit {
    /// The bit value 0
    #[default]
    Zero,
    /// The bit value 1
    One,
}

impl From<bool> for Bit {
    #[inline(always)]
    fn from(value: bool) -> Self {
        if value { Self::One } else { Self::Zero }
    }
}

impl From<Bit> for bool {
    #[inline(always)]
    fn from(bit: Bit) -> Self {
        bit == Bit::One
    }
}

impl From<Bit> for u8 {
    #[inline(always)]
    fn from(bit: Bit) -> Self {
        bit as u8
    }
}

impl Not for Bit {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Returns the bit of `byte` at `offset`, where offset 0 is the most
/// significant bit.
///
/// Offsets outside `0..8` yield [`Bit::Zero`].
#[inline]
#[must_use]
pub const fn read_bit(byte: u8, offset: u8) -> Bit {
    if offset >= BYTE_MAX_BIT {
        return Bit::Zero;
    }

    if (byte >> (BYTE_MAX_BIT - 1 - offset)) & 1 == 1 {
        Bit::One
    } else {
        Bit::Zero
    }
}

/// Returns `byte` with the bit at `offset` set to `bit`, where offset 0 is the
/// most significant bit.
///
/// Offsets outside `0..8` leave the byte unchanged.
#[inline]
#[must_use]
pub const fn write_bit(byte: u8, bit: Bit, offset: u8) -> u8 {
    if offset >= BYTE_MAX_BIT {
        return byte;
    }

    let mask = 1 << (BYTE_MAX_BIT - 1 - offset);
    match bit {
        Bit::One => byte | mask,
        Bit::Zero => byte & !mask,
    }
}

/// Returns `byte` with its bit order reversed, `0b11001100` becomes
/// `0b00110011`.
#[inline(always)]
#[must_use]
pub const fn reverse_byte(byte: u8) -> u8 {
    byte.reverse_bits()
}
