use crate::bit::{BYTE_MAX_BIT, BYTE_MIN_BIT, Bit, read_bit};

/// Expands a byte into its 8 bits, most significant bit first.
#[must_use]
pub fn byte_to_bits(byte: u8) -> [Bit; BYTE_MAX_BIT as usize] {
    let mut bits = [Bit::Zero; BYTE_MAX_BIT as usize];
    for offset in BYTE_MIN_BIT..BYTE_MAX_BIT {
        bits[offset as usize] = read_bit(byte, offset);
    }
    bits
}

/// Expands a sequence of bytes into their bits, in order and most significant
/// bit first. An empty input yields an empty vector.
#[must_use]
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<Bit> {
    bytes.iter().copied().flat_map(byte_to_bits).collect()
}

#[cfg(test)]
#[cfg_attr(all(test, coverage_nightly), coverage(off))]
mod tests {
    use super::*;
    use crate::bit::Bit::{One, Zero};

    #[test]
    fn test_byte_to_bits() {
        let cases = [
            (0b10101010, [One, Zero, One, Zero, One, Zero, One, Zero]),
            (0b00000000, [Zero; 8]),
            (0b11111111, [One; 8]),
        ];

        for (byte, expected) in cases {
            assert_eq!(byte_to_bits(byte), expected, "{byte:#010b}");
        }
    }

    #[test]
    fn test_byte_to_bits_snapshot() {
        insta::assert_debug_snapshot!(byte_to_bits(0b10100001), @r"
        [
            One,
            Zero,
            One,
            Zero,
            Zero,
            Zero,
            Zero,
            One,
        ]
        ");
    }

    #[test]
    fn test_bytes_to_bits() {
        assert_eq!(
            bytes_to_bits(&[0b10101010, 0b00000000, 0b11111111]),
            vec![
                One, Zero, One, Zero, One, Zero, One, Zero, //
                Zero, Zero, Zero, Zero, Zero, Zero, Zero, Zero, //
                One, One, One, One, One, One, One, One,
            ]
        );

        assert_eq!(
            bytes_to_bits(&[0b10101010]),
            vec![One, Zero, One, Zero, One, Zero, One, Zero]
        );
    }

    #[test]
    fn test_bytes_to_bits_empty() {
        assert!(bytes_to_bits(&[]).is_empty());
    }
}
