use crate::{Error, Result};

pub const LOW_5_BITS: u8 = 0b0001_1111;
pub const HIGH_3_BITS: u8 = 0b1110_0000;

pub fn to_be16(value: u16) -> [u8; 2] {
    [(value >> 8) as u8, (value & 0xFF) as u8]
}

pub fn from_be16(
    bytes: &[u8],
    offset: usize,
) -> Result<u16> {
    match offset.checked_add(2).and_then(|end| bytes.get(offset..end)) {
        Some(&[high, low]) => Ok(((high as u16) << 8) | low as u16),
        _ => Err(Error::truncated(
            offset,
            2,
            bytes.len().saturating_sub(offset),
        )),
    }
}

pub fn bit_is_set(
    byte: u8,
    bit: u8,
) -> bool {
    bit < 8 && byte & (1 << bit) != 0
}

pub fn set_bit(
    byte: u8,
    bit: u8,
) -> u8 {
    if bit < 8 {
        byte | (1 << bit)
    } else {
        byte
    }
}

pub fn concat(slices: &[&[u8]]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(slices.iter().map(|slice| slice.len()).sum());
    for slice in slices {
        buffer.extend_from_slice(slice);
    }
    buffer
}

/// Converts a list length into the byte that announces it on the wire.
pub(crate) fn count_byte(
    field: &'static str,
    count: usize,
) -> Result<u8> {
    u8::try_from(count).map_err(|_| Error::invalid(field, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_be16() {
        assert_eq!(to_be16(0x0102), [0x01, 0x02]);
        assert_eq!(from_be16(&[0xAA, 0x01, 0x02], 1), Ok(0x0102));
        assert_eq!(
            from_be16(&[0xAA, 0x01], 1),
            Err(Error::TruncatedFrame {
                offset: 1,
                needed: 2,
                available: 1,
            })
        );
        assert_eq!(
            from_be16(&[0xAA], 4),
            Err(Error::TruncatedFrame {
                offset: 4,
                needed: 2,
                available: 0,
            })
        );
    }

    #[test]
    fn test_bits() {
        assert!(bit_is_set(0b1000_0001, 0));
        assert!(bit_is_set(0b1000_0001, 7));
        assert!(!bit_is_set(0b1000_0001, 3));
        assert!(!bit_is_set(0xFF, 8));
        assert_eq!(set_bit(0x00, 7), 0x80);
        assert_eq!(set_bit(0x01, 1), 0x03);
        assert_eq!(set_bit(0x01, 9), 0x01);
    }

    #[test]
    fn test_concat() {
        assert_eq!(concat(&[&[0x01], &[], &[0x02, 0x03]]), vec![0x01, 0x02, 0x03]);
    }
}
