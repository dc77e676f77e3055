//! Item header layout: the major type in the high 3 bits of the first byte
//! and the additional information in the low 5 bits.

/// The eight structural kinds of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MajorType {
    Int = 0x00,
    NegativeInt = 0x20,
    ByteString = 0x40,
    TextString = 0x60,
    Array = 0x80,
    Map = 0xA0,
    Tag = 0xC0,
    Simple = 0xE0,
}

impl MajorType {
    /// High-bit tag OR-ed into the first byte of every item of this type.
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

// Additional information
// 0..=23: value stored inline in the first byte.
pub const MAX_INLINE: u64 = 23;
pub const ONE_BYTE: u8 = 24;
pub const TWO_BYTES: u8 = 25;
pub const FOUR_BYTES: u8 = 26;
pub const EIGHT_BYTES: u8 = 27;
pub const INDEFINITE: u8 = 31;

// Simple values (major type 7)
pub const FALSE: u8 = 20;
pub const TRUE: u8 = 21;
pub const NULL: u8 = 22;
pub const UNDEFINED: u8 = 23;
pub const SIMPLE_ESCAPE: u8 = ONE_BYTE;

// Float widths share the simple major type.
pub const FLOAT_16: u8 = TWO_BYTES;
pub const FLOAT_32: u8 = FOUR_BYTES;
pub const FLOAT_64: u8 = EIGHT_BYTES;

/// Terminates the innermost open indefinite-length item.
pub const BREAK: u8 = MajorType::Simple.tag() | INDEFINITE;

/// Number of bytes the minimal header for `value` occupies.
pub const fn header_len(value: u64) -> usize {
    if value <= MAX_INLINE {
        1
    } else if value <= u8::MAX as u64 {
        2
    } else if value <= u16::MAX as u64 {
        3
    } else if value <= u32::MAX as u64 {
        5
    } else {
        9
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn major_type_tags() {
        let tags: Vec<u8> = [
            MajorType::Int,
            MajorType::NegativeInt,
            MajorType::ByteString,
            MajorType::TextString,
            MajorType::Array,
            MajorType::Map,
            MajorType::Tag,
            MajorType::Simple,
        ]
        .iter()
        .map(|m| m.tag())
        .collect();
        assert_eq!(tags, vec![0x00, 0x20, 0x40, 0x60, 0x80, 0xA0, 0xC0, 0xE0]);
    }

    #[test]
    fn break_byte() {
        assert_eq!(BREAK, 0xFF);
    }

    #[test]
    fn header_len_boundaries() {
        assert_eq!(header_len(0), 1);
        assert_eq!(header_len(23), 1);
        assert_eq!(header_len(24), 2);
        assert_eq!(header_len(255), 2);
        assert_eq!(header_len(256), 3);
        assert_eq!(header_len(65535), 3);
        assert_eq!(header_len(65536), 5);
        assert_eq!(header_len(u64::from(u32::MAX)), 5);
        assert_eq!(header_len(u64::from(u32::MAX) + 1), 9);
        assert_eq!(header_len(u64::MAX), 9);
    }
}
