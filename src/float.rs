//! Fixed-width floating-point payloads.
//!
//! A float is written at exactly its declared width; there is no narrowing
//! to a shorter representation.

use bytes::BufMut;

use crate::header;

/// Raw bits of an IEEE 754 binary16 value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Half(pub u16);

impl Half {
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> u16 {
        self.0
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Half {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point types the encoder can write.
pub trait Float: sealed::Sealed + Copy {
    /// Additional information selecting this width.
    const ADDITIONAL_INFO: u8;
    /// Payload size in bytes.
    const WIDTH: usize;

    /// Writes the raw bits big-endian.
    fn put_bits<B: BufMut>(self, buf: &mut B);
}

impl Float for Half {
    const ADDITIONAL_INFO: u8 = header::FLOAT_16;
    const WIDTH: usize = 2;

    fn put_bits<B: BufMut>(self, buf: &mut B) {
        buf.put_u16(self.0);
    }
}

impl Float for f32 {
    const ADDITIONAL_INFO: u8 = header::FLOAT_32;
    const WIDTH: usize = 4;

    fn put_bits<B: BufMut>(self, buf: &mut B) {
        buf.put_u32(self.to_bits());
    }
}

impl Float for f64 {
    const ADDITIONAL_INFO: u8 = header::FLOAT_64;
    const WIDTH: usize = 8;

    fn put_bits<B: BufMut>(self, buf: &mut B) {
        buf.put_u64(self.to_bits());
    }
}
