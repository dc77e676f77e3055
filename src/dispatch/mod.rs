//! Type-driven dispatch: the [`Encode`] trait routes a value to the right
//! primitive or aggregate encoder.
//!
//! The set of encodable kinds is closed by the trait bound. Passing a type
//! without an `Encode` impl is a compile error rather than a runtime failure.

mod record;

use bytes::Bytes;

pub use record::{FieldVisitor, Record};

use crate::encoder::Encoder;
use crate::error::Result;
use crate::float::Half;

/// A value that knows how to write itself as one item.
pub trait Encode {
    fn encode(&self, enc: &mut Encoder) -> Result<()>;
}

impl Encoder {
    /// Encodes any [`Encode`] value. On failure nothing is left behind.
    pub fn encode_generic<T: Encode + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.atomically(|enc| value.encode(enc))
    }
}

macro_rules! encode_signed {
    ($($ty:ty),+) => {$(
        impl Encode for $ty {
            fn encode(&self, enc: &mut Encoder) -> Result<()> {
                enc.encode_int(i64::from(*self))
            }
        }
    )+};
}

macro_rules! encode_unsigned {
    ($($ty:ty),+) => {$(
        impl Encode for $ty {
            fn encode(&self, enc: &mut Encoder) -> Result<()> {
                enc.encode_uint(u64::from(*self))
            }
        }
    )+};
}

macro_rules! encode_float {
    ($($ty:ty),+) => {$(
        impl Encode for $ty {
            fn encode(&self, enc: &mut Encoder) -> Result<()> {
                enc.encode_float(*self)
            }
        }
    )+};
}

encode_signed!(i8, i16, i32, i64);
encode_unsigned!(u8, u16, u32, u64);
encode_float!(Half, f32, f64);

impl Encode for isize {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.encode_int(*self as i64)
    }
}

impl Encode for usize {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.encode_uint(*self as u64)
    }
}

impl Encode for i128 {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.encode_i128(*self)
    }
}

impl Encode for bool {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.encode_bool(*self)
    }
}

/// The explicit "no value" kind writes nothing.
impl Encode for () {
    fn encode(&self, _enc: &mut Encoder) -> Result<()> {
        Ok(())
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        match self {
            Some(value) => value.encode(enc),
            None => enc.encode_null(),
        }
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        (**self).encode(enc)
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        (**self).encode(enc)
    }
}

impl Encode for str {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.encode_text_string(self)
    }
}

impl Encode for String {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.encode_text_string(self)
    }
}

/// `Bytes` is the byte-string kind; `Vec<u8>` stays an array of integers.
impl Encode for Bytes {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.encode_byte_string(self)
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        enc.begin_array(Some(self.len() as u64))?;
        for item in self {
            item.encode(enc)?;
        }
        Ok(())
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        self.as_slice().encode(enc)
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        self.as_slice().encode(enc)
    }
}

/// Implements [`Encode`] for fieldless enums by writing the discriminant as
/// an integer. The enum must be `Copy`.
///
/// Discriminants of any repr up to 64 bits encode exactly, including
/// `#[repr(u64)]` values above `i64::MAX`. Wider discriminants outside the
/// encodable range fail with [`EncodeError::IntegerOutOfRange`](crate::EncodeError::IntegerOutOfRange);
/// a `#[repr(u128)]` discriminant of `2^127` or more reads as negative and is
/// not supported.
///
/// ```
/// #[derive(Clone, Copy)]
/// enum Level { Low = 1, High = 7 }
/// cbor_emit::impl_ordinal!(Level);
///
/// let mut enc = cbor_emit::Encoder::new();
/// enc.encode_generic(&Level::High).unwrap();
/// assert_eq!(&enc.take()[..], &[0x07]);
/// ```
#[macro_export]
macro_rules! impl_ordinal {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::Encode for $ty {
            fn encode(&self, enc: &mut $crate::Encoder) -> $crate::Result<()> {
                enc.encode_i128(*self as i128)
            }
        }
    )+};
}
