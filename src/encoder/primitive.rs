//! Scalar and string items.

use bytes::BufMut;

use super::Encoder;
use crate::error::{EncodeError, Result};
use crate::float::Float;
use crate::header::{self, MajorType};

impl Encoder {
    /// Encodes a signed integer. Negative values are stored as `-1 - v`
    /// under the negative-integer major type.
    pub fn encode_int(&mut self, value: i64) -> Result<()> {
        if value >= 0 {
            self.write_header(MajorType::Int, value as u64)
        } else {
            // -1 - i64::MIN == i64::MAX, so this cannot overflow.
            self.write_header(MajorType::NegativeInt, (-1 - value) as u64)
        }
    }

    /// Encodes an unsigned integer over its full 64-bit range.
    pub fn encode_uint(&mut self, value: u64) -> Result<()> {
        self.write_header(MajorType::Int, value)
    }

    /// Encodes any integer in `-2^64 ..= 2^64 - 1`.
    pub fn encode_i128(&mut self, value: i128) -> Result<()> {
        let (major, magnitude) = if value >= 0 {
            (MajorType::Int, u64::try_from(value))
        } else {
            (MajorType::NegativeInt, u64::try_from(-1 - value))
        };
        let magnitude = magnitude.map_err(|_| EncodeError::IntegerOutOfRange(value))?;
        self.write_header(major, magnitude)
    }

    /// Encodes a float at its declared width (`Half`, `f32` or `f64`).
    pub fn encode_float<F: Float>(&mut self, value: F) -> Result<()> {
        self.reserve(1 + F::WIDTH)?;
        self.buf.put_u8(MajorType::Simple.tag() | F::ADDITIONAL_INFO);
        value.put_bits(&mut self.buf);
        Ok(())
    }

    pub fn encode_bool(&mut self, value: bool) -> Result<()> {
        let info = if value { header::TRUE } else { header::FALSE };
        self.write_header(MajorType::Simple, u64::from(info))
    }

    pub fn encode_null(&mut self) -> Result<()> {
        self.write_header(MajorType::Simple, u64::from(header::NULL))
    }

    pub fn encode_undefined(&mut self) -> Result<()> {
        self.write_header(MajorType::Simple, u64::from(header::UNDEFINED))
    }

    /// Encodes a simple value through the one-byte escape (`0xf8 v`).
    ///
    /// The escape is written for every `value`. RFC 8949 §3.3 treats `0xf8`
    /// followed by a value below 32 as not well-formed, so strict decoders
    /// reject those; use [`encode_bool`](Self::encode_bool),
    /// [`encode_null`](Self::encode_null) and friends for the low values.
    pub fn encode_simple(&mut self, value: u8) -> Result<()> {
        self.reserve(2)?;
        self.buf.put_u8(MajorType::Simple.tag() | header::SIMPLE_ESCAPE);
        self.buf.put_u8(value);
        Ok(())
    }

    /// Encodes a definite-length byte string.
    pub fn encode_byte_string(&mut self, value: &[u8]) -> Result<()> {
        self.put_string(MajorType::ByteString, value)
    }

    /// Encodes a definite-length text string (length = UTF-8 byte count).
    pub fn encode_text_string(&mut self, value: &str) -> Result<()> {
        self.put_string(MajorType::TextString, value.as_bytes())
    }

    /// Writes a tag header. The tagged item must be encoded by the next call.
    pub fn encode_tag(&mut self, tag: u64) -> Result<()> {
        self.write_header(MajorType::Tag, tag)
    }

    fn put_string(&mut self, major: MajorType, payload: &[u8]) -> Result<()> {
        let len = payload.len() as u64;
        self.reserve(header::header_len(len).saturating_add(payload.len()))?;
        self.put_header(major, len);
        self.buf.put_slice(payload);
        Ok(())
    }
}
