//! The encoder: a growable byte sink plus the header-writing protocol that
//! every item is built on.
//!
//! Primitive encoders live in [`primitive`], the container protocol in
//! [`container`]. All of them reserve the full span of the item they write
//! before appending, so a failed call never leaves a partial item behind.

mod container;
mod primitive;

use bytes::{BufMut, Bytes};

use crate::config::EncoderBuilder;
use crate::error::{EncodeError, Result};
use crate::header::{self, MajorType};

/// Appends encoded items to an owned buffer.
///
/// The encoder keeps no record of open containers: every indefinite-length
/// `begin_*` must be paired with a close by the caller, innermost first.
#[derive(Debug, Default)]
pub struct Encoder {
    buf: Vec<u8>,
    max_len: Option<usize>,
}

impl Encoder {
    /// Creates an empty encoder with no output limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a builder for configuring capacity and output limits.
    pub fn builder() -> EncoderBuilder {
        EncoderBuilder::new()
    }

    pub(crate) fn from_parts(buf: Vec<u8>, max_len: Option<usize>) -> Self {
        Self { buf, max_len }
    }

    /// Number of bytes encoded so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The configured output limit, if any.
    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// The bytes encoded so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Discards everything encoded so far, keeping the allocation.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Hands the encoded bytes to the caller and resets the encoder to empty.
    ///
    /// The output limit is kept, so the encoder can start a new session
    /// with the same configuration.
    pub fn take(&mut self) -> Bytes {
        let bytes = Bytes::from(std::mem::take(&mut self.buf));
        tracing::trace!(len = bytes.len(), "encoder output taken");
        bytes
    }

    /// Consumes the encoder, returning the encoded bytes.
    pub fn into_bytes(mut self) -> Bytes {
        self.take()
    }

    /// Appends a single raw byte.
    pub fn push_byte(&mut self, byte: u8) -> Result<()> {
        self.reserve(1)?;
        self.buf.put_u8(byte);
        Ok(())
    }

    /// Appends raw bytes verbatim, e.g. the chunks of an indefinite-length
    /// string opened with [`write_indefinite_header`](Self::write_indefinite_header).
    pub fn push_slice(&mut self, bytes: &[u8]) -> Result<()> {
        self.reserve(bytes.len())?;
        self.buf.put_slice(bytes);
        Ok(())
    }

    /// Writes the minimal header for an item of type `major` carrying
    /// `value` (a length, a count, or an integer magnitude).
    pub fn write_header(&mut self, major: MajorType, value: u64) -> Result<()> {
        self.reserve(header::header_len(value))?;
        self.put_header(major, value);
        Ok(())
    }

    /// Writes the indefinite-length header (additional info 31) for `major`.
    pub fn write_indefinite_header(&mut self, major: MajorType) -> Result<()> {
        self.push_byte(major.tag() | header::INDEFINITE)
    }

    /// Makes room for `additional` more bytes, honoring the output limit.
    pub(crate) fn reserve(&mut self, additional: usize) -> Result<()> {
        let required = self.buf.len().saturating_add(additional);
        if let Some(limit) = self.max_len
            && required > limit
        {
            tracing::debug!(limit, required, "encoder output limit exceeded");
            return Err(EncodeError::LimitExceeded { limit, required });
        }
        self.buf.try_reserve(additional).map_err(|e| {
            tracing::debug!(additional, error = %e, "encoder buffer growth failed");
            EncodeError::from(e)
        })
    }

    /// Writes a header into already-reserved space. The first width that
    /// holds `value` wins, which keeps the encoding canonical.
    pub(crate) fn put_header(&mut self, major: MajorType, value: u64) {
        let tag = major.tag();
        if value <= header::MAX_INLINE {
            self.buf.put_u8(tag | value as u8);
        } else if value <= u64::from(u8::MAX) {
            self.buf.put_u8(tag | header::ONE_BYTE);
            self.buf.put_u8(value as u8);
        } else if value <= u64::from(u16::MAX) {
            self.buf.put_u8(tag | header::TWO_BYTES);
            self.buf.put_u16(value as u16);
        } else if value <= u64::from(u32::MAX) {
            self.buf.put_u8(tag | header::FOUR_BYTES);
            self.buf.put_u32(value as u32);
        } else {
            self.buf.put_u8(tag | header::EIGHT_BYTES);
            self.buf.put_u64(value);
        }
    }

    /// Runs `f`, truncating the buffer back to its prior length if it fails.
    pub(crate) fn atomically<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let mark = self.buf.len();
        let result = f(self);
        if result.is_err() {
            self.buf.truncate(mark);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(major: MajorType, value: u64) -> Vec<u8> {
        let mut enc = Encoder::new();
        enc.write_header(major, value).unwrap();
        enc.take().to_vec()
    }

    #[test]
    fn inline_values() {
        for v in 0..=23u64 {
            assert_eq!(header(MajorType::Int, v), vec![v as u8]);
            assert_eq!(header(MajorType::Array, v), vec![0x80 | v as u8]);
        }
    }

    #[test]
    fn one_byte_values() {
        for v in 24..=255u64 {
            assert_eq!(header(MajorType::TextString, v), vec![0x78, v as u8]);
        }
    }

    #[test]
    fn two_byte_values() {
        assert_eq!(header(MajorType::Int, 256), vec![0x19, 0x01, 0x00]);
        assert_eq!(header(MajorType::Int, 0x1231), vec![0x19, 0x12, 0x31]);
        assert_eq!(header(MajorType::Map, 65535), vec![0xB9, 0xFF, 0xFF]);
    }

    #[test]
    fn four_byte_values() {
        assert_eq!(
            header(MajorType::ByteString, 65536),
            vec![0x5A, 0x00, 0x01, 0x00, 0x00]
        );
        assert_eq!(
            header(MajorType::Int, u64::from(u32::MAX)),
            vec![0x1A, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn eight_byte_values() {
        let v = u64::from(u32::MAX) + 1;
        let mut expected = vec![0x1B];
        expected.extend_from_slice(&v.to_be_bytes());
        assert_eq!(header(MajorType::Int, v), expected);

        let mut expected = vec![0xDB];
        expected.extend_from_slice(&u64::MAX.to_be_bytes());
        assert_eq!(header(MajorType::Tag, u64::MAX), expected);
    }

    #[test]
    fn header_matches_reported_len() {
        for v in [0, 23, 24, 255, 256, 65535, 65536, u64::MAX] {
            assert_eq!(header(MajorType::Int, v).len(), header::header_len(v));
        }
    }

    #[test]
    fn indefinite_header() {
        let mut enc = Encoder::new();
        enc.write_indefinite_header(MajorType::TextString).unwrap();
        enc.push_slice(b"ab").unwrap();
        enc.push_byte(header::BREAK).unwrap();
        assert_eq!(enc.as_bytes(), &[0x7F, b'a', b'b', 0xFF]);
    }

    #[test]
    fn take_resets_encoder() {
        let mut enc = Encoder::new();
        enc.write_header(MajorType::Int, 1000).unwrap();
        let first = enc.take();
        assert_eq!(&first[..], &[0x19, 0x03, 0xE8]);
        assert!(enc.is_empty());

        enc.write_header(MajorType::Int, 1000).unwrap();
        let mut fresh = Encoder::new();
        fresh.write_header(MajorType::Int, 1000).unwrap();
        assert_eq!(enc.take(), fresh.take());
    }

    #[test]
    fn limit_rejects_whole_header() {
        let mut enc = Encoder::builder().max_len(2).build().unwrap();
        enc.write_header(MajorType::Int, 1).unwrap();
        let err = enc.write_header(MajorType::Int, 1000).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::LimitExceeded { limit: 2, required: 4 }
        ));
        assert_eq!(enc.as_bytes(), &[0x01]);
    }

    #[test]
    fn limit_survives_take() {
        let mut enc = Encoder::builder().max_len(1).build().unwrap();
        enc.push_byte(0x00).unwrap();
        enc.take();
        assert_eq!(enc.max_len(), Some(1));
        enc.push_byte(0x00).unwrap();
        assert!(enc.push_byte(0x00).is_err());
    }

    #[test]
    fn clear_keeps_allocation_and_limit() {
        let mut enc = Encoder::builder()
            .initial_capacity(32)
            .max_len(32)
            .build()
            .unwrap();
        enc.write_header(MajorType::Int, 1000).unwrap();
        let capacity = enc.capacity();
        enc.clear();
        assert!(enc.is_empty());
        assert_eq!(enc.capacity(), capacity);
        assert_eq!(enc.max_len(), Some(32));
        enc.write_header(MajorType::Int, 5).unwrap();
        assert_eq!(enc.as_bytes(), &[0x05]);
    }

    #[test]
    fn into_bytes_returns_output() {
        let mut enc = Encoder::new();
        enc.write_header(MajorType::Array, 2).unwrap();
        enc.write_header(MajorType::Int, 24).unwrap();
        enc.write_header(MajorType::Int, 0).unwrap();
        assert_eq!(&enc.into_bytes()[..], &[0x82, 0x18, 0x18, 0x00]);
    }

    #[test]
    fn atomically_rolls_back() {
        let mut enc = Encoder::builder().max_len(3).build().unwrap();
        enc.push_byte(0x01).unwrap();
        let result = enc.atomically(|e| {
            e.push_byte(0x02)?;
            e.push_slice(&[0x03, 0x04])
        });
        assert!(result.is_err());
        assert_eq!(enc.as_bytes(), &[0x01]);
    }
}
