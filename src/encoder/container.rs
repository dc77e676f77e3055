//! Array and map framing.
//!
//! A definite container states its item count up front and needs no close;
//! exactly that many items (or key/value pairs, for maps) must follow. An
//! indefinite container runs until a break byte.

use super::Encoder;
use crate::error::Result;
use crate::header::{self, MajorType};

impl Encoder {
    /// Opens an array of `len` elements, or an indefinite array if `None`.
    pub fn begin_array(&mut self, len: Option<u64>) -> Result<()> {
        self.begin(MajorType::Array, len)
    }

    /// Opens a map of `len` key/value pairs, or an indefinite map if `None`.
    pub fn begin_map(&mut self, len: Option<u64>) -> Result<()> {
        self.begin(MajorType::Map, len)
    }

    /// Writes a break, closing the innermost open indefinite container.
    ///
    /// The break byte does not record what it closes, so this closes maps
    /// as well as arrays.
    pub fn close_array(&mut self) -> Result<()> {
        self.push_byte(header::BREAK)
    }

    /// Same operation as [`close_array`](Self::close_array).
    pub fn close_map(&mut self) -> Result<()> {
        self.close_array()
    }

    fn begin(&mut self, major: MajorType, len: Option<u64>) -> Result<()> {
        match len {
            Some(n) => self.write_header(major, n),
            None => self.write_indefinite_header(major),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Encoder;

    #[test]
    fn indefinite_array() {
        let mut enc = Encoder::new();
        enc.begin_array(None).unwrap();
        enc.encode_int(1).unwrap();
        enc.encode_text_string("a").unwrap();
        enc.close_array().unwrap();
        assert_eq!(&enc.take()[..], &[0x9F, 0x01, 0x61, b'a', 0xFF]);
    }

    #[test]
    fn definite_headers() {
        let mut enc = Encoder::new();
        enc.begin_array(Some(0)).unwrap();
        enc.begin_array(Some(25)).unwrap();
        enc.begin_map(Some(2)).unwrap();
        assert_eq!(enc.as_bytes(), &[0x80, 0x98, 0x19, 0xA2]);
    }

    #[test]
    fn close_is_untyped() {
        let mut enc = Encoder::new();
        enc.begin_map(None).unwrap();
        enc.encode_text_string("k").unwrap();
        enc.begin_array(None).unwrap();
        enc.encode_bool(true).unwrap();
        enc.close_array().unwrap();
        enc.close_array().unwrap();
        assert_eq!(
            enc.as_bytes(),
            &[0xBF, 0x61, b'k', 0x9F, 0xF5, 0xFF, 0xFF]
        );

        let mut other = Encoder::new();
        other.begin_map(None).unwrap();
        other.close_map().unwrap();
        assert_eq!(other.as_bytes(), &[0xBF, 0xFF]);
    }

    #[test]
    fn nested_definite() {
        // [1, [2, 3]]
        let mut enc = Encoder::new();
        enc.begin_array(Some(2)).unwrap();
        enc.encode_int(1).unwrap();
        enc.begin_array(Some(2)).unwrap();
        enc.encode_int(2).unwrap();
        enc.encode_int(3).unwrap();
        assert_eq!(enc.as_bytes(), &[0x82, 0x01, 0x82, 0x02, 0x03]);
    }
}
