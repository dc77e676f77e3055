//! cbor-emit — a write-only encoder for RFC 8949 CBOR data items.
//!
//! Values are appended to an [`Encoder`] one item at a time and the
//! finished byte sequence is handed out with [`Encoder::take`]. Every header
//! uses the smallest width that holds its value.
//!
//! # Architecture
//!
//! - **`header`** — Major types and additional-information constants
//! - **`encoder`** — The byte sink, header writer, primitives and containers
//! - **`float`** — Fixed-width float payloads (`Half`, `f32`, `f64`)
//! - **`dispatch`** — The `Encode` trait and `Record` aggregates
//! - **`value`** — A dynamic `Value` for runtime-shaped data
//! - **`config`** — `EncoderBuilder` for capacity and output limits
//!
//! ```
//! use cbor_emit::Encoder;
//!
//! let mut enc = Encoder::new();
//! enc.begin_array(None).unwrap();
//! enc.encode_int(-12).unwrap();
//! enc.encode_text_string("hi").unwrap();
//! enc.close_array().unwrap();
//! assert_eq!(&enc.take()[..], &[0x9f, 0x2b, 0x62, b'h', b'i', 0xff]);
//! ```

pub mod config;
pub mod dispatch;
pub mod encoder;
pub mod error;
pub mod float;
pub mod header;
pub mod value;

pub use config::EncoderBuilder;
pub use dispatch::{Encode, FieldVisitor, Record};
pub use encoder::Encoder;
pub use error::{EncodeError, Result};
pub use float::{Float, Half};
pub use header::MajorType;
pub use value::Value;
