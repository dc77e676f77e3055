//! Aggregates: fixed-field records encoded as arrays or as maps.

use super::Encode;
use crate::encoder::Encoder;
use crate::error::Result;

/// Receives a record's fields one at a time, in declaration order.
pub trait FieldVisitor {
    fn field<T: Encode + ?Sized>(&mut self, name: &'static str, value: &T) -> Result<()>;
}

/// A record with an ordered, named field list.
///
/// `visit_fields` must visit exactly the fields in [`FIELDS`](Self::FIELDS),
/// in that order. [`impl_record!`](crate::impl_record) generates both from a
/// single list.
pub trait Record {
    const FIELDS: &'static [&'static str];

    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V) -> Result<()>;
}

struct ArrayFields<'a> {
    enc: &'a mut Encoder,
    visited: usize,
}

impl FieldVisitor for ArrayFields<'_> {
    fn field<T: Encode + ?Sized>(&mut self, _name: &'static str, value: &T) -> Result<()> {
        self.visited += 1;
        value.encode(self.enc)
    }
}

struct MapFields<'a, F> {
    enc: &'a mut Encoder,
    mapper: F,
    visited: usize,
}

impl<F> FieldVisitor for MapFields<'_, F>
where
    F: FnMut(&mut Encoder, &'static str) -> Result<()>,
{
    fn field<T: Encode + ?Sized>(&mut self, name: &'static str, value: &T) -> Result<()> {
        self.visited += 1;
        (self.mapper)(self.enc, name)?;
        value.encode(self.enc)
    }
}

impl Encoder {
    /// Encodes a record as an array of its field values.
    pub fn encode_struct<R: Record + ?Sized>(&mut self, record: &R) -> Result<()> {
        self.atomically(|enc| {
            enc.begin_array(Some(R::FIELDS.len() as u64))?;
            let mut fields = ArrayFields { enc, visited: 0 };
            record.visit_fields(&mut fields)?;
            debug_assert_eq!(fields.visited, R::FIELDS.len(), "record visited wrong field count");
            Ok(())
        })
    }

    /// Encodes a record as a map keyed by field name (text strings).
    pub fn encode_struct_as_map<R: Record + ?Sized>(&mut self, record: &R) -> Result<()> {
        self.encode_struct_as_map_with(record, |enc, name| enc.encode_text_string(name))
    }

    /// Encodes a record as a map whose keys are written by `mapper`.
    ///
    /// The mapper is called with each field name and must write exactly one
    /// item, the key for that field.
    pub fn encode_struct_as_map_with<R, F>(&mut self, record: &R, mapper: F) -> Result<()>
    where
        R: Record + ?Sized,
        F: FnMut(&mut Encoder, &'static str) -> Result<()>,
    {
        self.atomically(|enc| {
            enc.begin_map(Some(R::FIELDS.len() as u64))?;
            let mut fields = MapFields {
                enc,
                mapper,
                visited: 0,
            };
            record.visit_fields(&mut fields)?;
            debug_assert_eq!(fields.visited, R::FIELDS.len(), "record visited wrong field count");
            Ok(())
        })
    }
}

/// Implements [`Record`] and [`Encode`] for a struct from its field list.
///
/// Fields are listed in the order they should be encoded; each field type
/// must implement [`Encode`]. Nested records encode as nested arrays.
///
/// ```
/// struct Reading { x: u16, y: f32, z: bool }
/// cbor_emit::impl_record!(Reading { x, y, z });
///
/// let mut enc = cbor_emit::Encoder::new();
/// enc.encode_struct(&Reading { x: 1, y: 2.0, z: false }).unwrap();
/// assert_eq!(&enc.take()[..], &[0x83, 0x01, 0xfa, 0x40, 0x00, 0x00, 0x00, 0xf4]);
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Record for $ty {
            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];

            #[allow(unused_variables)]
            fn visit_fields<V: $crate::FieldVisitor>(&self, visitor: &mut V) -> $crate::Result<()> {
                $(visitor.field(stringify!($field), &self.$field)?;)*
                Ok(())
            }
        }

        impl $crate::Encode for $ty {
            fn encode(&self, enc: &mut $crate::Encoder) -> $crate::Result<()> {
                enc.encode_struct(self)
            }
        }
    };
}
