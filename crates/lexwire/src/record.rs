//! Record (object) codec helpers.
//!
//! A lexicon record is a plain struct that reads its fields through
//! [`Fields`] and writes them through [`FieldWriter`]. Field-level failures
//! are wrapped with the field name so a nested error reports where it came
//! from.
//!
//! ```
//! use lexwire::record::{FieldWriter, Fields};
//! use lexwire::{impl_lexicon_for_record, CodecError, Record};
//!
//! #[derive(Debug, PartialEq)]
//! struct StrongRef {
//!     uri: String,
//!     cid: String,
//! }
//!
//! impl Record for StrongRef {
//!     fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
//!         Ok(Self {
//!             uri: fields.required("uri")?,
//!             cid: fields.required("cid")?,
//!         })
//!     }
//!
//!     fn encode_fields(&self, out: &mut FieldWriter) {
//!         out.field("uri", &self.uri).field("cid", &self.cid);
//!     }
//! }
//!
//! impl_lexicon_for_record!(StrongRef);
//! ```

use std::cell::RefCell;
use std::collections::HashSet;

use lexwire_value::{AnyValue, Mapping};

use crate::lexicon::mismatch;
use crate::{CodecError, Lexicon};

/// An object-shaped lexicon type.
pub trait Record: Sized {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError>;
    fn encode_fields(&self, out: &mut FieldWriter);
}

/// Read access to an object body during decode.
///
/// Every key a record reads is remembered, so the keys it left alone can be
/// recovered with [`unconsumed`](Self::unconsumed). An explicit `null` seen
/// through [`optional`](Self::optional) counts as left alone: the record has
/// no way to write it back.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    map: &'a Mapping,
    consumed: RefCell<HashSet<&'a str>>,
}

impl<'a> Fields<'a> {
    pub fn new(map: &'a Mapping) -> Self {
        Self {
            map,
            consumed: RefCell::new(HashSet::new()),
        }
    }

    /// Fails with `TypeMismatch` unless `value` is an object.
    pub fn from_value(value: &'a AnyValue) -> Result<Self, CodecError> {
        value
            .as_mapping()
            .map(Self::new)
            .ok_or_else(|| mismatch("object", value))
    }

    fn take(&self, field: &str) -> Option<&'a AnyValue> {
        let (key, value) = self.map.get_key_value(field)?;
        self.consumed.borrow_mut().insert(key.as_str());
        Some(value)
    }

    /// Field that must be present (an explicit `null` is handed to `T`).
    pub fn required<T: Lexicon>(&self, field: &'static str) -> Result<T, CodecError> {
        let value = self.take(field).ok_or(CodecError::MissingField { field })?;
        T::decode_value(value).map_err(|e| e.in_field(field))
    }

    /// Field that may be absent or `null`; both decode to `None`.
    pub fn optional<T: Lexicon>(&self, field: &'static str) -> Result<Option<T>, CodecError> {
        match self.map.get(field) {
            None | Some(AnyValue::Null) => Ok(None),
            Some(_) => self.required(field).map(Some),
        }
    }

    /// Like [`optional`](Self::optional), falling back to `T::default()`.
    pub fn or_default<T: Lexicon + Default>(&self, field: &'static str) -> Result<T, CodecError> {
        Ok(self.optional(field)?.unwrap_or_default())
    }

    /// Raw value of `field`; the key counts as read.
    pub fn get(&self, field: &str) -> Option<&'a AnyValue> {
        self.take(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.map.contains_key(field)
    }

    /// The whole object body, including keys no record field consumes.
    pub fn mapping(&self) -> &'a Mapping {
        self.map
    }

    /// Keys not read so far, in input order.
    pub fn unconsumed(&self) -> Mapping {
        let consumed = self.consumed.borrow();
        self.map
            .iter()
            .filter(|(key, _)| !consumed.contains(key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

/// Write access to an object body during encode. Keys keep call order.
#[derive(Debug, Clone, Default)]
pub struct FieldWriter {
    map: Mapping,
}

impl FieldWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field<T: Lexicon>(&mut self, name: &str, value: &T) -> &mut Self {
        self.map.insert(name.to_owned(), value.encode_value());
        self
    }

    /// Writes `value` when present; `None` leaves the key out entirely.
    pub fn optional<T: Lexicon>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if let Some(inner) = value {
            self.field(name, inner);
        }
        self
    }

    pub fn raw(&mut self, name: &str, value: AnyValue) -> &mut Self {
        self.map.insert(name.to_owned(), value);
        self
    }

    pub fn into_mapping(self) -> Mapping {
        self.map
    }
}

/// Decodes any [`Record`] from an object value.
pub fn decode_record<R: Record>(value: &AnyValue) -> Result<R, CodecError> {
    R::decode_fields(&Fields::from_value(value)?)
}

/// Encodes any [`Record`] as an object value.
pub fn encode_record<R: Record>(record: &R) -> AnyValue {
    let mut out = FieldWriter::new();
    record.encode_fields(&mut out);
    AnyValue::Mapping(out.into_mapping())
}

/// Implements [`Lexicon`] for one or more [`Record`] types.
#[macro_export]
macro_rules! impl_lexicon_for_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Lexicon for $ty {
                fn decode_value(
                    value: &$crate::AnyValue,
                ) -> ::core::result::Result<Self, $crate::CodecError> {
                    $crate::record::decode_record(value)
                }

                fn encode_value(&self) -> $crate::AnyValue {
                    $crate::record::encode_record(self)
                }
            }
        )+
    };
}
