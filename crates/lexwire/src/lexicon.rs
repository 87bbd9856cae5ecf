//! The [`Lexicon`] trait: explicit decode/encode between a Rust type and
//! its [`AnyValue`] wire shape.

use lexwire_value::{AnyValue, Mapping};

use crate::CodecError;

/// A type with a lexicon wire representation.
///
/// Decoding is strict about JSON types and reports failures as
/// [`CodecError`]; encoding is infallible.
pub trait Lexicon: Sized {
    fn decode_value(value: &AnyValue) -> Result<Self, CodecError>;
    fn encode_value(&self) -> AnyValue;
}

pub(crate) fn mismatch(expected: &'static str, found: &AnyValue) -> CodecError {
    CodecError::TypeMismatch {
        expected,
        found: found.kind().as_str(),
    }
}

impl Lexicon for AnyValue {
    fn decode_value(value: &AnyValue) -> Result<Self, CodecError> {
        Ok(value.clone())
    }

    fn encode_value(&self) -> AnyValue {
        self.clone()
    }
}

impl Lexicon for Mapping {
    fn decode_value(value: &AnyValue) -> Result<Self, CodecError> {
        value
            .as_mapping()
            .cloned()
            .ok_or_else(|| mismatch("object", value))
    }

    fn encode_value(&self) -> AnyValue {
        AnyValue::Mapping(self.clone())
    }
}

impl Lexicon for String {
    fn decode_value(value: &AnyValue) -> Result<Self, CodecError> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| mismatch("string", value))
    }

    fn encode_value(&self) -> AnyValue {
        AnyValue::Text(self.clone())
    }
}

impl Lexicon for bool {
    fn decode_value(value: &AnyValue) -> Result<Self, CodecError> {
        value.as_bool().ok_or_else(|| mismatch("boolean", value))
    }

    fn encode_value(&self) -> AnyValue {
        AnyValue::Bool(*self)
    }
}

impl Lexicon for i64 {
    fn decode_value(value: &AnyValue) -> Result<Self, CodecError> {
        value.as_i64().ok_or_else(|| mismatch("integer", value))
    }

    fn encode_value(&self) -> AnyValue {
        AnyValue::from(*self)
    }
}

impl Lexicon for u64 {
    fn decode_value(value: &AnyValue) -> Result<Self, CodecError> {
        value
            .as_u64()
            .ok_or_else(|| mismatch("non-negative integer", value))
    }

    fn encode_value(&self) -> AnyValue {
        AnyValue::from(*self)
    }
}

impl Lexicon for f64 {
    fn decode_value(value: &AnyValue) -> Result<Self, CodecError> {
        value.as_f64().ok_or_else(|| mismatch("number", value))
    }

    fn encode_value(&self) -> AnyValue {
        // Non-finite floats have no JSON form.
        lexwire_value::Number::from_f64(*self)
            .map(AnyValue::Number)
            .unwrap_or(AnyValue::Null)
    }
}

impl<T: Lexicon> Lexicon for Vec<T> {
    fn decode_value(value: &AnyValue) -> Result<Self, CodecError> {
        let items = value
            .as_sequence()
            .ok_or_else(|| mismatch("array", value))?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| T::decode_value(item).map_err(|e| e.at_index(i)))
            .collect()
    }

    fn encode_value(&self) -> AnyValue {
        AnyValue::Sequence(self.iter().map(Lexicon::encode_value).collect())
    }
}

/// `null` decodes to `None`; `None` encodes to `null`. Record fields use
/// [`Fields::optional`](crate::record::Fields::optional) instead, which also
/// treats an absent key as `None` and omits `None` on encode.
impl<T: Lexicon> Lexicon for Option<T> {
    fn decode_value(value: &AnyValue) -> Result<Self, CodecError> {
        match value {
            AnyValue::Null => Ok(None),
            other => T::decode_value(other).map(Some),
        }
    }

    fn encode_value(&self) -> AnyValue {
        match self {
            Some(inner) => inner.encode_value(),
            None => AnyValue::Null,
        }
    }
}
