//! Structural JSON decoding into [`AnyValue`].
//!
//! Rejects invalid UTF-8, unbalanced structure, empty input, and trailing
//! non-whitespace data. Duplicate object keys resolve last-write-wins.

use super::error::ValueError;
use crate::AnyValue;

/// Decodes one JSON document.
pub fn decode(bytes: &[u8]) -> Result<AnyValue, ValueError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Decodes one JSON document from text.
pub fn decode_str(text: &str) -> Result<AnyValue, ValueError> {
    Ok(serde_json::from_str(text)?)
}
