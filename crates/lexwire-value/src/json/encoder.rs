//! Deterministic JSON output for [`AnyValue`](crate::AnyValue).
//!
//! Three output styles, all written by `serde_json`:
//! - compact: no whitespace, mapping keys in stored order;
//! - pretty: two-space indentation, mapping keys in stored order;
//! - stable: compact with mapping keys sorted lexicographically at every depth.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::AnyValue;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonEncoder {
    pretty: bool,
    sort_keys: bool,
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self {
            pretty: true,
            sort_keys: false,
        }
    }

    pub fn stable() -> Self {
        Self {
            pretty: false,
            sort_keys: true,
        }
    }

    pub fn encode(&self, value: &AnyValue) -> Vec<u8> {
        let out = match (self.pretty, self.sort_keys) {
            (false, false) => serde_json::to_vec(value),
            (true, false) => serde_json::to_vec_pretty(value),
            (false, true) => serde_json::to_vec(&SortedKeys(value)),
            (true, true) => serde_json::to_vec_pretty(&SortedKeys(value)),
        };
        // Keys are strings and numbers are finite, so serialization cannot fail.
        out.unwrap_or_default()
    }

    pub fn encode_to_string(&self, value: &AnyValue) -> String {
        String::from_utf8(self.encode(value)).unwrap_or_default()
    }
}

/// Serializes the wrapped value with mapping keys in sorted order.
struct SortedKeys<'a>(&'a AnyValue);

impl Serialize for SortedKeys<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            AnyValue::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&SortedKeys(item))?;
                }
                seq.end()
            }
            AnyValue::Mapping(map) => {
                let mut entries: Vec<_> = map.iter().collect();
                entries.sort_by(|(a, _), (b, _)| a.cmp(b));
                let mut out = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    out.serialize_entry(key, &SortedKeys(value))?;
                }
                out.end()
            }
            scalar => scalar.serialize(serializer),
        }
    }
}

/// Compact encoding, keys in stored order.
pub fn encode(value: &AnyValue) -> Vec<u8> {
    JsonEncoder::new().encode(value)
}

/// Indented encoding, keys in stored order.
pub fn encode_pretty(value: &AnyValue) -> Vec<u8> {
    JsonEncoder::pretty().encode(value)
}

/// Compact encoding with sorted keys.
pub fn encode_stable(value: &AnyValue) -> Vec<u8> {
    JsonEncoder::stable().encode(value)
}
