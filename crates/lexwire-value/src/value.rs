//! Structural representation of arbitrary JSON.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Number;

/// String-keyed object body. Keeps insertion order; equality is by membership.
pub type Mapping = IndexMap<String, AnyValue>;

/// Arbitrary JSON value.
///
/// Numbers keep the signed / unsigned / float distinction of
/// [`serde_json::Number`], so integers survive a round trip exactly.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnyValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    Sequence(Vec<AnyValue>),
    Mapping(Mapping),
}

/// JSON type of an [`AnyValue`], used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    Text,
    Sequence,
    Mapping,
}

impl ValueKind {
    /// JSON grammar name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::Text => "string",
            ValueKind::Sequence => "array",
            ValueKind::Mapping => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AnyValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            AnyValue::Null => ValueKind::Null,
            AnyValue::Bool(_) => ValueKind::Bool,
            AnyValue::Number(_) => ValueKind::Number,
            AnyValue::Text(_) => ValueKind::Text,
            AnyValue::Sequence(_) => ValueKind::Sequence,
            AnyValue::Mapping(_) => ValueKind::Mapping,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AnyValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            AnyValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Integer value, if the number is an integer that fits in `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    /// Integer value, if the number is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        self.as_number().and_then(Number::as_u64)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().and_then(Number::as_f64)
    }

    pub fn as_sequence(&self) -> Option<&[AnyValue]> {
        match self {
            AnyValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            AnyValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            AnyValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` when this value is a mapping.
    pub fn get(&self, key: &str) -> Option<&AnyValue> {
        self.as_mapping().and_then(|map| map.get(key))
    }
}

// ── Conversions ───────────────────────────────────────────────────────────

impl From<bool> for AnyValue {
    fn from(b: bool) -> Self {
        AnyValue::Bool(b)
    }
}

impl From<i64> for AnyValue {
    fn from(n: i64) -> Self {
        AnyValue::Number(n.into())
    }
}

impl From<u64> for AnyValue {
    fn from(n: u64) -> Self {
        AnyValue::Number(n.into())
    }
}

impl From<&str> for AnyValue {
    fn from(s: &str) -> Self {
        AnyValue::Text(s.to_owned())
    }
}

impl From<String> for AnyValue {
    fn from(s: String) -> Self {
        AnyValue::Text(s)
    }
}

impl From<Vec<AnyValue>> for AnyValue {
    fn from(items: Vec<AnyValue>) -> Self {
        AnyValue::Sequence(items)
    }
}

impl From<Mapping> for AnyValue {
    fn from(map: Mapping) -> Self {
        AnyValue::Mapping(map)
    }
}

impl From<serde_json::Value> for AnyValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => AnyValue::Null,
            serde_json::Value::Bool(b) => AnyValue::Bool(b),
            serde_json::Value::Number(n) => AnyValue::Number(n),
            serde_json::Value::String(s) => AnyValue::Text(s),
            serde_json::Value::Array(arr) => {
                AnyValue::Sequence(arr.into_iter().map(AnyValue::from).collect())
            }
            serde_json::Value::Object(obj) => AnyValue::Mapping(
                obj.into_iter()
                    .map(|(k, v)| (k, AnyValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<AnyValue> for serde_json::Value {
    fn from(v: AnyValue) -> Self {
        match v {
            AnyValue::Null => serde_json::Value::Null,
            AnyValue::Bool(b) => serde_json::Value::Bool(b),
            AnyValue::Number(n) => serde_json::Value::Number(n),
            AnyValue::Text(s) => serde_json::Value::String(s),
            AnyValue::Sequence(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            AnyValue::Mapping(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

impl FromIterator<(String, AnyValue)> for AnyValue {
    fn from_iter<I: IntoIterator<Item = (String, AnyValue)>>(iter: I) -> Self {
        AnyValue::Mapping(iter.into_iter().collect())
    }
}

// ── serde ─────────────────────────────────────────────────────────────────

impl Serialize for AnyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AnyValue::Null => serializer.serialize_unit(),
            AnyValue::Bool(b) => serializer.serialize_bool(*b),
            AnyValue::Number(n) => n.serialize(serializer),
            AnyValue::Text(s) => serializer.serialize_str(s),
            AnyValue::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            AnyValue::Mapping(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for AnyValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AnyValueVisitor)
    }
}

struct AnyValueVisitor;

impl<'de> Visitor<'de> for AnyValueVisitor {
    type Value = AnyValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<AnyValue, E> {
        Ok(AnyValue::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<AnyValue, E> {
        Ok(AnyValue::Number(v.into()))
    }

    fn visit_u64<E>(self, v: u64) -> Result<AnyValue, E> {
        Ok(AnyValue::Number(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<AnyValue, E> {
        Number::from_f64(v)
            .map(AnyValue::Number)
            .ok_or_else(|| E::custom("non-finite number"))
    }

    fn visit_str<E>(self, v: &str) -> Result<AnyValue, E> {
        Ok(AnyValue::Text(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> Result<AnyValue, E> {
        Ok(AnyValue::Text(v))
    }

    fn visit_unit<E>(self) -> Result<AnyValue, E> {
        Ok(AnyValue::Null)
    }

    fn visit_none<E>(self) -> Result<AnyValue, E> {
        Ok(AnyValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<AnyValue, D::Error> {
        AnyValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<AnyValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(AnyValue::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<AnyValue, A::Error> {
        let mut map = Mapping::with_capacity(access.size_hint().unwrap_or(0));
        // Duplicate keys: the later value replaces the earlier one, the key
        // keeps its first position.
        while let Some((key, value)) = access.next_entry::<String, AnyValue>()? {
            map.insert(key, value);
        }
        Ok(AnyValue::Mapping(map))
    }
}
