//! Byte-level entry points.
//!
//! The transport layer hands in raw response bytes and a target type and
//! gets back a typed value; request bodies go the other way. Calls are
//! synchronous, stateless, and safe to run concurrently.

use lexwire_value::{AnyValue, JsonEncoder};

use crate::config::{CodecConfig, OutputStyle};
use crate::{CodecError, Lexicon};

/// Codec bound to an output configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexCodec {
    config: CodecConfig,
}

impl LexCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn decode<T: Lexicon>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        let value = lexwire_value::decode(bytes)?;
        T::decode_value(&value)
    }

    pub fn decode_value<T: Lexicon>(&self, value: &AnyValue) -> Result<T, CodecError> {
        T::decode_value(value)
    }

    pub fn encode<T: Lexicon>(&self, value: &T) -> Vec<u8> {
        self.encoder().encode(&value.encode_value())
    }

    pub fn encode_value<T: Lexicon>(&self, value: &T) -> AnyValue {
        value.encode_value()
    }

    fn encoder(&self) -> JsonEncoder {
        match self.config.output {
            OutputStyle::Compact => JsonEncoder::new(),
            OutputStyle::Pretty => JsonEncoder::pretty(),
            OutputStyle::Stable => JsonEncoder::stable(),
        }
    }
}

/// Decodes `bytes` as `T`.
pub fn decode<T: Lexicon>(bytes: &[u8]) -> Result<T, CodecError> {
    LexCodec::default().decode(bytes)
}

/// Decodes `text` as `T`.
pub fn decode_str<T: Lexicon>(text: &str) -> Result<T, CodecError> {
    LexCodec::default().decode(text.as_bytes())
}

/// Encodes `value` as compact JSON.
pub fn encode<T: Lexicon>(value: &T) -> Vec<u8> {
    LexCodec::default().encode(value)
}
