//! Schema-less JSON value model for lexwire.
//!
//! [`AnyValue`] holds data whose shape the client does not know ahead of time:
//! unknown union variants, open `unknown`-typed lexicon fields, and anything
//! the typed record layer wants to pass through untouched.
//!
//! Decoding goes through `serde_json`; encoding is done by [`JsonEncoder`],
//! which writes mapping keys in the order they are stored (or sorted, for the
//! stable variant) so output is deterministic.

mod equal;
mod value;

pub mod json;

pub use equal::deep_equal;
pub use json::{decode, decode_str, encode, encode_pretty, encode_stable, JsonEncoder, ValueError};
pub use value::{AnyValue, Mapping, ValueKind};

/// JSON number representation used by [`AnyValue::Number`].
pub use serde_json::Number;
