//! Open tagged-union codec for lexicon records.
//!
//! Lexicon payloads carry a `$type` discriminator whose set of values is
//! controlled by the server and grows over time. This crate decodes such
//! payloads into a closed set of known Rust variants, and keeps anything it
//! does not recognize as a raw field map so it can be re-encoded unchanged.
//!
//! Building blocks:
//! - [`Lexicon`]: explicit decode/encode between a type and [`AnyValue`];
//! - [`Record`] with [`Fields`](record::Fields) / [`FieldWriter`](record::FieldWriter)
//!   for object-shaped types;
//! - [`TaggedUnion`] + [`lex_union!`] for open unions;
//! - [`TemporalValue`] for canonical timestamps;
//! - [`BoundedSequence`] for arrays with a declared maximum length.
//!
//! Decoding failures are reported as [`CodecError`]. Unknown union tags are
//! never an error.

mod error;
mod lexicon;

pub mod bounded;
pub mod codec;
pub mod config;
pub mod constants;
pub mod record;
pub mod temporal;
pub mod union;

pub use bounded::{truncated_encode, BoundedSequence};
pub use codec::{decode, decode_str, encode, LexCodec};
pub use config::{CodecConfig, OutputStyle};
pub use error::{CodecError, RegistryError};
pub use lexicon::Lexicon;
pub use record::Record;
pub use temporal::TemporalValue;
pub use union::{TaggedUnion, UnionSchema, UnknownVariant};

pub use lexwire_value::{AnyValue, Mapping, ValueError, ValueKind};
