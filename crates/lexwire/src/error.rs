//! Codec error taxonomy.

use lexwire_value::ValueError;
use thiserror::Error;

/// Errors surfaced by decode calls. Encoding never fails.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed JSON: {0}")]
    MalformedJson(#[from] ValueError),
    #[error("missing discriminator field `{field}`")]
    MissingDiscriminator { field: &'static str },
    #[error("variant `{tag}` failed to decode: {cause}")]
    VariantDecode { tag: String, cause: Box<CodecError> },
    #[error("invalid timestamp `{0}`")]
    InvalidTimestamp(String),
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("field `{field}`: {cause}")]
    Field {
        field: &'static str,
        cause: Box<CodecError>,
    },
    #[error("element {index}: {cause}")]
    Element { index: usize, cause: Box<CodecError> },
}

impl CodecError {
    /// Wraps `self` with the name of the record field it came from.
    pub fn in_field(self, field: &'static str) -> Self {
        CodecError::Field {
            field,
            cause: Box::new(self),
        }
    }

    /// Wraps `self` with the sequence position it came from.
    pub fn at_index(self, index: usize) -> Self {
        CodecError::Element {
            index,
            cause: Box::new(self),
        }
    }

    /// Innermost error, skipping field/element/variant context.
    pub fn root_cause(&self) -> &CodecError {
        let mut current = self;
        loop {
            match current {
                CodecError::Field { cause, .. }
                | CodecError::Element { cause, .. }
                | CodecError::VariantDecode { cause, .. } => current = cause,
                other => return other,
            }
        }
    }

    /// Dotted location of the failure, e.g. `embed.images[2].alt`.
    pub fn path(&self) -> String {
        let mut out = String::new();
        let mut current = self;
        loop {
            match current {
                CodecError::Field { field, cause } => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(field);
                    current = cause;
                }
                CodecError::Element { index, cause } => {
                    out.push_str(&format!("[{index}]"));
                    current = cause;
                }
                CodecError::VariantDecode { cause, .. } => current = cause,
                CodecError::MissingField { field } => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(field);
                    return out;
                }
                _ => return out,
            }
        }
    }
}

/// Errors in a union's static variant table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("union `{union}` registers tag `{tag}` more than once")]
    DuplicateTag { union: &'static str, tag: &'static str },
    #[error("union `{union}` registers an empty tag")]
    EmptyTag { union: &'static str },
    #[error("union `{union}` already registers tag `{tag}`")]
    RegisteredTag { union: &'static str, tag: String },
}
