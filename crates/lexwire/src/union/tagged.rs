//! The generic open-union codec.

use lexwire_value::{AnyValue, Mapping};

use super::UnionSchema;
use crate::lexicon::mismatch;
use crate::record::{FieldWriter, Fields};
use crate::{CodecError, Lexicon, RegistryError};

/// A union member whose tag the registry does not know.
///
/// `fields` is the complete object body as received, discriminator
/// included, so re-encoding reproduces every field.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownVariant {
    pub tag: String,
    pub fields: Mapping,
}

/// A decoded union value: a known variant, or an unknown one kept verbatim.
///
/// A known member also carries the keys of its object body that the variant
/// record did not read (newer optional fields, explicit `null`s). They are
/// written back after the record's own fields, so a decode/encode pass never
/// loses a field. Values built in code start with none.
#[derive(Debug, Clone, PartialEq)]
pub enum TaggedUnion<U> {
    Known(U, Mapping),
    Unknown(UnknownVariant),
}

impl<U: UnionSchema> TaggedUnion<U> {
    /// Builds an unknown member. The discriminator key is set to `tag`.
    ///
    /// Fails for a tag the union registers: such a value would not decode
    /// back to itself.
    pub fn unknown(tag: impl Into<String>, mut fields: Mapping) -> Result<Self, RegistryError> {
        let tag = tag.into();
        if U::is_known_tag(&tag) {
            return Err(RegistryError::RegisteredTag {
                union: U::NAME,
                tag,
            });
        }
        fields.insert(U::DISCRIMINATOR.to_owned(), AnyValue::Text(tag.clone()));
        Ok(TaggedUnion::Unknown(UnknownVariant { tag, fields }))
    }

    pub fn tag(&self) -> &str {
        match self {
            TaggedUnion::Known(value, _) => value.tag(),
            TaggedUnion::Unknown(unknown) => &unknown.tag,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, TaggedUnion::Known(..))
    }

    pub fn known(&self) -> Option<&U> {
        match self {
            TaggedUnion::Known(value, _) => Some(value),
            TaggedUnion::Unknown(_) => None,
        }
    }

    pub fn into_known(self) -> Option<U> {
        match self {
            TaggedUnion::Known(value, _) => Some(value),
            TaggedUnion::Unknown(_) => None,
        }
    }

    /// Keys of a known member that its record does not model.
    pub fn extra_fields(&self) -> Option<&Mapping> {
        match self {
            TaggedUnion::Known(_, extra) => Some(extra),
            TaggedUnion::Unknown(_) => None,
        }
    }

    pub fn unknown_fields(&self) -> Option<&Mapping> {
        match self {
            TaggedUnion::Known(..) => None,
            TaggedUnion::Unknown(unknown) => Some(&unknown.fields),
        }
    }

    /// Decodes an object body.
    ///
    /// An unregistered tag is not an error: the body is kept as
    /// [`TaggedUnion::Unknown`]. A registered tag whose body does not match
    /// its record fails with [`CodecError::VariantDecode`].
    pub fn decode_mapping(fields: &Mapping) -> Result<Self, CodecError> {
        let Some(AnyValue::Text(tag)) = fields.get(U::DISCRIMINATOR) else {
            return Err(CodecError::MissingDiscriminator {
                field: U::DISCRIMINATOR,
            });
        };

        match U::registry().lookup(tag) {
            Some(variant) => {
                let body = Fields::new(fields);
                let value = (variant.decode)(&body).map_err(|cause| CodecError::VariantDecode {
                    tag: tag.clone(),
                    cause: Box::new(cause),
                })?;
                let mut extra = body.unconsumed();
                extra.shift_remove(U::DISCRIMINATOR);
                Ok(TaggedUnion::Known(value, extra))
            }
            None => {
                tracing::debug!(union = U::NAME, tag = %tag, "unrecognized union tag, keeping raw fields");
                Ok(TaggedUnion::Unknown(UnknownVariant {
                    tag: tag.clone(),
                    fields: fields.clone(),
                }))
            }
        }
    }

    /// Encodes to an object body.
    ///
    /// Known members lead with the discriminator, then the record's fields,
    /// then any extra keys the record did not write itself. Unknown members
    /// are re-emitted as stored.
    pub fn encode_mapping(&self) -> Mapping {
        match self {
            TaggedUnion::Known(value, extra) => {
                let mut body = FieldWriter::new();
                value.encode_fields(&mut body);
                let body = body.into_mapping();

                let mut out = Mapping::with_capacity(body.len() + extra.len() + 1);
                out.insert(
                    U::DISCRIMINATOR.to_owned(),
                    AnyValue::Text(value.tag().to_owned()),
                );
                out.extend(body.into_iter().filter(|(key, _)| key != U::DISCRIMINATOR));
                for (key, value) in extra {
                    if key != U::DISCRIMINATOR && !out.contains_key(key) {
                        out.insert(key.clone(), value.clone());
                    }
                }
                out
            }
            TaggedUnion::Unknown(unknown) => unknown.fields.clone(),
        }
    }
}

impl<U: UnionSchema> From<U> for TaggedUnion<U> {
    fn from(value: U) -> Self {
        TaggedUnion::Known(value, Mapping::new())
    }
}

impl<U: UnionSchema> Lexicon for TaggedUnion<U> {
    fn decode_value(value: &AnyValue) -> Result<Self, CodecError> {
        let fields = value.as_mapping().ok_or_else(|| mismatch("object", value))?;
        Self::decode_mapping(fields)
    }

    fn encode_value(&self) -> AnyValue {
        AnyValue::Mapping(self.encode_mapping())
    }
}
