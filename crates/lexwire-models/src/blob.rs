//! Blob references.
//!
//! Two wire shapes exist. The current one is typed:
//!
//! ```json
//! {"$type":"blob","ref":{"$link":"bafk..."},"mimeType":"image/png","size":1024}
//! ```
//!
//! Older records carry the untyped `{"cid":"bafk...","mimeType":"image/png"}`.
//! Both decode, and each re-encodes in the shape it arrived in.

use lexwire::record::{FieldWriter, Fields};
use lexwire::{impl_lexicon_for_record, AnyValue, CodecError, Record};

const BLOB_TYPE: &str = "blob";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlobRef {
    Typed {
        cid: String,
        mime_type: String,
        size: u64,
    },
    Legacy {
        cid: String,
        mime_type: String,
    },
}

impl BlobRef {
    pub fn new(cid: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        BlobRef::Typed {
            cid: cid.into(),
            mime_type: mime_type.into(),
            size,
        }
    }

    pub fn cid(&self) -> &str {
        match self {
            BlobRef::Typed { cid, .. } | BlobRef::Legacy { cid, .. } => cid,
        }
    }

    pub fn mime_type(&self) -> &str {
        match self {
            BlobRef::Typed { mime_type, .. } | BlobRef::Legacy { mime_type, .. } => mime_type,
        }
    }

    /// Byte size; unknown for legacy references.
    pub fn size(&self) -> Option<u64> {
        match self {
            BlobRef::Typed { size, .. } => Some(*size),
            BlobRef::Legacy { .. } => None,
        }
    }
}

/// `{"$link": cid}`
#[derive(Debug, Clone, PartialEq, Eq)]
struct CidLink(String);

impl Record for CidLink {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        fields.required("$link").map(CidLink)
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("$link", &self.0);
    }
}

impl Record for BlobRef {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        let typed = matches!(fields.get("$type"), Some(AnyValue::Text(t)) if t == BLOB_TYPE);
        if typed || fields.contains("ref") {
            let CidLink(cid) = fields.required("ref")?;
            Ok(BlobRef::Typed {
                cid,
                mime_type: fields.required("mimeType")?,
                size: fields.required("size")?,
            })
        } else {
            Ok(BlobRef::Legacy {
                cid: fields.required("cid")?,
                mime_type: fields.required("mimeType")?,
            })
        }
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        match self {
            BlobRef::Typed {
                cid,
                mime_type,
                size,
            } => {
                out.raw("$type", AnyValue::from(BLOB_TYPE))
                    .field("ref", &CidLink(cid.clone()))
                    .field("mimeType", mime_type)
                    .field("size", size);
            }
            BlobRef::Legacy { cid, mime_type } => {
                out.field("cid", cid).field("mimeType", mime_type);
            }
        }
    }
}

impl_lexicon_for_record!(CidLink, BlobRef);
