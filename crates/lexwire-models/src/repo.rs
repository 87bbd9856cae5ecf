//! Repository references.

use lexwire::record::{FieldWriter, Fields};
use lexwire::{impl_lexicon_for_record, CodecError, Record};

/// `com.atproto.repo.strongRef`: a record URI pinned to a content hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StrongRef {
    pub uri: String,
    pub cid: String,
}

impl StrongRef {
    pub fn new(uri: impl Into<String>, cid: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            cid: cid.into(),
        }
    }
}

impl Record for StrongRef {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            uri: fields.required("uri")?,
            cid: fields.required("cid")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("uri", &self.uri).field("cid", &self.cid);
    }
}

/// `com.atproto.admin.defs#repoRef`: a whole account, by DID.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub did: String,
}

impl RepoRef {
    pub fn new(did: impl Into<String>) -> Self {
        Self { did: did.into() }
    }
}

impl Record for RepoRef {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            did: fields.required("did")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("did", &self.did);
    }
}

impl_lexicon_for_record!(StrongRef, RepoRef);
