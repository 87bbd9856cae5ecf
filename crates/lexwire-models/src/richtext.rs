//! Rich-text facets: annotated byte ranges of a post's text.

use lexwire::record::{FieldWriter, Fields};
use lexwire::{impl_lexicon_for_record, lex_union, CodecError, Record, TaggedUnion};

/// A range of the UTF-8 encoded text, `byteStart` inclusive, `byteEnd`
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteSlice {
    pub byte_start: u64,
    pub byte_end: u64,
}

impl ByteSlice {
    /// The annotated substring, if the range lands on character boundaries.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        let start = usize::try_from(self.byte_start).ok()?;
        let end = usize::try_from(self.byte_end).ok()?;
        text.get(start..end)
    }
}

impl Record for ByteSlice {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            byte_start: fields.required("byteStart")?,
            byte_end: fields.required("byteEnd")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("byteStart", &self.byte_start)
            .field("byteEnd", &self.byte_end);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    pub did: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub uri: String,
}

/// A hashtag, without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub tag: String,
}

impl Record for Mention {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            did: fields.required("did")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("did", &self.did);
    }
}

impl Record for Link {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            uri: fields.required("uri")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("uri", &self.uri);
    }
}

impl Record for Tag {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            tag: fields.required("tag")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("tag", &self.tag);
    }
}

lex_union! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum FacetFeature {
        "app.bsky.richtext.facet#mention" => Mention(Mention),
        "app.bsky.richtext.facet#link" => Link(Link),
        "app.bsky.richtext.facet#tag" => Tag(Tag),
    }
}

/// `app.bsky.richtext.facet`
#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    pub index: ByteSlice,
    pub features: Vec<TaggedUnion<FacetFeature>>,
}

impl Record for Facet {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            index: fields.required("index")?,
            features: fields.required("features")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("index", &self.index)
            .field("features", &self.features);
    }
}

impl_lexicon_for_record!(ByteSlice, Mention, Link, Tag, Facet);
