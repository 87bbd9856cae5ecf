//! Feed posts and the repository record union.

use lexwire::record::{FieldWriter, Fields};
use lexwire::{
    impl_lexicon_for_record, lex_union, BoundedSequence, CodecError, Record, TaggedUnion,
    TemporalValue,
};

use crate::embed::Embed;
use crate::label::PostLabels;
use crate::repo::StrongRef;
use crate::richtext::Facet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRef {
    pub root: StrongRef,
    pub parent: StrongRef,
}

impl Record for ReplyRef {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            root: fields.required("root")?,
            parent: fields.required("parent")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("root", &self.root).field("parent", &self.parent);
    }
}

/// `app.bsky.feed.post`
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub text: String,
    pub facets: Option<Vec<Facet>>,
    pub reply: Option<ReplyRef>,
    pub embed: Option<TaggedUnion<Embed>>,
    /// Content languages; at most 3 are written.
    pub langs: Option<BoundedSequence<String, 3>>,
    pub labels: Option<TaggedUnion<PostLabels>>,
    /// Extra hashtags outside the text; at most 8 are written.
    pub tags: Option<BoundedSequence<String, 8>>,
    pub created_at: TemporalValue,
}

impl Post {
    /// A plain-text post with no annotations.
    pub fn new(text: impl Into<String>, created_at: TemporalValue) -> Self {
        Self {
            text: text.into(),
            facets: None,
            reply: None,
            embed: None,
            langs: None,
            labels: None,
            tags: None,
            created_at,
        }
    }

    pub fn is_reply(&self) -> bool {
        self.reply.is_some()
    }
}

impl Record for Post {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            text: fields.required("text")?,
            facets: fields.optional("facets")?,
            reply: fields.optional("reply")?,
            embed: fields.optional("embed")?,
            langs: fields.optional("langs")?,
            labels: fields.optional("labels")?,
            tags: fields.optional("tags")?,
            created_at: fields.required("createdAt")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("text", &self.text)
            .optional("facets", &self.facets)
            .optional("reply", &self.reply)
            .optional("embed", &self.embed)
            .optional("langs", &self.langs)
            .optional("labels", &self.labels)
            .optional("tags", &self.tags)
            .field("createdAt", &self.created_at);
    }
}

/// `app.bsky.feed.like`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub subject: StrongRef,
    pub created_at: TemporalValue,
}

impl Record for Like {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            subject: fields.required("subject")?,
            created_at: fields.required("createdAt")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("subject", &self.subject)
            .field("createdAt", &self.created_at);
    }
}

/// `app.bsky.graph.follow`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follow {
    /// DID of the followed account.
    pub subject: String,
    pub created_at: TemporalValue,
}

impl Record for Follow {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            subject: fields.required("subject")?,
            created_at: fields.required("createdAt")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("subject", &self.subject)
            .field("createdAt", &self.created_at);
    }
}

impl_lexicon_for_record!(ReplyRef, Post, Like, Follow);

lex_union! {
    /// A record as stored in a repository, typed by its collection NSID.
    #[derive(Debug, Clone, PartialEq)]
    pub enum RepoRecord {
        "app.bsky.feed.post" => Post(Post),
        "app.bsky.feed.like" => Like(Like),
        "app.bsky.graph.follow" => Follow(Follow),
    }
}
