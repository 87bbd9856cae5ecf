//! Post embeds.

use lexwire::record::{FieldWriter, Fields};
use lexwire::{impl_lexicon_for_record, lex_union, BoundedSequence, CodecError, Record};

use crate::blob::BlobRef;
use crate::repo::StrongRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    pub width: u64,
    pub height: u64,
}

impl Record for AspectRatio {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            width: fields.required("width")?,
            height: fields.required("height")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("width", &self.width).field("height", &self.height);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub image: BlobRef,
    /// Alt text; required, may be empty.
    pub alt: String,
    pub aspect_ratio: Option<AspectRatio>,
}

impl Record for Image {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            image: fields.required("image")?,
            alt: fields.required("alt")?,
            aspect_ratio: fields.optional("aspectRatio")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("image", &self.image)
            .field("alt", &self.alt)
            .optional("aspectRatio", &self.aspect_ratio);
    }
}

/// `app.bsky.embed.images`: up to four images.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Images {
    pub images: BoundedSequence<Image, 4>,
}

impl Record for Images {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            images: fields.required("images")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("images", &self.images);
    }
}

/// A link card.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalLink {
    pub uri: String,
    pub title: String,
    pub description: String,
    pub thumb: Option<BlobRef>,
}

impl Record for ExternalLink {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            uri: fields.required("uri")?,
            title: fields.required("title")?,
            description: fields.required("description")?,
            thumb: fields.optional("thumb")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("uri", &self.uri)
            .field("title", &self.title)
            .field("description", &self.description)
            .optional("thumb", &self.thumb);
    }
}

/// `app.bsky.embed.external`
#[derive(Debug, Clone, PartialEq)]
pub struct External {
    pub external: ExternalLink,
}

impl Record for External {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            external: fields.required("external")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("external", &self.external);
    }
}

/// `app.bsky.embed.record`: a quoted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEmbed {
    pub record: StrongRef,
}

impl Record for RecordEmbed {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            record: fields.required("record")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("record", &self.record);
    }
}

impl_lexicon_for_record!(AspectRatio, Image, Images, ExternalLink, External, RecordEmbed);

lex_union! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum Embed {
        "app.bsky.embed.images" => Images(Images),
        "app.bsky.embed.external" => External(External),
        "app.bsky.embed.record" => Record(RecordEmbed),
    }
}
