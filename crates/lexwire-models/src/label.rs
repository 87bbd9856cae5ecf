//! Content labels.

use lexwire::record::{FieldWriter, Fields};
use lexwire::{
    impl_lexicon_for_record, lex_union, AnyValue, BoundedSequence, CodecError, Record,
    TemporalValue,
};

/// `com.atproto.label.defs#label`: a labeler's assertion about a subject.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub ver: Option<i64>,
    /// DID of the labeler.
    pub src: String,
    /// Subject: an `at://` record URI or an account DID.
    pub uri: String,
    pub cid: Option<String>,
    pub val: String,
    /// Set when this label negates an earlier one.
    pub neg: Option<bool>,
    pub cts: TemporalValue,
    pub exp: Option<TemporalValue>,
    /// Signature bytes, kept in their `{"$bytes": ...}` form.
    pub sig: Option<AnyValue>,
}

impl Record for Label {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            ver: fields.optional("ver")?,
            src: fields.required("src")?,
            uri: fields.required("uri")?,
            cid: fields.optional("cid")?,
            val: fields.required("val")?,
            neg: fields.optional("neg")?,
            cts: fields.required("cts")?,
            exp: fields.optional("exp")?,
            sig: fields.optional("sig")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.optional("ver", &self.ver)
            .field("src", &self.src)
            .field("uri", &self.uri)
            .optional("cid", &self.cid)
            .field("val", &self.val)
            .optional("neg", &self.neg)
            .field("cts", &self.cts)
            .optional("exp", &self.exp)
            .optional("sig", &self.sig);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfLabel {
    pub val: String,
}

impl Record for SelfLabel {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            val: fields.required("val")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("val", &self.val);
    }
}

/// `com.atproto.label.defs#selfLabels`: labels an author puts on their own
/// record. At most 10 are written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelfLabels {
    pub values: BoundedSequence<SelfLabel, 10>,
}

impl SelfLabels {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|val| SelfLabel { val: val.into() })
                .collect(),
        }
    }
}

impl Record for SelfLabels {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            values: fields.required("values")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("values", &self.values);
    }
}

impl_lexicon_for_record!(Label, SelfLabel, SelfLabels);

lex_union! {
    /// Label sources a record may carry. Only self-labels exist today.
    #[derive(Debug, Clone, PartialEq)]
    pub enum PostLabels {
        "com.atproto.label.defs#selfLabels" => SelfLabels(SelfLabels),
    }
}
