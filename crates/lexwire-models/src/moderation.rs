//! Moderation event views.

use lexwire::record::{FieldWriter, Fields};
use lexwire::{impl_lexicon_for_record, lex_union, CodecError, Record, TaggedUnion, TemporalValue};

use crate::repo::{RepoRef, StrongRef};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModEventTakedown {
    pub comment: Option<String>,
    /// Temporary takedown; absent means permanent.
    pub duration_in_hours: Option<i64>,
    pub acknowledge_account_subjects: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModEventReverseTakedown {
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModEventComment {
    pub comment: String,
    /// Sticky comments stay pinned to the subject.
    pub sticky: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModEventReport {
    pub comment: Option<String>,
    pub is_reporter_muted: Option<bool>,
    /// A `com.atproto.moderation.defs#reason*` token.
    pub report_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModEventLabel {
    pub comment: Option<String>,
    pub create_label_vals: Vec<String>,
    pub negate_label_vals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModEventAcknowledge {
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModEventEscalate {
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModEventMute {
    pub comment: Option<String>,
    pub duration_in_hours: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModEventTag {
    pub add: Vec<String>,
    pub remove: Vec<String>,
    pub comment: Option<String>,
}

impl Record for ModEventTakedown {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            comment: fields.optional("comment")?,
            duration_in_hours: fields.optional("durationInHours")?,
            acknowledge_account_subjects: fields.optional("acknowledgeAccountSubjects")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.optional("comment", &self.comment)
            .optional("durationInHours", &self.duration_in_hours)
            .optional("acknowledgeAccountSubjects", &self.acknowledge_account_subjects);
    }
}

impl Record for ModEventReverseTakedown {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            comment: fields.optional("comment")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.optional("comment", &self.comment);
    }
}

impl Record for ModEventComment {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            comment: fields.required("comment")?,
            sticky: fields.optional("sticky")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("comment", &self.comment)
            .optional("sticky", &self.sticky);
    }
}

impl Record for ModEventReport {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            comment: fields.optional("comment")?,
            is_reporter_muted: fields.optional("isReporterMuted")?,
            report_type: fields.required("reportType")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.optional("comment", &self.comment)
            .optional("isReporterMuted", &self.is_reporter_muted)
            .field("reportType", &self.report_type);
    }
}

impl Record for ModEventLabel {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            comment: fields.optional("comment")?,
            create_label_vals: fields.required("createLabelVals")?,
            negate_label_vals: fields.required("negateLabelVals")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.optional("comment", &self.comment)
            .field("createLabelVals", &self.create_label_vals)
            .field("negateLabelVals", &self.negate_label_vals);
    }
}

impl Record for ModEventAcknowledge {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            comment: fields.optional("comment")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.optional("comment", &self.comment);
    }
}

impl Record for ModEventEscalate {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            comment: fields.optional("comment")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.optional("comment", &self.comment);
    }
}

impl Record for ModEventMute {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            comment: fields.optional("comment")?,
            duration_in_hours: fields.required("durationInHours")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.optional("comment", &self.comment)
            .field("durationInHours", &self.duration_in_hours);
    }
}

impl Record for ModEventTag {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            add: fields.required("add")?,
            remove: fields.required("remove")?,
            comment: fields.optional("comment")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("add", &self.add)
            .field("remove", &self.remove)
            .optional("comment", &self.comment);
    }
}

lex_union! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum ModEvent {
        "tools.ozone.moderation.defs#modEventTakedown" => Takedown(ModEventTakedown),
        "tools.ozone.moderation.defs#modEventReverseTakedown" => ReverseTakedown(ModEventReverseTakedown),
        "tools.ozone.moderation.defs#modEventComment" => Comment(ModEventComment),
        "tools.ozone.moderation.defs#modEventReport" => Report(ModEventReport),
        "tools.ozone.moderation.defs#modEventLabel" => Label(ModEventLabel),
        "tools.ozone.moderation.defs#modEventAcknowledge" => Acknowledge(ModEventAcknowledge),
        "tools.ozone.moderation.defs#modEventEscalate" => Escalate(ModEventEscalate),
        "tools.ozone.moderation.defs#modEventMute" => Mute(ModEventMute),
        "tools.ozone.moderation.defs#modEventTag" => Tag(ModEventTag),
    }
}

lex_union! {
    /// What a moderation event is about: a whole account or one record.
    #[derive(Debug, Clone, PartialEq)]
    pub enum ModSubject {
        "com.atproto.admin.defs#repoRef" => Repo(RepoRef),
        "com.atproto.repo.strongRef" => Record(StrongRef),
    }
}

/// `tools.ozone.moderation.defs#modEventView`
#[derive(Debug, Clone, PartialEq)]
pub struct ModEventView {
    pub id: i64,
    pub event: TaggedUnion<ModEvent>,
    pub subject: TaggedUnion<ModSubject>,
    pub subject_blob_cids: Vec<String>,
    /// DID of the moderator or reporter.
    pub created_by: String,
    pub created_at: TemporalValue,
    pub creator_handle: Option<String>,
    pub subject_handle: Option<String>,
}

impl ModEventView {
    /// DID of the account the subject belongs to, when it can be told
    /// without a lookup.
    pub fn subject_did(&self) -> Option<&str> {
        match self.subject.known()? {
            ModSubject::Repo(repo) => Some(repo.did.as_str()),
            ModSubject::Record(record) => record
                .uri
                .strip_prefix("at://")
                .and_then(|rest| rest.split('/').next()),
        }
    }
}

impl Record for ModEventView {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            id: fields.required("id")?,
            event: fields.required("event")?,
            subject: fields.required("subject")?,
            subject_blob_cids: fields.required("subjectBlobCids")?,
            created_by: fields.required("createdBy")?,
            created_at: fields.required("createdAt")?,
            creator_handle: fields.optional("creatorHandle")?,
            subject_handle: fields.optional("subjectHandle")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("id", &self.id)
            .field("event", &self.event)
            .field("subject", &self.subject)
            .field("subjectBlobCids", &self.subject_blob_cids)
            .field("createdBy", &self.created_by)
            .field("createdAt", &self.created_at)
            .optional("creatorHandle", &self.creator_handle)
            .optional("subjectHandle", &self.subject_handle);
    }
}

impl_lexicon_for_record!(
    ModEventTakedown,
    ModEventReverseTakedown,
    ModEventComment,
    ModEventReport,
    ModEventLabel,
    ModEventAcknowledge,
    ModEventEscalate,
    ModEventMute,
    ModEventTag,
    ModEventView,
);
