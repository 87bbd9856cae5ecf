//! Lexicon records and open unions built on `lexwire`.
//!
//! A representative slice of the social-networking lexicon: repository
//! references, blobs, labels, rich-text facets, feed posts with embeds, and
//! moderation event views. Every union here is open: tags this crate does not
//! know decode to [`TaggedUnion::Unknown`](lexwire::TaggedUnion::Unknown) and
//! re-encode unchanged.

pub mod blob;
pub mod embed;
pub mod label;
pub mod moderation;
pub mod post;
pub mod repo;
pub mod richtext;

pub use blob::BlobRef;
pub use embed::{AspectRatio, Embed, External, ExternalLink, Image, Images, RecordEmbed};
pub use label::{Label, PostLabels, SelfLabel, SelfLabels};
pub use moderation::{ModEvent, ModEventView, ModSubject};
pub use post::{Follow, Like, Post, ReplyRef, RepoRecord};
pub use repo::{RepoRef, StrongRef};
pub use richtext::{ByteSlice, Facet, FacetFeature, Link, Mention, Tag};
