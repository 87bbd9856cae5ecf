//! Open tagged unions.
//!
//! A union is a closed Rust enum of known variant records plus a catch-all
//! for tags the client has never seen. Each union supplies only its static
//! variant table (usually through [`lex_union!`](crate::lex_union)); the
//! decode and encode logic lives once in [`TaggedUnion`].

mod macros;
mod registry;
mod tagged;

pub use registry::{Variant, VariantRegistry};
pub use tagged::{TaggedUnion, UnknownVariant};

use crate::constants::DEFAULT_DISCRIMINATOR;
use crate::record::FieldWriter;

/// Static description of one union family.
pub trait UnionSchema: Sized + 'static {
    /// Name used in logs and registry errors.
    const NAME: &'static str;

    /// Object key holding the variant tag.
    const DISCRIMINATOR: &'static str = DEFAULT_DISCRIMINATOR;

    /// Ordered variant table, one entry per tag.
    fn variants() -> &'static [Variant<Self>];

    /// Process-wide index over [`variants`](Self::variants), built once.
    fn registry() -> &'static VariantRegistry<Self>;

    /// Tag of this known variant.
    fn tag(&self) -> &'static str;

    /// Writes the variant's own fields, without the discriminator.
    fn encode_fields(&self, out: &mut FieldWriter);

    fn is_known_tag(tag: &str) -> bool {
        Self::registry().contains(tag)
    }
}
