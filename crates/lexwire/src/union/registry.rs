//! Variant table and its tag index.

use std::collections::HashMap;

use crate::record::Fields;
use crate::{CodecError, RegistryError};

/// One `(tag, decoder)` pair of a union's variant table.
pub struct Variant<U> {
    pub tag: &'static str,
    pub decode: fn(&Fields<'_>) -> Result<U, CodecError>,
}

impl<U> Clone for Variant<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for Variant<U> {}

impl<U> std::fmt::Debug for Variant<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Variant").field("tag", &self.tag).finish()
    }
}

/// Exact-match tag index over a static variant table.
///
/// Built once per union and never mutated, so it is shared across threads
/// without locking.
#[derive(Debug)]
pub struct VariantRegistry<U: 'static> {
    union: &'static str,
    entries: &'static [Variant<U>],
    index: HashMap<&'static str, usize>,
}

impl<U: 'static> VariantRegistry<U> {
    /// Indexes `entries`, rejecting empty and duplicate tags.
    pub fn new(
        union: &'static str,
        entries: &'static [Variant<U>],
    ) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if entry.tag.is_empty() {
                return Err(RegistryError::EmptyTag { union });
            }
            if index.insert(entry.tag, i).is_some() {
                return Err(RegistryError::DuplicateTag {
                    union,
                    tag: entry.tag,
                });
            }
        }
        tracing::trace!(union = union, variants = entries.len(), "built variant registry");
        Ok(Self {
            union,
            entries,
            index,
        })
    }

    /// Like [`new`](Self::new) for tables fixed at compile time.
    ///
    /// # Panics
    ///
    /// Panics when the table is invalid; that is a defect in the table
    /// itself, not in any input.
    pub fn build(union: &'static str, entries: &'static [Variant<U>]) -> Self {
        match Self::new(union, entries) {
            Ok(registry) => registry,
            Err(err) => panic!("invalid variant table: {err}"),
        }
    }

    /// Case-sensitive exact lookup.
    pub fn lookup(&self, tag: &str) -> Option<&Variant<U>> {
        self.index.get(tag).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.index.contains_key(tag)
    }

    pub fn union_name(&self) -> &'static str {
        self.union
    }

    /// Tags in table order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
