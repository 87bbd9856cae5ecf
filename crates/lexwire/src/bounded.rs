//! Size-bounded sequences.
//!
//! A lexicon array with a declared `maxLength` is accepted at any length on
//! decode and truncated to the bound on encode. Truncation is silent to the
//! caller: it is lossy by contract and never an error. It is logged at debug
//! level.

use std::ops::Deref;

use lexwire_value::AnyValue;

use crate::{CodecError, Lexicon};

/// Encodes at most `max_len` leading elements of `items`.
pub fn truncated_encode<T: Lexicon>(items: &[T], max_len: usize) -> AnyValue {
    if items.len() > max_len {
        tracing::debug!(
            bound = max_len,
            len = items.len(),
            "truncating bounded sequence on encode"
        );
    }
    AnyValue::Sequence(
        items
            .iter()
            .take(max_len)
            .map(Lexicon::encode_value)
            .collect(),
    )
}

/// A sequence whose wire form holds at most `N` elements.
///
/// All decoded elements are kept in memory; only the first `N` are written
/// back out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundedSequence<T, const N: usize> {
    items: Vec<T>,
}

impl<T, const N: usize> BoundedSequence<T, N> {
    pub const BOUND: usize = N;

    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// True when encoding would drop elements.
    pub fn is_truncating(&self) -> bool {
        self.items.len() > N
    }

    /// Number of elements an encode will emit.
    pub fn encoded_len(&self) -> usize {
        self.items.len().min(N)
    }

    /// The elements an encode will emit.
    pub fn encoded(&self) -> &[T] {
        &self.items[..self.encoded_len()]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T, const N: usize> Default for BoundedSequence<T, N> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T, const N: usize> Deref for BoundedSequence<T, N> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T, const N: usize> From<Vec<T>> for BoundedSequence<T, N> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T, const N: usize> FromIterator<T> for BoundedSequence<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedSequence<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Lexicon, const N: usize> Lexicon for BoundedSequence<T, N> {
    fn decode_value(value: &AnyValue) -> Result<Self, CodecError> {
        Vec::<T>::decode_value(value).map(Self::new)
    }

    fn encode_value(&self) -> AnyValue {
        truncated_encode(&self.items, N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_keeps_prefix_only() {
        let langs: BoundedSequence<String, 3> =
            ["en", "fr", "de", "ja"].iter().map(|s| s.to_string()).collect();
        assert!(langs.is_truncating());
        assert_eq!(langs.len(), 4);
        assert_eq!(langs.encoded_len(), 3);
        assert_eq!(
            langs.encode_value(),
            AnyValue::Sequence(vec!["en".into(), "fr".into(), "de".into()])
        );
    }

    #[test]
    fn under_bound_is_untouched() {
        let tags: BoundedSequence<String, 8> = vec!["a".to_string()].into();
        assert!(!tags.is_truncating());
        assert_eq!(tags.encode_value(), AnyValue::Sequence(vec!["a".into()]));
    }

    #[test]
    fn zero_bound_emits_empty_array() {
        let none: BoundedSequence<i64, 0> = vec![1, 2].into();
        assert_eq!(none.encode_value(), AnyValue::Sequence(vec![]));
    }

    #[test]
    fn runtime_bound_helper() {
        let items = vec![1i64, 2, 3];
        assert_eq!(truncated_encode(&items, 2), AnyValue::Sequence(vec![1i64.into(), 2i64.into()]));
        assert_eq!(truncated_encode(&items, 10), items.encode_value());
    }
}
