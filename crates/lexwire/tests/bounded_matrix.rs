//! Bounded sequence truncation matrix.

use lexwire::record::{FieldWriter, Fields};
use lexwire::{
    decode, encode, impl_lexicon_for_record, AnyValue, BoundedSequence, CodecError, Lexicon,
    Record,
};
use proptest::prelude::*;
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
struct Thread {
    title: String,
    replies: BoundedSequence<i64, 10>,
}

impl Record for Thread {
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            title: fields.required("title")?,
            replies: fields.or_default("replies")?,
        })
    }

    fn encode_fields(&self, out: &mut FieldWriter) {
        out.field("title", &self.title)
            .field("replies", &self.replies);
    }
}

impl_lexicon_for_record!(Thread);

#[test]
fn twenty_five_elements_encode_as_first_ten() {
    let replies: Vec<i64> = (1..=25).collect();
    let input = serde_json::to_vec(&json!({"title": "t", "replies": replies})).expect("fixture");

    let thread: Thread = decode(&input).expect("over-length decodes");
    assert_eq!(thread.replies.len(), 25);
    assert!(thread.replies.is_truncating());

    let out: serde_json::Value = serde_json::from_slice(&encode(&thread)).expect("output");
    assert_eq!(out["replies"], json!([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));
}

#[test]
fn lengths_around_the_bound() {
    for len in [0usize, 1, 9, 10, 11] {
        let seq: BoundedSequence<i64, 10> = (0..len as i64).collect();
        let encoded = seq.encode_value();
        let emitted = encoded.as_sequence().map(|items| items.len());
        assert_eq!(emitted, Some(len.min(10)), "len {len}");
        assert_eq!(seq.is_truncating(), len > 10);
    }
}

#[test]
fn decode_errors_report_the_element_index() {
    let input = br#"{"title":"t","replies":[1,2,"three"]}"#;
    let err = decode::<Thread>(input).expect_err("string element");
    assert_eq!(err.path(), "replies[2]");
}

#[test]
fn absent_sequence_defaults_to_empty() {
    let thread: Thread = decode(br#"{"title":"t"}"#).expect("decode");
    assert!(thread.replies.is_empty());
    assert_eq!(encode(&thread), br#"{"title":"t","replies":[]}"#.to_vec());
}

#[test]
fn nested_bounded_sequences_truncate_independently() {
    let outer: BoundedSequence<BoundedSequence<i64, 2>, 2> = vec![
        BoundedSequence::from(vec![1, 2, 3]),
        BoundedSequence::from(vec![4]),
        BoundedSequence::from(vec![5, 6]),
    ]
    .into();
    assert_eq!(
        outer.encode_value(),
        AnyValue::from(json!([[1, 2], [4]]))
    );
}

proptest! {
    #[test]
    fn encode_is_prefix_of_input(items in proptest::collection::vec(any::<i64>(), 0..40)) {
        let seq: BoundedSequence<i64, 10> = items.clone().into();
        let encoded = seq.encode_value();
        let expected: Vec<AnyValue> = items.iter().take(10).map(|n| AnyValue::from(*n)).collect();
        prop_assert_eq!(encoded, AnyValue::Sequence(expected));

        let back = BoundedSequence::<i64, 10>::decode_value(&seq.encode_value()).expect("decode");
        prop_assert_eq!(back.as_slice(), &items[..items.len().min(10)]);
    }
}
