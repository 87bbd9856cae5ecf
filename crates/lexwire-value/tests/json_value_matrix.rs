//! Decode/encode matrix and round-trip properties for `AnyValue`.

use lexwire_value::{
    decode, decode_str, deep_equal, encode, encode_pretty, encode_stable, AnyValue, Mapping,
    Number, ValueKind,
};
use proptest::prelude::*;

fn any_value() -> impl Strategy<Value = AnyValue> {
    let leaf = prop_oneof![
        Just(AnyValue::Null),
        any::<bool>().prop_map(AnyValue::Bool),
        any::<i64>().prop_map(AnyValue::from),
        any::<u64>().prop_map(AnyValue::from),
        (-1_000_000i32..1_000_000).prop_map(|q| {
            let n = Number::from_f64(f64::from(q) / 4.0).expect("finite");
            AnyValue::Number(n)
        }),
        ".{0,12}".prop_map(AnyValue::Text),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(AnyValue::Sequence),
            prop::collection::vec((".{0,8}", inner), 0..8)
                .prop_map(|entries| AnyValue::Mapping(entries.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn compact_roundtrip_is_identity(value in any_value()) {
        let back = decode(&encode(&value)).expect("decode compact");
        prop_assert_eq!(back, value);
    }

    #[test]
    fn pretty_roundtrip_is_identity(value in any_value()) {
        let back = decode(&encode_pretty(&value)).expect("decode pretty");
        prop_assert_eq!(back, value);
    }

    #[test]
    fn stable_roundtrip_is_semantically_equal(value in any_value()) {
        let back = decode(&encode_stable(&value)).expect("decode stable");
        prop_assert!(deep_equal(&back, &value));
    }

    #[test]
    fn encoding_is_deterministic(value in any_value()) {
        prop_assert_eq!(encode(&value), encode(&value.clone()));
    }
}

#[test]
fn scalar_matrix() {
    let cases: Vec<(&str, ValueKind)> = vec![
        ("null", ValueKind::Null),
        ("true", ValueKind::Bool),
        ("false", ValueKind::Bool),
        ("0", ValueKind::Number),
        ("-123", ValueKind::Number),
        ("18446744073709551615", ValueKind::Number),
        ("1.25", ValueKind::Number),
        ("-1e3", ValueKind::Number),
        ("\"\"", ValueKind::Text),
        ("\"abc\\u00e9\"", ValueKind::Text),
        ("[]", ValueKind::Sequence),
        ("{}", ValueKind::Mapping),
    ];
    for (input, kind) in cases {
        let value = decode_str(input).unwrap_or_else(|e| panic!("{input}: {e}"));
        assert_eq!(value.kind(), kind, "{input}");
    }
}

#[test]
fn integers_are_preserved_exactly() {
    let value = decode_str("[9007199254740993, -9223372036854775808, 18446744073709551615]")
        .expect("decode");
    let items = value.as_sequence().expect("sequence");
    assert_eq!(items[0].as_i64(), Some(9_007_199_254_740_993));
    assert_eq!(items[1].as_i64(), Some(i64::MIN));
    assert_eq!(items[2].as_u64(), Some(u64::MAX));
    assert_eq!(
        encode(&value),
        b"[9007199254740993,-9223372036854775808,18446744073709551615]".to_vec()
    );
}

#[test]
fn malformed_inputs_fail() {
    let cases: Vec<&[u8]> = vec![
        b"",
        b"   ",
        b"{",
        b"{\"a\":}",
        b"[1,]",
        b"{\"a\" 1}",
        b"tru",
        b"\"unterminated",
        b"{} trailing",
        b"\"\xc3\x28\"",
        b"NaN",
    ];
    for case in cases {
        assert!(decode(case).is_err(), "{:?}", String::from_utf8_lossy(case));
    }
}

#[test]
fn mapping_keeps_insertion_order_on_encode() {
    let mut map = Mapping::new();
    map.insert("zeta".into(), AnyValue::from(1i64));
    map.insert("alpha".into(), AnyValue::from(2i64));
    map.insert("$type".into(), AnyValue::from("x.y#z"));
    assert_eq!(
        encode(&AnyValue::Mapping(map)),
        br#"{"zeta":1,"alpha":2,"$type":"x.y#z"}"#.to_vec()
    );
}

#[test]
fn deep_equal_matrix() {
    let equal = vec![
        ("null", "null"),
        ("[1, 2, 3]", "[1, 2, 3]"),
        (r#"{"a": 1, "b": [2]}"#, r#"{"b": [2], "a": 1}"#),
        ("1", "1.0"),
        (r#"{"n": {"m": []}}"#, r#"{"n": {"m": []}}"#),
    ];
    for (a, b) in equal {
        let a = decode_str(a).expect("a");
        let b = decode_str(b).expect("b");
        assert!(deep_equal(&a, &b));
        assert!(deep_equal(&b, &a));
    }

    let unequal = vec![
        ("null", "0"),
        ("null", "false"),
        ("\"\"", "null"),
        ("[1, 2]", "[2, 1]"),
        ("[1]", "[1, 1]"),
        (r#"{"a": 1}"#, r#"{"a": 1, "b": 2}"#),
        (r#"{"a": 1}"#, r#"{"a": "1"}"#),
        ("{}", "[]"),
    ];
    for (a, b) in unequal {
        let a = decode_str(a).expect("a");
        let b = decode_str(b).expect("b");
        assert!(!deep_equal(&a, &b));
        assert!(!deep_equal(&b, &a));
    }
}
