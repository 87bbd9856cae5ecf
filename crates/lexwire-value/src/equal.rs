use serde_json::Number;

use crate::AnyValue;

/// Semantic equality between two values.
///
/// Mappings compare by membership (key order is ignored), sequences by
/// position, and numbers by numeric value, so `1` and `1.0` are equal even
/// though they are distinct [`AnyValue`]s under `==`.
///
/// ```
/// use lexwire_value::{decode_str, deep_equal};
///
/// let a = decode_str(r#"{"n": 1, "s": "x"}"#).unwrap();
/// let b = decode_str(r#"{"s": "x", "n": 1.0}"#).unwrap();
/// assert!(deep_equal(&a, &b));
/// ```
pub fn deep_equal(a: &AnyValue, b: &AnyValue) -> bool {
    match (a, b) {
        (AnyValue::Null, AnyValue::Null) => true,
        (AnyValue::Bool(a), AnyValue::Bool(b)) => a == b,
        (AnyValue::Number(a), AnyValue::Number(b)) => numbers_equal(a, b),
        (AnyValue::Text(a), AnyValue::Text(b)) => a == b,
        (AnyValue::Sequence(a), AnyValue::Sequence(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_equal(x, y))
        }
        (AnyValue::Mapping(a), AnyValue::Mapping(b)) => {
            if a.len() != b.len() {
                return false;
            }
            for (key, val_a) in a {
                match b.get(key) {
                    Some(val_b) if deep_equal(val_a, val_b) => {}
                    _ => return false,
                }
            }
            true
        }
        // Different types are never equal
        _ => false,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
