//! Bounded defensive decoder for structure-valued fields.
//!
//! The admin backend has been observed to serialize sequence fields as JSON
//! strings — sometimes more than once, so a stats list arrives as
//! `"[{\"value\":...}]"` or even `"\"[{\\\"value\\\":...}]\""`. This module
//! unwraps such fields back to native JSON structures with an explicit
//! iteration bound, so a pathological payload can neither loop nor error.
//!
//! Absence is a normal outcome here, not a failure: the merger treats
//! [`Decoded::Absent`] as "use the default".

use serde_json::Value;

/// Maximum number of string-decode steps before giving up.
///
/// Covers the single-, double-, and triple-encoded payloads seen in the
/// wild; anything deeper reports absence rather than looping.
pub const MAX_DECODE_PASSES: usize = 3;

/// Outcome of a defensive decode.
#[derive(Clone, Debug, PartialEq)]
pub enum Decoded {
    /// A native object or array was reached.
    Value(Value),
    /// The field is missing, malformed, scalar, or encoded too deep.
    Absent,
}

impl Decoded {
    /// The decoded value, if one was reached.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Decoded::Value(v) => Some(v),
            Decoded::Absent => None,
        }
    }
}

/// Unwrap a field that should ultimately be an object or array.
///
/// Native structures pass through unchanged. Strings get decoded one step at
/// a time, up to [`MAX_DECODE_PASSES`] steps. Scalars, decode failures, and
/// bound exhaustion all yield [`Decoded::Absent`].
pub fn decode_structural(raw: &Value) -> Decoded {
    let mut current = raw.clone();
    let mut passes = 0;

    loop {
        if matches!(current, Value::Object(_) | Value::Array(_)) {
            return Decoded::Value(current);
        }
        let Value::String(s) = current else {
            return Decoded::Absent;
        };
        if passes >= MAX_DECODE_PASSES {
            return Decoded::Absent;
        }
        passes += 1;
        match serde_json::from_str::<Value>(&s) {
            Ok(inner) => current = inner,
            Err(_) => return Decoded::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// JSON-encode a value as a string `n` times.
    fn encode_n(value: &Value, n: usize) -> Value {
        let mut current = value.clone();
        for _ in 0..n {
            current = Value::String(serde_json::to_string(&current).unwrap());
        }
        current
    }

    #[test]
    fn test_native_structures_pass_through() {
        let arr = json!([{"value": "10+", "label": "Mitra"}]);
        assert_eq!(decode_structural(&arr), Decoded::Value(arr.clone()));

        let obj = json!({"email": "a@b.c"});
        assert_eq!(decode_structural(&obj), Decoded::Value(obj.clone()));
    }

    #[test]
    fn test_recovers_up_to_three_encodings() {
        let arr = json!([{"value": "10+", "label": "Mitra"}]);
        for n in 1..=MAX_DECODE_PASSES {
            let encoded = encode_n(&arr, n);
            assert_eq!(
                decode_structural(&encoded),
                Decoded::Value(arr.clone()),
                "failed at {n} encodings"
            );
        }
    }

    #[test]
    fn test_beyond_bound_is_absent() {
        let arr = json!([{"value": "10+", "label": "Mitra"}]);
        let encoded = encode_n(&arr, MAX_DECODE_PASSES + 1);
        assert_eq!(decode_structural(&encoded), Decoded::Absent);
    }

    #[test]
    fn test_garbage_string_is_absent() {
        assert_eq!(decode_structural(&json!("not json at all")), Decoded::Absent);
        assert_eq!(decode_structural(&json!("[{truncated")), Decoded::Absent);
    }

    #[test]
    fn test_scalars_are_absent() {
        assert_eq!(decode_structural(&json!(42)), Decoded::Absent);
        assert_eq!(decode_structural(&json!(true)), Decoded::Absent);
        assert_eq!(decode_structural(&Value::Null), Decoded::Absent);
        // A string that decodes to a scalar is still not a structure.
        assert_eq!(decode_structural(&json!("42")), Decoded::Absent);
    }
}
