//! String-to-value coercion.
//!
//! Every source ultimately produces a raw string; this module turns that
//! string into a typed [`Value`] directed by the destination's [`Kind`].
//!
//! - integers: base-10 signed 64-bit, overflow-checked
//! - floats: standard decimal and exponential notation
//! - booleans: `true`/`false` (ASCII case-insensitive) plus `1`/`0`
//! - durations: compound unit-suffixed strings (`1h`, `1h30m`, `1500ms`),
//!   each term summed left-to-right

use crate::error::SettleError;
use crate::value::{Kind, Value};

/// Coerce `raw` into a value of the requested kind.
///
/// A parse failure names the offending kind and the raw string in the
/// returned [`SettleError::Coerce`].
pub(crate) fn coerce(raw: &str, kind: Kind) -> Result<Value, SettleError> {
    match kind {
        Kind::Str => Ok(Value::Str(raw.to_string())),
        Kind::Int => raw
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|e| coerce_error(kind, raw, e)),
        Kind::Float => raw
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|e| coerce_error(kind, raw, e)),
        Kind::Bool => parse_bool(raw)
            .map(Value::Bool)
            .ok_or_else(|| coerce_error(kind, raw, "expected true/false or 1/0")),
        Kind::Duration => humantime::parse_duration(raw)
            .map(Value::Duration)
            .map_err(|e| coerce_error(kind, raw, e)),
    }
}

fn coerce_error(kind: Kind, raw: &str, reason: impl ToString) -> SettleError {
    SettleError::Coerce {
        kind,
        raw: raw.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") || raw == "1" {
        return Some(true);
    }
    if raw.eq_ignore_ascii_case("false") || raw == "0" {
        return Some(false);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn str_passes_through_verbatim() {
        assert_eq!(coerce("test", Kind::Str).unwrap(), Value::Str("test".into()));
        assert_eq!(coerce("", Kind::Str).unwrap(), Value::Str(String::new()));
        assert_eq!(
            coerce("  spaced  ", Kind::Str).unwrap(),
            Value::Str("  spaced  ".into())
        );
    }

    #[test]
    fn int_canonical() {
        assert_eq!(coerce("42", Kind::Int).unwrap(), Value::Int(42));
        assert_eq!(coerce("-7", Kind::Int).unwrap(), Value::Int(-7));
        assert_eq!(coerce("0", Kind::Int).unwrap(), Value::Int(0));
    }

    #[test]
    fn int_overflow_is_an_error() {
        let err = coerce("9223372036854775808", Kind::Int).unwrap_err();
        match err {
            SettleError::Coerce { kind, raw, .. } => {
                assert_eq!(kind, Kind::Int);
                assert_eq!(raw, "9223372036854775808");
            }
            other => panic!("expected Coerce, got {other:?}"),
        }
    }

    #[test]
    fn int_rejects_garbage() {
        assert!(coerce("forty-two", Kind::Int).is_err());
        assert!(coerce("4.2", Kind::Int).is_err());
        assert!(coerce("", Kind::Int).is_err());
    }

    #[test]
    fn float_canonical() {
        assert_eq!(coerce("3.14", Kind::Float).unwrap(), Value::Float(3.14));
        assert_eq!(coerce("-0.5", Kind::Float).unwrap(), Value::Float(-0.5));
        assert_eq!(coerce("1e3", Kind::Float).unwrap(), Value::Float(1000.0));
        assert_eq!(coerce("42", Kind::Float).unwrap(), Value::Float(42.0));
    }

    #[test]
    fn float_rejects_garbage() {
        assert!(coerce("pi", Kind::Float).is_err());
    }

    #[test]
    fn bool_canonical_set() {
        assert_eq!(coerce("true", Kind::Bool).unwrap(), Value::Bool(true));
        assert_eq!(coerce("false", Kind::Bool).unwrap(), Value::Bool(false));
        assert_eq!(coerce("TRUE", Kind::Bool).unwrap(), Value::Bool(true));
        assert_eq!(coerce("False", Kind::Bool).unwrap(), Value::Bool(false));
        assert_eq!(coerce("1", Kind::Bool).unwrap(), Value::Bool(true));
        assert_eq!(coerce("0", Kind::Bool).unwrap(), Value::Bool(false));
    }

    #[test]
    fn bool_rejects_aliases_outside_the_documented_set() {
        assert!(coerce("yes", Kind::Bool).is_err());
        assert!(coerce("no", Kind::Bool).is_err());
        assert!(coerce("t", Kind::Bool).is_err());
        assert!(coerce("on", Kind::Bool).is_err());
    }

    #[test]
    fn duration_single_unit() {
        assert_eq!(
            coerce("1h", Kind::Duration).unwrap(),
            Value::Duration(Duration::from_secs(3600))
        );
        assert_eq!(
            coerce("1500ms", Kind::Duration).unwrap(),
            Value::Duration(Duration::from_millis(1500))
        );
    }

    #[test]
    fn duration_compound_terms_sum() {
        assert_eq!(
            coerce("1h30m", Kind::Duration).unwrap(),
            Value::Duration(Duration::from_secs(5400))
        );
        assert_eq!(
            coerce("2h34m5s", Kind::Duration).unwrap(),
            Value::Duration(Duration::from_secs(2 * 3600 + 34 * 60 + 5))
        );
    }

    #[test]
    fn duration_rejects_negative_and_garbage() {
        assert!(coerce("-1h", Kind::Duration).is_err());
        assert!(coerce("eventually", Kind::Duration).is_err());
        assert!(coerce("", Kind::Duration).is_err());
    }

    #[test]
    fn error_message_names_kind_and_raw_string() {
        let msg = coerce("nope", Kind::Int).unwrap_err().to_string();
        assert!(msg.contains("integer"));
        assert!(msg.contains("nope"));
    }
}
