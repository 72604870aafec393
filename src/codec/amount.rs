//! Fixed-point rescale of `amount` fields across the wire boundary.
//!
//! The chain stores coin amounts in base units, 100000 per LNO. Objects whose
//! only field is `amount` (the chain's `Coin`) are rescaled on the way in and
//! out. Scaling shifts the decimal point on the string form, so there is no
//! floating-point rounding.

use serde_json::{Map, Value};

use crate::error::{LinoError, LinoResult};

/// Decimal places between LNO and the chain's base unit.
pub const COIN_DECIMALS: i32 = 5;

/// Shift the decimal point of a plain decimal string by `places` (positive = multiply).
///
/// Returns `None` when `raw` is not a plain decimal number.
pub fn shift_decimal(raw: &str, places: i32) -> Option<String> {
    let raw = raw.trim();
    let (negative, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.chars().chain(frac_part.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let mut digits = format!("{int_part}{frac_part}");
    let mut point = int_part.len() as i64 + places as i64;
    if point < 0 {
        digits.insert_str(0, &"0".repeat((-point) as usize));
        point = 0;
    }
    let point = point as usize;
    if point > digits.len() {
        digits.push_str(&"0".repeat(point - digits.len()));
    }

    let (int_digits, frac_digits) = digits.split_at(point);
    let int_digits = match int_digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    let frac_digits = frac_digits.trim_end_matches('0');

    let magnitude = if frac_digits.is_empty() {
        int_digits.to_string()
    } else {
        format!("{int_digits}.{frac_digits}")
    };
    if negative && magnitude != "0" {
        Some(format!("-{magnitude}"))
    } else {
        Some(magnitude)
    }
}

fn amount_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn is_lone_amount(map: &Map<String, Value>) -> bool {
    map.len() == 1 && map.contains_key("amount")
}

fn rescale_object(value: Value, places: i32) -> LinoResult<Value> {
    match value {
        Value::Object(map) if is_lone_amount(&map) => {
            let raw = map.get("amount").and_then(amount_text).ok_or_else(|| {
                LinoError::InvalidAmount(format!("non-numeric amount {:?}", map.get("amount")))
            })?;
            let scaled = shift_decimal(&raw, places)
                .ok_or_else(|| LinoError::InvalidAmount(raw.clone()))?;
            let mut out = Map::new();
            out.insert("amount".to_string(), Value::String(scaled));
            Ok(Value::Object(out))
        }
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (k, v) in map {
                out.insert(k, rescale_object(v, places)?);
            }
            Ok(Value::Object(out))
        }
        Value::Array(items) => items
            .into_iter()
            .map(|v| rescale_object(v, places))
            .collect::<LinoResult<Vec<_>>>()
            .map(Value::Array),
        other => Ok(other),
    }
}

/// Convert chain base units to LNO in every `Coin` object of `value`.
pub fn decode_object(value: Value) -> LinoResult<Value> {
    rescale_object(value, -COIN_DECIMALS)
}

/// Convert LNO to chain base units in every `Coin` object of `value`.
pub fn encode_object(value: Value) -> LinoResult<Value> {
    rescale_object(value, COIN_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shift_decimal() {
        assert_eq!(shift_decimal("500000", -5).as_deref(), Some("5"));
        assert_eq!(shift_decimal("1", -5).as_deref(), Some("0.00001"));
        assert_eq!(shift_decimal("123456", -5).as_deref(), Some("1.23456"));
        assert_eq!(shift_decimal("0", -5).as_deref(), Some("0"));
        assert_eq!(shift_decimal("1.5", 5).as_deref(), Some("150000"));
        assert_eq!(shift_decimal("0.00001", 5).as_deref(), Some("1"));
        assert_eq!(shift_decimal("-250000", -5).as_deref(), Some("-2.5"));
        assert_eq!(shift_decimal("-0", 5).as_deref(), Some("0"));
        assert_eq!(shift_decimal(".5", 5).as_deref(), Some("50000"));
    }

    #[test]
    fn test_shift_decimal_rejects_garbage() {
        assert!(shift_decimal("", 5).is_none());
        assert!(shift_decimal("1e5", 5).is_none());
        assert!(shift_decimal("abc", -5).is_none());
        assert!(shift_decimal("1.2.3", -5).is_none());
    }

    #[test]
    fn test_decode_lone_amount() {
        let decoded = decode_object(json!({"amount": "500000"})).unwrap();
        assert_eq!(decoded, json!({"amount": "5"}));
    }

    #[test]
    fn test_decode_nested_and_arrays() {
        let raw = json!({
            "saving": {"amount": "1000000"},
            "frozen_money_list": [{"amount": {"amount": "100000"}, "times": 3}],
            "username": "alice",
            "is_deleted": false
        });
        let decoded = decode_object(raw).unwrap();
        assert_eq!(decoded["saving"]["amount"], "10");
        assert_eq!(decoded["frozen_money_list"][0]["amount"]["amount"], "1");
        assert_eq!(decoded["frozen_money_list"][0]["times"], 3);
        assert_eq!(decoded["username"], "alice");
        assert_eq!(decoded["is_deleted"], false);
    }

    #[test]
    fn test_amount_next_to_other_fields_untouched() {
        let raw = json!({"sender": "alice", "amount": "1"});
        assert_eq!(decode_object(raw.clone()).unwrap(), raw);
    }

    #[test]
    fn test_numeric_amount() {
        let decoded = decode_object(json!({"amount": 300000})).unwrap();
        assert_eq!(decoded, json!({"amount": "3"}));
    }

    #[test]
    fn test_round_trip() {
        for amount in ["5", "0.00001", "123.45678", "1000000"] {
            let encoded = encode_object(json!({ "amount": amount })).unwrap();
            let decoded = decode_object(encoded).unwrap();
            assert_eq!(decoded["amount"], amount);
        }
    }

    #[test]
    fn test_invalid_amount() {
        let err = decode_object(json!({"amount": "lots"})).unwrap_err();
        assert!(matches!(err, LinoError::InvalidAmount(_)));
        assert!(decode_object(json!({"amount": true})).is_err());
    }
}
