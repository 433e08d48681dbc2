//! Feature property access with JavaScript value semantics.
//!
//! The dashboard that hosts these callbacks compares and prints property
//! values the way JavaScript does. The helpers here reproduce the handful of
//! conversions the callbacks rely on so that a class table like
//! `[-2, "stable"]` matches exactly the same features it would in the browser.

use geojson::Feature;
use serde_json::Value;

/// Reads a property from a feature. `None` stands for JavaScript `undefined`.
pub fn property<'a>(feature: &'a Feature, key: &str) -> Option<&'a Value> {
    feature.property(key)
}

/// Loose (`==`) equality between a property value and a class entry.
///
/// This is a compatibility shim, not strict equality: numbers and numeric
/// strings compare by value (`"2" == 2`), booleans compare as 0/1, `null`
/// equals only `null` or a missing property, and arrays or objects compared
/// with a scalar go through their string form. Two arrays or objects never
/// compare equal since JavaScript compares them by identity.
pub fn loosely_equals(left: Option<&Value>, right: &Value) -> bool {
    let Some(left) = left else {
        return right.is_null();
    };

    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        (Value::Array(_) | Value::Object(_), Value::Array(_) | Value::Object(_)) => false,
        (Value::Array(_) | Value::Object(_), _) => {
            loosely_equals(Some(&Value::String(to_js_string(Some(left)))), right)
        }
        (_, Value::Array(_) | Value::Object(_)) => {
            loosely_equals(Some(left), &Value::String(to_js_string(Some(right))))
        }
        // Remaining pairs mix numbers, strings and booleans
        _ => to_number(Some(left)) == to_number(Some(right)),
    }
}

/// JavaScript `Number(value)` conversion.
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => string_to_number(s),
        Some(v @ Value::Array(_)) => string_to_number(&to_js_string(Some(v))),
        Some(Value::Object(_)) => f64::NAN,
    }
}

fn string_to_number(s: &str) -> f64 {
    let s = s.trim();
    match s {
        "" => return 0.0,
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix)
                .map(|n| n as f64)
                .unwrap_or(f64::NAN);
        }
    }

    // Rust also accepts "inf" and "nan", JavaScript does not
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

/// JavaScript `String(value)` conversion, as used by template literals and
/// object key lookups.
pub fn to_js_string(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => i.to_string(),
            (_, Some(u)) => u.to_string(),
            _ => number_to_string(n.as_f64().unwrap_or(f64::NAN)),
        },
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_js_string(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // Shortest digits in exponent form, with an explicit `+` on the exponent
        let sci = format!("{:e}", n);
        match sci.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => sci,
        }
    } else {
        n.to_string()
    }
}

/// JavaScript `Number.prototype.toFixed(digits)`.
///
/// Differs from Rust's `{:.N}` on exact ties, which JavaScript rounds away
/// from zero (`0.125` -> `"0.13"`), and on `-0`, which prints unsigned.
/// Magnitudes of `1e21` and above fall back to `String(value)`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return number_to_string(value);
    }
    let value = if value == 0.0 { 0.0 } else { value };

    // The exact binary value of any tie terminates well within 40 extra digits
    const GUARD: usize = 40;
    let exact = format!("{:.*}", digits + GUARD, value);
    let (kept, tail) = exact.split_at(exact.len() - GUARD);
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');

    if !is_tie {
        return format!("{:.*}", digits, value);
    }

    let step = 10f64.powi(-(digits as i32));
    let truncated: f64 = kept.trim_end_matches('.').parse().unwrap_or(value);
    let rounded = if value < 0.0 {
        truncated - step
    } else {
        truncated + step
    };
    format!("{:.*}", digits, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_loose_equality_strings_and_numbers() {
        assert!(loosely_equals(Some(&json!("B")), &json!("B")));
        assert!(!loosely_equals(Some(&json!("B")), &json!("b")));
        assert!(loosely_equals(Some(&json!(2)), &json!("2")));
        assert!(loosely_equals(Some(&json!("2.0")), &json!(2)));
        assert!(loosely_equals(Some(&json!(" 3 ")), &json!(3)));
        assert!(!loosely_equals(Some(&json!("abc")), &json!(0)));
    }

    #[test]
    fn test_loose_equality_null_bool_and_missing() {
        assert!(loosely_equals(None, &json!(null)));
        assert!(loosely_equals(Some(&json!(null)), &json!(null)));
        assert!(!loosely_equals(Some(&json!(null)), &json!(0)));
        assert!(!loosely_equals(None, &json!("undefined")));
        assert!(loosely_equals(Some(&json!(true)), &json!(1)));
        assert!(loosely_equals(Some(&json!(false)), &json!("0")));
        assert!(!loosely_equals(Some(&json!(true)), &json!("true")));
    }

    #[test]
    fn test_loose_equality_arrays() {
        assert!(loosely_equals(Some(&json!([1, 2])), &json!("1,2")));
        assert!(loosely_equals(Some(&json!([5])), &json!(5)));
        assert!(!loosely_equals(Some(&json!([1])), &json!([1])));
    }

    #[test]
    fn test_to_number() {
        assert!(to_number(None).is_nan());
        assert_eq!(to_number(Some(&json!(null))), 0.0);
        assert_eq!(to_number(Some(&json!(""))), 0.0);
        assert_eq!(to_number(Some(&json!("-4.5"))), -4.5);
        assert_eq!(to_number(Some(&json!("0x10"))), 16.0);
        assert!(to_number(Some(&json!("inf"))).is_nan());
        assert!(to_number(Some(&json!({"a": 1}))).is_nan());
    }

    #[test]
    fn test_to_js_string() {
        assert_eq!(to_js_string(None), "undefined");
        assert_eq!(to_js_string(Some(&json!(null))), "null");
        assert_eq!(to_js_string(Some(&json!(3.0))), "3");
        assert_eq!(to_js_string(Some(&json!(1.5))), "1.5");
        assert_eq!(to_js_string(Some(&json!(-7))), "-7");
        assert_eq!(to_js_string(Some(&json!("EGMS_123"))), "EGMS_123");
        assert_eq!(to_js_string(Some(&json!([1, null, "a"]))), "1,,a");
    }

    #[test]
    fn test_to_js_string_exponent_form() {
        assert_eq!(to_js_string(Some(&json!(1e21))), "1e+21");
        assert_eq!(to_js_string(Some(&json!(-1.23e27))), "-1.23e+27");
        assert_eq!(to_js_string(Some(&json!(1e-7))), "1e-7");
        assert_eq!(to_js_string(Some(&json!(2.5e-8))), "2.5e-8");
        assert_eq!(to_js_string(Some(&json!(0.000001))), "0.000001");
        assert_eq!(to_js_string(Some(&json!(1e20))), "100000000000000000000");
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(3.456, 2), "3.46");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(50.0, 2), "50.00");
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 2), "-Infinity");
        assert_eq!(to_fixed(1e21, 2), "1e+21");
        assert_eq!(to_fixed(-2.5e22, 2), "-2.5e+22");
        assert_eq!(to_fixed(1e-7, 2), "0.00");
    }
}
