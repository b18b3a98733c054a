//! Null-safe field access over loosely-typed JSON.
//!
//! Every helper here is total: a missing, null or wrongly-typed field yields
//! a zero, an empty string or an empty slice, never an error.

use serde_json::Value;

/// First of `keys` whose value is present and not null
pub fn lookup<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| value.get(*key))
        .find(|v| !v.is_null())
}

/// Walk a nested object path, stopping at the first missing segment
pub fn path<'a>(value: &'a Value, segments: &[&str]) -> Option<&'a Value> {
    segments
        .iter()
        .try_fold(value, |current, segment| current.get(*segment))
        .filter(|v| !v.is_null())
}

/// Parse as a number, falling back to 0 when the result is not finite
pub fn as_number(value: Option<&Value>) -> f64 {
    as_optional_number(value).unwrap_or(0.0)
}

/// Parse as a number, keeping absence (and non-finite results) as `None`
pub fn as_optional_number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().ok()?
            }
        }
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };

    n.is_finite().then_some(n)
}

/// Non-negative integer count (e.g. legs won), `None` when absent or invalid
pub fn as_count(value: Option<&Value>) -> Option<u32> {
    as_optional_number(value)
        .filter(|n| *n >= 0.0)
        .map(|n| n.round() as u32)
}

/// Stringify, falling back to an empty string
pub fn as_text(value: Option<&Value>) -> String {
    text_or(value, "")
}

/// Stringify, falling back to `default` when the field is absent or null
pub fn text_or(value: Option<&Value>, default: &str) -> String {
    match value {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => format_number(n),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Optional free text; empty strings count as absent
pub fn as_optional_text(value: Option<&Value>) -> Option<String> {
    let text = as_text(value);
    (!text.is_empty()).then_some(text)
}

/// Elements of a JSON array, or an empty slice for anything else
pub fn as_array(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Integral floats print without a trailing `.0` (ids like `3.0` read as "3")
fn format_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_skips_null() {
        let v = json!({"probabilidad": null, "probabilidad_estimada": 55.2});
        let found = lookup(&v, &["probabilidad", "probabilidad_estimada"]);
        assert_eq!(found, Some(&json!(55.2)));
        assert_eq!(lookup(&v, &["missing"]), None);
    }

    #[test]
    fn test_path() {
        let v = json!({"jornada": {"primera_division": {"partidos": [1, 2]}}});
        assert_eq!(
            path(&v, &["jornada", "primera_division", "partidos"]),
            Some(&json!([1, 2]))
        );
        assert_eq!(path(&v, &["jornada", "segunda_division", "partidos"]), None);
        assert_eq!(path(&json!(null), &["jornada"]), None);
    }

    #[test]
    fn test_as_number() {
        assert_eq!(as_number(Some(&json!(2.5))), 2.5);
        assert_eq!(as_number(Some(&json!(" 12 "))), 12.0);
        assert_eq!(as_number(Some(&json!(""))), 0.0);
        assert_eq!(as_number(Some(&json!("abc"))), 0.0);
        assert_eq!(as_number(Some(&json!("inf"))), 0.0);
        assert_eq!(as_number(Some(&json!(true))), 1.0);
        assert_eq!(as_number(Some(&json!({"a": 1}))), 0.0);
        assert_eq!(as_number(None), 0.0);
    }

    #[test]
    fn test_as_optional_number_keeps_absence() {
        assert_eq!(as_optional_number(Some(&json!(null))), None);
        assert_eq!(as_optional_number(None), None);
        assert_eq!(as_optional_number(Some(&json!(1.95))), Some(1.95));
    }

    #[test]
    fn test_text_coercion() {
        assert_eq!(as_text(Some(&json!("Local"))), "Local");
        assert_eq!(as_text(Some(&json!(7))), "7");
        assert_eq!(as_text(Some(&json!(3.0))), "3");
        assert_eq!(as_text(Some(&json!(2.25))), "2.25");
        assert_eq!(as_text(Some(&json!(false))), "false");
        assert_eq!(as_text(None), "");
        assert_eq!(text_or(Some(&json!(null)), "Partido"), "Partido");
        assert_eq!(as_optional_text(Some(&json!(""))), None);
    }

    #[test]
    fn test_as_array() {
        assert_eq!(as_array(Some(&json!([1, 2]))).len(), 2);
        assert!(as_array(Some(&json!("not a list"))).is_empty());
        assert!(as_array(None).is_empty());
    }

    #[test]
    fn test_as_count() {
        assert_eq!(as_count(Some(&json!(3))), Some(3));
        assert_eq!(as_count(Some(&json!(-1))), None);
        assert_eq!(as_count(None), None);
    }
}
