use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Scalar value read from a legacy option bag.
///
/// Legacy payloads store numbers, numeric strings and interval strings in the
/// same fields, so the scalar keeps whatever JSON type it arrived with and
/// exposes the loose coercions the legacy editor relied on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegacyScalar {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl LegacyScalar {
    /// Loose truthiness: `null`, `false`, `0`, `NaN` and `""` are falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(value) => *value,
            Self::Number(value) => *value != 0.0 && !value.is_nan(),
            Self::Text(value) => !value.is_empty(),
        }
    }

    /// String interpolation of the scalar (`10` -> `"10"`, `true` -> `"true"`).
    #[must_use]
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Null => "null".to_owned(),
            Self::Bool(value) => value.to_string(),
            Self::Number(value) => format_number(*value),
            Self::Text(value) => value.clone(),
        }
    }

    /// Unary-plus numeric coercion. Unparseable text yields `NaN`.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Null => 0.0,
            Self::Bool(value) => f64::from(u8::from(*value)),
            Self::Number(value) => *value,
            Self::Text(value) => parse_number_text(value),
        }
    }

    /// Numeric coercion with `NaN` mapped to `None`.
    #[must_use]
    pub fn to_non_nan_number(&self) -> Option<f64> {
        let number = self.to_number();
        (!number.is_nan()).then_some(number)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

/// Truthiness of an optional scalar; absent is falsy.
#[must_use]
pub fn truthy(value: Option<&LegacyScalar>) -> bool {
    value.is_some_and(LegacyScalar::is_truthy)
}

/// Numeric coercion of an optional scalar where absent and `NaN` both map to `None`.
#[must_use]
pub fn as_number(value: Option<&LegacyScalar>) -> Option<f64> {
    value.and_then(LegacyScalar::to_non_nan_number)
}

/// Formats a number the way legacy string interpolation did.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }
    format!("{value}")
}

fn parse_number_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).map_or(f64::NAN, |parsed| parsed as f64);
        }
    }

    // Rust's float parser also accepts `inf`/`nan` spellings that must stay NaN here.
    if !trimmed
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '+' | '-' | '.' | 'e' | 'E'))
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Deserializes a field leniently: a value of an unexpected JSON shape is
/// treated as absent instead of failing the enclosing document.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_matches_loose_rules() {
        assert!(!LegacyScalar::Null.is_truthy());
        assert!(!LegacyScalar::Number(0.0).is_truthy());
        assert!(!LegacyScalar::Number(f64::NAN).is_truthy());
        assert!(!LegacyScalar::Text(String::new()).is_truthy());
        assert!(LegacyScalar::Text("0".to_owned()).is_truthy());
        assert!(LegacyScalar::Number(-1.0).is_truthy());
        assert!(!truthy(None));
    }

    #[test]
    fn numbers_format_like_interpolation() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn text_coercion_rejects_foreign_spellings() {
        assert_eq!(parse_number_text(" 3.5 "), 3.5);
        assert_eq!(parse_number_text(""), 0.0);
        assert_eq!(parse_number_text("0x1f"), 31.0);
        assert_eq!(parse_number_text("Infinity"), f64::INFINITY);
        assert!(parse_number_text("inf").is_nan());
        assert!(parse_number_text("nan").is_nan());
        assert!(parse_number_text("abc").is_nan());
        assert!(parse_number_text("10px").is_nan());
    }

    #[test]
    fn lenient_field_drops_mismatched_shapes() {
        #[derive(Deserialize)]
        struct Probe {
            #[serde(default, deserialize_with = "lenient")]
            value: Option<LegacyScalar>,
        }

        let probe: Probe = serde_json::from_str(r#"{"value": [1, 2]}"#).expect("probe");
        assert_eq!(probe.value, None);
        let probe: Probe = serde_json::from_str(r#"{"value": null}"#).expect("probe");
        assert_eq!(probe.value, Some(LegacyScalar::Null));
        let probe: Probe = serde_json::from_str("{}").expect("probe");
        assert_eq!(probe.value, None);
    }
}
