//! Operand deserialization shared by request DTOs.

use serde::de::{Deserializer, Error as _};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

/// Deserialize an optional operand that may arrive as a JSON number or a numeric string.
///
/// `null` and a missing field both yield `None`; use together with `#[serde(default)]`.
/// Non-finite values (`"inf"`, `"NaN"`) are rejected.
///
/// # Errors
/// Fails when the value is neither a number nor a string holding a finite number.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrString>::deserialize(deserializer)?;
    let value = match raw {
        None => return Ok(None),
        Some(NumberOrString::Number(n)) => n,
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("'{s}' is not a number")))?,
    };
    if value.is_finite() {
        Ok(Some(value))
    } else {
        Err(D::Error::custom("operand must be a finite number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "lenient_f64")]
        value: Option<f64>,
    }

    fn parse(json: &str) -> Result<Option<f64>, serde_json::Error> {
        serde_json::from_str::<Body>(json).map(|b| b.value)
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        assert_eq!(parse(r#"{"value": 5}"#).unwrap(), Some(5.0));
        assert_eq!(parse(r#"{"value": -2.5}"#).unwrap(), Some(-2.5));
        assert_eq!(parse(r#"{"value": " 7 "}"#).unwrap(), Some(7.0));
    }

    #[test]
    fn missing_and_null_are_none() {
        assert_eq!(parse("{}").unwrap(), None);
        assert_eq!(parse(r#"{"value": null}"#).unwrap(), None);
    }

    #[test]
    fn rejects_garbage_and_non_finite() {
        assert!(parse(r#"{"value": "five"}"#).is_err());
        assert!(parse(r#"{"value": "inf"}"#).is_err());
        assert!(parse(r#"{"value": "NaN"}"#).is_err());
        assert!(parse(r#"{"value": true}"#).is_err());
    }
}
