//! Tolerant scalar deserializers for upstream wire data.
//!
//! The upstream API is loose about scalar shapes: timestamps arrive as
//! RFC 3339 strings, naive datetimes, bare dates, or epoch milliseconds;
//! identifiers as strings or numbers; flags as booleans or numbers. These
//! helpers map anything unrecognized to `None` (or `false`) instead of
//! failing the whole record.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes an optional timestamp from any of the accepted shapes.
///
/// ## Errors
/// Never fails on unrecognized shapes; only on a malformed underlying stream.
pub fn datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(datetime_value))
}

/// Deserializes an optional identifier from a JSON string or number.
///
/// ## Errors
/// Never fails on unrecognized shapes; only on a malformed underlying stream.
pub fn id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Deserializes an optional text field, ignoring non-string shapes.
///
/// ## Errors
/// Never fails on unrecognized shapes; only on a malformed underlying stream.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Deserializes a flag from a boolean or a number (non-zero is true).
/// Anything else, including a missing value, reads as `false`.
///
/// ## Errors
/// Never fails on unrecognized shapes; only on a malformed underlying stream.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => {
            n.as_i64().is_some_and(|i| i != 0)
                || n.as_u64().is_some_and(|u| u != 0)
                || n.as_f64().is_some_and(f64::is_normal)
        }
        _ => false,
    })
}

fn datetime_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => datetime_str(s),
        Value::Number(n) => epoch_millis(n),
        _ => None,
    }
}

fn datetime_str(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Naive datetimes are taken as UTC
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    // Bare dates resolve to midnight UTC
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc())
}

fn epoch_millis(n: &serde_json::Number) -> Option<DateTime<Utc>> {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "fractional epoch millis are truncated deliberately"
    )]
    let millis = n
        .as_i64()
        .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))?;
    DateTime::from_timestamp_millis(millis)
}
