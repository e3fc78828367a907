//! Forgiving conversions from raw JSON scalars into the richer types used by the
//! [`models`](crate::lidarr::models).
//!
//! Lidarr is not consistent about timestamp precision or about whether numbers arrive as
//! numbers or strings, so every conversion here returns `None` instead of failing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// Naive layouts tried after RFC 3339. All of them are read as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Converts a raw timestamp into a UTC date-time.
///
/// Accepts full RFC 3339 timestamps (any fractional precision, `Z` or an offset), the same
/// layout without an offset, and bare `YYYY-MM-DD` dates (midnight UTC). Everything else,
/// including `None` and blank strings, yields `None`.
pub fn coerce_datetime<S: AsRef<str>>(raw: Option<S>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    let raw = raw.as_ref().trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

pub(crate) fn to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.to_owned()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub(crate) fn to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.is_finite())
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn to_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|n| n != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub(crate) fn to_datetime(value: &Value) -> Option<DateTime<Utc>> {
    coerce_datetime(value.as_str())
}

/// Applies `convert` to every element of an array. A lone scalar is treated as a
/// one-element list; anything else gives an empty list.
pub(crate) fn to_list<T>(value: &Value, convert: impl Fn(&Value) -> Option<T>) -> Vec<T> {
    match value {
        Value::Array(items) => items.iter().filter_map(convert).collect(),
        Value::Null | Value::Object(_) => vec![],
        scalar => convert(scalar).into_iter().collect(),
    }
}
