//! Redemption times arrive as Firestore timestamps, epoch milliseconds or
//! date strings. All of them become one `DateTime<Utc>`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn parse(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Object(map) => {
            let seconds = map
                .get("seconds")
                .or_else(|| map.get("_seconds"))
                .and_then(Value::as_i64)?;
            let nanos = map
                .get("nanoseconds")
                .or_else(|| map.get("_nanoseconds"))
                .and_then(Value::as_u64)
                .unwrap_or(0);
            Utc.timestamp_opt(seconds, u32::try_from(nanos).ok()?).single()
        }
        Value::Number(n) => from_millis(n.as_f64()?),
        Value::String(s) => parse_str(s.trim()),
        _ => None,
    }
}

fn from_millis(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() || millis <= 0.0 {
        return None;
    }
    Utc.timestamp_millis_opt(millis as i64).single()
}

fn parse_str(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }

    if raw.bytes().all(|b| b.is_ascii_digit()) {
        return from_millis(raw.parse::<f64>().ok()?);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Table cell text: `"N/A"` when missing, the raw text when unreadable.
pub fn display(value: &Value) -> String {
    let missing = match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    };
    if missing {
        return "N/A".to_string();
    }

    match parse(value) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    }
}
