use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::server::error::AppError;

/// Parses an ISO-8601 date or date-time string into UTC.
///
/// Accepts RFC 3339 timestamps with an offset, date-times without an offset (taken
/// as UTC) and plain `YYYY-MM-DD` dates (midnight UTC).
///
/// # Arguments
/// - `value` - The string to parse
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Parsed instant
/// - `Err(AppError::BadRequest)` - Value is not a recognised ISO-8601 form
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Ok(naive.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }

    Err(AppError::BadRequest(format!("Invalid date '{}'", value)))
}

/// Like [`parse_datetime`] but reports `message` on failure.
pub fn parse_datetime_or(value: &str, message: &str) -> Result<DateTime<Utc>, AppError> {
    parse_datetime(value).map_err(|_| AppError::BadRequest(message.to_string()))
}

/// Reads a JSON array column as a list of strings, skipping non-string entries.
pub fn json_strings(value: serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
