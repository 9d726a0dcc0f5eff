use chrono::{DateTime, NaiveDateTime};

/// Renders a backend timestamp as the calendar date it falls on.
/// The backend emits bare ISO datetimes; RFC 3339 is accepted too.
/// Anything unparsable passes through unchanged.
pub fn format_request_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.date().format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}
