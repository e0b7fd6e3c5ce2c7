use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Timestamp formats the API has been observed to emit, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
];

/// Lenient parse of an API timestamp string.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    // date-only payloads parse to midnight
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)
}

/// `"2024-01-15T06:00:00"` → `"2024-01-15"`
pub fn report_date(s: &str) -> Option<String> {
    parse_datetime(s).map(|dt| dt.format("%Y-%m-%d").to_string())
}

/// Truncate a timestamp or time-of-day label to `HH:MM`.
pub fn hour_label(s: &str) -> Option<String> {
    let s = s.trim();
    if let Some(dt) = parse_datetime(s) {
        return Some(dt.format("%H:%M").to_string());
    }
    for fmt in &["%H:%M:%S", "%H:%M"] {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            return Some(t.format("%H:%M").to_string());
        }
    }
    // last resort: plain truncation, as the labels are already "HH:MM:SS"-ish
    s.get(..5).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_variants() {
        assert_eq!(
            report_date("2024-01-15T06:00:00").as_deref(),
            Some("2024-01-15")
        );
        assert_eq!(
            report_date("2024-01-15 06:00:00.123").as_deref(),
            Some("2024-01-15")
        );
        assert_eq!(report_date("2024-01-15").as_deref(), Some("2024-01-15"));
        assert_eq!(report_date("yesterday"), None);
    }

    #[test]
    fn hour_labels_truncate_to_hh_mm() {
        assert_eq!(hour_label("2024-01-15T06:00:00").as_deref(), Some("06:00"));
        assert_eq!(hour_label("06:45:00").as_deref(), Some("06:45"));
        assert_eq!(hour_label("06:45").as_deref(), Some("06:45"));
        // unparseable labels fall back to truncation
        assert_eq!(hour_label("06:45 AM").as_deref(), Some("06:45"));
    }
}
