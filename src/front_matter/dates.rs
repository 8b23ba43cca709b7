use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};

/// Date-time layouts without a UTC offset; `%.f` makes fractional seconds optional
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// The same layouts followed by a `+HH:MM` offset
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Parse an ISO-8601 style date or date-time literal.
///
/// A bare date means midnight. Offset-qualified values keep their wall-clock
/// time; the offset itself is dropped.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }

    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(value, format) {
            return Some(parsed.naive_local());
        }
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|parsed| parsed.naive_local())
}

/// Render a timestamp the way templates see it: `YYYY-MM-DD HH:MM:SS`,
/// with microseconds appended only when present.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    let micros = timestamp.nanosecond() / 1_000;
    if micros == 0 {
        timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        format!("{}.{:06}", timestamp.format("%Y-%m-%d %H:%M:%S"), micros)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, s).unwrap()
    }

    #[test]
    fn test_bare_date_is_midnight() {
        assert_eq!(parse_timestamp("2024-01-15"), Some(at(2024, 1, 15, 0, 0, 0)));
    }

    #[test]
    fn test_date_time_variants() {
        let expected = at(2024, 1, 15, 9, 30, 0);
        assert_eq!(parse_timestamp("2024-01-15T09:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15 09:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15T09:30"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15 09:30"), Some(expected));
    }

    #[test]
    fn test_fractional_seconds() {
        let parsed = parse_timestamp("2024-01-15T09:30:00.250000").unwrap();
        assert_eq!(parsed.nanosecond(), 250_000_000);
    }

    #[test]
    fn test_offset_keeps_wall_clock() {
        assert_eq!(
            parse_timestamp("2024-01-15T09:30:00+05:00"),
            Some(at(2024, 1, 15, 9, 30, 0))
        );
        assert_eq!(
            parse_timestamp("2024-01-15T09:30:00Z"),
            Some(at(2024, 1, 15, 9, 30, 0))
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2024-13-01"), None);
        assert_eq!(parse_timestamp("15/01/2024"), None);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(&at(2024, 1, 15, 0, 0, 0)), "2024-01-15 00:00:00");
        let parsed = parse_timestamp("2024-01-15 09:30:00.000042").unwrap();
        assert_eq!(format_timestamp(&parsed), "2024-01-15 09:30:00.000042");
    }
}
