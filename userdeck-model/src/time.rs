//! Timestamp normalization for serialized `lastLogin` values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::{ModelError, Result};

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Display format for last-login cells, e.g. `Jan 05, 2024`.
pub const LAST_LOGIN_FORMAT: &str = "%b %d, %Y";

/// Parse a serialized timestamp into UTC.
///
/// Accepted shapes, tried in order:
/// - RFC 3339 with any offset (normalized to UTC)
/// - naive date-time without offset (taken as UTC)
/// - bare calendar date (midnight UTC)
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let value = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(ModelError::InvalidTimestamp {
        value: raw.to_string(),
    })
}

/// Parse an optional serialized timestamp. Missing and blank values stay unset.
pub fn parse_optional_timestamp(
    raw: Option<&str>,
) -> Result<Option<DateTime<Utc>>> {
    match raw {
        Some(value) if !value.trim().is_empty() => {
            parse_timestamp(value).map(Some)
        }
        _ => Ok(None),
    }
}

pub fn format_last_login(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(LAST_LOGIN_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_rfc3339_and_normalizes_offset() {
        let parsed = parse_timestamp("2024-03-10T12:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 10, 10, 30, 0).unwrap());

        let zulu = parse_timestamp("2024-03-10T12:30:00.250Z").unwrap();
        assert_eq!(zulu.timestamp_millis(), 1_710_073_800_250);
    }

    #[test]
    fn parses_naive_datetime_as_utc() {
        let parsed = parse_timestamp("2023-11-02T08:15:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 11, 2, 8, 15, 0).unwrap());

        let spaced = parse_timestamp("2023-11-02 08:15:00").unwrap();
        assert_eq!(spaced, parsed);
    }

    #[test]
    fn parses_bare_date_at_midnight() {
        let parsed = parse_timestamp("2024-01-05").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_timestamp("last tuesday").unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidTimestamp {
                value: "last tuesday".to_string()
            }
        );
    }

    #[test]
    fn optional_blank_values_stay_unset() {
        assert_eq!(parse_optional_timestamp(None).unwrap(), None);
        assert_eq!(parse_optional_timestamp(Some("")).unwrap(), None);
        assert_eq!(parse_optional_timestamp(Some("   ")).unwrap(), None);
        assert!(parse_optional_timestamp(Some("2024-01-05")).unwrap().is_some());
    }

    #[test]
    fn formats_like_short_month_day_year() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 5, 17, 45, 0).unwrap();
        assert_eq!(format_last_login(&ts), "Jan 05, 2024");
    }
}
