//! Store timestamps. `timestamptz` columns arrive as RFC 3339; columns
//! declared without a time zone arrive bare and are taken as UTC.

use chrono::{DateTime, NaiveDateTime, ParseError, Utc};
use serde::{de, Deserialize, Deserializer};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub fn parse(raw: &str) -> Result<DateTime<Utc>, ParseError> {
    let err = match DateTime::parse_from_rfc3339(raw) {
        Ok(t) => return Ok(t.with_timezone(&Utc)),
        Err(e) => e,
    };
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|t| t.and_utc())
        .ok_or(err)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(|e| de::Error::custom(format!("invalid timestamp {raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn offsets_are_normalized_to_utc() {
        let t = parse("2025-01-10T17:30:00+05:30").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap());
        assert_eq!(parse("2025-01-10T12:00:00Z").unwrap(), t);
    }

    #[test]
    fn bare_timestamps_are_utc() {
        let base = Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap();
        assert_eq!(parse("2025-01-10T12:00:00").unwrap(), base);
        assert_eq!(parse("2025-01-10 12:00:00").unwrap(), base);
        assert_eq!(
            parse("2025-01-10T12:00:00.123456").unwrap(),
            base + chrono::Duration::microseconds(123_456)
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse("yesterday").is_err());
        assert!(parse("2025-01-10").is_err());
    }
}
