//! Timestamp normalization.
//!
//! Bulletins carry ISO-8601 timestamps with a local offset (type A), while
//! bulletin file names start with a compact UTC stamp (type B). Both are
//! rendered as `YYYY-MM-DD HH:MM:SS UTC`.

use crate::constants::timestamps::{
    CANONICAL_FORMAT, ENVELOPE_FORMAT, TYPE_A_FORMAT, TYPE_B_FORMAT,
};
use crate::error::{BulletinError, Result};
use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a type A timestamp (`2022-11-11T14:32:00+09:00`) into UTC
pub fn parse_type_a(input: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_str(input.trim(), TYPE_A_FORMAT)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| BulletinError::TimestampFormat {
            input: input.to_string(),
            expected: "YYYY-MM-DDTHH:MM:SS+HH:MM",
            source: Some(source),
        })
}

/// Parse a type B timestamp (`20221111053214`), already UTC
pub fn parse_type_b(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();
    // chrono accepts single-digit fields, so width is checked up front
    if trimmed.len() != 14 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BulletinError::TimestampFormat {
            input: input.to_string(),
            expected: "YYYYMMDDHHMMSS",
            source: None,
        });
    }
    NaiveDateTime::parse_from_str(trimmed, TYPE_B_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| BulletinError::TimestampFormat {
            input: input.to_string(),
            expected: "YYYYMMDDHHMMSS",
            source: Some(source),
        })
}

/// Render a UTC timestamp in canonical form
pub fn format_canonical(dt: &DateTime<Utc>) -> String {
    dt.format(CANONICAL_FORMAT).to_string()
}

/// Type A text to canonical text
pub fn convert_type_a(input: &str) -> Result<String> {
    parse_type_a(input).map(|dt| format_canonical(&dt))
}

/// Type B text to canonical text
pub fn convert_type_b(input: &str) -> Result<String> {
    parse_type_b(input).map(|dt| format_canonical(&dt))
}

/// Wall-clock stamp with microseconds, used for envelope bookkeeping fields
pub fn format_envelope(dt: &DateTime<Utc>) -> String {
    dt.format(ENVELOPE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_type_a_converts_offset_to_utc() {
        assert_eq!(
            convert_type_a("2022-11-11T14:32:00+09:00").unwrap(),
            "2022-11-11 05:32:00 UTC"
        );
    }

    #[test]
    fn test_type_a_crosses_date_boundary() {
        assert_eq!(
            convert_type_a("2022-09-18T03:00:00+09:00").unwrap(),
            "2022-09-17 18:00:00 UTC"
        );
    }

    #[test]
    fn test_type_a_rejects_missing_offset() {
        let err = convert_type_a("2022-11-11T14:32:00").unwrap_err();
        assert!(matches!(err, BulletinError::TimestampFormat { .. }));
    }

    #[test]
    fn test_type_b_reformats() {
        assert_eq!(
            convert_type_b("20221111053214").unwrap(),
            "2022-11-11 05:32:14 UTC"
        );
    }

    #[test]
    fn test_type_b_rejects_garbage() {
        for input in ["2022111105321", "2022-11-11 05:32:14", "20221341053214", ""] {
            assert!(
                matches!(
                    convert_type_b(input),
                    Err(BulletinError::TimestampFormat { .. })
                ),
                "expected failure for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_envelope_format_has_microseconds() {
        let dt = Utc.with_ymd_and_hms(2022, 11, 11, 5, 32, 14).unwrap();
        assert_eq!(format_envelope(&dt), "2022-11-11 05:32:14.000000 UTC");
    }
}
