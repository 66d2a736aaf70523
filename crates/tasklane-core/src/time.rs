//! Conversion between `HH:MM` strings and minutes since midnight.

use chrono::{NaiveTime, Timelike};

use crate::error::ValidationError;

/// Length of one timeline slot in minutes.
pub const SLOT_MINUTES: u32 = 15;

/// Parse `HH:MM` into minutes since midnight.
///
/// Lenient: a malformed component reads as 0. Use [`parse_time`] when the
/// input should be rejected instead.
pub fn time_to_minutes(time: &str) -> u32 {
    let mut parts = time.splitn(2, ':');
    let hours: u32 = parts.next().and_then(|h| h.trim().parse().ok()).unwrap_or(0);
    let minutes: u32 = parts.next().and_then(|m| m.trim().parse().ok()).unwrap_or(0);
    hours.saturating_mul(60).saturating_add(minutes)
}

/// Render minutes since midnight as zero-padded `HH:MM`.
///
/// Values past midnight are not wrapped: 1500 renders as `"25:00"`.
pub fn minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Strictly parse a canonical `HH:MM` string.
///
/// # Errors
/// Returns [`ValidationError::InvalidTimeFormat`] unless the value is exactly
/// two-digit hours and minutes naming a valid time of day.
pub fn parse_time(value: &str) -> Result<u32, ValidationError> {
    let invalid = || ValidationError::InvalidTimeFormat {
        value: value.to_string(),
    };

    if value.len() != 5 {
        return Err(invalid());
    }

    let time = NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| invalid())?;
    Ok(time.hour() * 60 + time.minute())
}

/// Add a minute offset to an `HH:MM` string.
pub fn add_minutes(time: &str, minutes: u32) -> String {
    minutes_to_time(time_to_minutes(time).saturating_add(minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_time_to_minutes() {
        assert_eq!(time_to_minutes("00:00"), 0);
        assert_eq!(time_to_minutes("09:00"), 540);
        assert_eq!(time_to_minutes("12:45"), 765);
        assert_eq!(time_to_minutes("23:59"), 1439);
    }

    #[test]
    fn test_converts_minutes_to_time() {
        assert_eq!(minutes_to_time(0), "00:00");
        assert_eq!(minutes_to_time(545), "09:05");
        assert_eq!(minutes_to_time(1439), "23:59");
    }

    #[test]
    fn test_does_not_wrap_past_midnight() {
        assert_eq!(minutes_to_time(1440), "24:00");
        assert_eq!(minutes_to_time(1500), "25:00");
    }

    #[test]
    fn test_malformed_input_is_lenient() {
        assert_eq!(time_to_minutes("garbage"), 0);
        assert_eq!(time_to_minutes("10:xx"), 600);
        assert_eq!(time_to_minutes(""), 0);
    }

    #[test]
    fn test_huge_hours_saturate() {
        assert_eq!(time_to_minutes("99999999:00"), u32::MAX);
        assert_eq!(time_to_minutes("71582788:00"), u32::MAX - 15);
        assert_eq!(time_to_minutes("71582788:59"), u32::MAX);
    }

    #[test]
    fn test_strict_parse_accepts_canonical_times() {
        assert_eq!(parse_time("09:30"), Ok(570));
        assert_eq!(parse_time("00:00"), Ok(0));
    }

    #[test]
    fn test_strict_parse_rejects_malformed_times() {
        for bad in ["9:30", "24:00", "12:60", "ab:cd", "12-30", ""] {
            assert_eq!(
                parse_time(bad),
                Err(ValidationError::InvalidTimeFormat {
                    value: bad.to_string()
                }),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_add_minutes_offsets_time() {
        assert_eq!(add_minutes("09:45", 30), "10:15");
    }
}
