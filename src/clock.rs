//! Live wall-clock panel source.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use std::fmt;

pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";
pub const DEFAULT_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Rendered clock strings for one display frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockDisplay {
    pub time: String,
    pub date: String,
}

/// Holds the last sampled wall-clock instant.
///
/// Each tick stores the true current time instead of adding a second, so a
/// late tick shows the right time and no drift builds up.
pub struct ClockSource {
    current: DateTime<Local>,
    time_format: String,
    date_format: String,
}

impl ClockSource {
    pub fn new(now: DateTime<Local>, time_format: &str, date_format: &str) -> Self {
        Self {
            current: now,
            time_format: time_format.to_string(),
            date_format: date_format.to_string(),
        }
    }

    pub fn tick(&mut self, now: DateTime<Local>) {
        self.current = now;
    }

    pub fn current(&self) -> DateTime<Local> {
        self.current
    }

    pub fn display(&self) -> ClockDisplay {
        format_with(&self.current, &self.time_format, &self.date_format)
    }
}

/// 24-hour `HH:MM:SS` plus a long date such as `Saturday, March 9, 2024`.
pub fn format<Tz: TimeZone>(instant: &DateTime<Tz>) -> ClockDisplay
where
    Tz::Offset: fmt::Display,
{
    format_with(instant, DEFAULT_TIME_FORMAT, DEFAULT_DATE_FORMAT)
}

pub fn format_with<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    time_format: &str,
    date_format: &str,
) -> ClockDisplay
where
    Tz::Offset: fmt::Display,
{
    ClockDisplay {
        time: instant.format(time_format).to_string(),
        date: instant.format(date_format).to_string(),
    }
}

/// Whether `fmt` is a strftime pattern chrono can render. Formatting with a
/// bad pattern panics, so config values are checked before use.
pub fn is_valid_format(fmt: &str) -> bool {
    !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_24_hour() {
        let t = Utc.with_ymd_and_hms(2024, 3, 9, 21, 7, 5).unwrap();
        assert_eq!(
            format(&t),
            ClockDisplay {
                time: "21:07:05".into(),
                date: "Saturday, March 9, 2024".into(),
            }
        );
    }

    #[test]
    fn test_format_midnight_pads() {
        let tz = FixedOffset::east_opt(5 * 3600).unwrap();
        let t = tz.with_ymd_and_hms(2026, 10, 15, 0, 0, 9).unwrap();
        let d = format(&t);
        assert_eq!(d.time, "00:00:09");
        assert_eq!(d.date, "Thursday, October 15, 2026");
    }

    #[test]
    fn test_tick_replaces_instant() {
        let first = Local.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let later = Local.with_ymd_and_hms(2024, 1, 1, 8, 0, 3).unwrap();
        let mut clock = ClockSource::new(first, DEFAULT_TIME_FORMAT, DEFAULT_DATE_FORMAT);
        assert_eq!(clock.display().time, "08:00:00");
        // A late tick jumps straight to the real time.
        clock.tick(later);
        assert_eq!(clock.current(), later);
        assert_eq!(clock.display().time, "08:00:03");
    }

    #[test]
    fn test_custom_formats() {
        let t = Utc.with_ymd_and_hms(2024, 3, 9, 21, 7, 5).unwrap();
        let d = format_with(&t, "%H:%M", "%Y-%m-%d");
        assert_eq!(d.time, "21:07");
        assert_eq!(d.date, "2024-03-09");
    }

    #[test]
    fn test_is_valid_format() {
        assert!(is_valid_format(DEFAULT_TIME_FORMAT));
        assert!(is_valid_format(DEFAULT_DATE_FORMAT));
        assert!(!is_valid_format("%Q"));
    }
}
