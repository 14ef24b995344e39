//! Wall-clock snapshot and its formatted fields
//!
//! All four fields come from a single reading. The week number follows the
//! strftime `%U` convention: weeks start on Sunday and days before the first
//! Sunday of the year belong to week 0.

use crate::ui::{self, emojis, Painter};
use chrono::{DateTime, Datelike, Local, Locale, TimeZone};
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

pub const DATE_FORMAT: &str = "%Y年%m月%d日 (%A)";
pub const TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timestamp {
    pub calendar_date: String,
    pub clock_time: String,
    pub week_number: u32,
    pub epoch_seconds: i64,
}

impl Timestamp {
    /// Read the local clock once
    pub fn now(locale: Locale) -> Self {
        Self::from_datetime(&Local::now(), locale)
    }

    pub fn from_datetime<Tz>(at: &DateTime<Tz>, locale: Locale) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            calendar_date: at.format_localized(DATE_FORMAT, locale).to_string(),
            clock_time: at.format(TIME_FORMAT).to_string(),
            week_number: sunday_week_of_year(at),
            epoch_seconds: at.timestamp(),
        }
    }
}

/// Week of the year counting from the first Sunday (0..=53)
pub fn sunday_week_of_year<D: Datelike>(date: &D) -> u32 {
    (date.ordinal0() + 7 - date.weekday().num_days_from_sunday()) / 7
}

/// Write the date and time section
pub fn render_timestamp<W: Write>(
    out: &mut W,
    timestamp: &Timestamp,
    painter: &Painter,
) -> std::io::Result<()> {
    ui::write_section(out, painter, emojis::TIME, "Date & Time Information")?;
    ui::write_item(out, painter, "Date", &timestamp.calendar_date, false)?;
    ui::write_item(out, painter, "Time", &timestamp.clock_time, false)?;
    ui::write_item(
        out,
        painter,
        "Week",
        &format!("{:02}週目", timestamp.week_number),
        false,
    )?;
    ui::write_item(
        out,
        painter,
        "Unix Timestamp",
        &timestamp.epoch_seconds.to_string(),
        true,
    )?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn week(y: i32, m: u32, d: u32) -> u32 {
        sunday_week_of_year(&NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_week_zero_before_first_sunday() {
        // 2024-01-01 is a Monday, 2021-01-02 a Saturday
        assert_eq!(week(2024, 1, 1), 0);
        assert_eq!(week(2021, 1, 2), 0);
    }

    #[test]
    fn test_week_starts_on_sunday() {
        // 2023-01-01 is a Sunday
        assert_eq!(week(2023, 1, 1), 1);
        assert_eq!(week(2024, 1, 6), 0);
        assert_eq!(week(2024, 1, 7), 1);
    }

    #[test]
    fn test_week_matches_strftime_u() {
        for (y, m, d) in [
            (2024, 5, 14),
            (2024, 12, 31),
            (2026, 10, 18),
            (2020, 2, 29),
            (2028, 12, 31),
        ] {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            let expected: u32 = date.format("%U").to_string().parse().unwrap();
            assert_eq!(sunday_week_of_year(&date), expected, "{}", date);
        }
        assert_eq!(week(2024, 12, 31), 52);
        // 2028 starts on a Saturday and is a leap year; Sunday the 31st is week 53
        assert_eq!(week(2028, 12, 31), 53);
    }

    #[test]
    fn test_from_datetime_fields() {
        let at = Utc.with_ymd_and_hms(2024, 5, 14, 9, 30, 5).unwrap();
        let ts = Timestamp::from_datetime(&at, Locale::en_US);
        assert_eq!(ts.calendar_date, "2024年05月14日 (Tuesday)");
        assert_eq!(ts.clock_time, "09:30:05");
        assert_eq!(ts.week_number, 19);
        assert_eq!(ts.epoch_seconds, 1_715_679_005);
    }

    #[test]
    fn test_localized_weekday() {
        let at = Utc.with_ymd_and_hms(2024, 5, 14, 21, 0, 0).unwrap();
        let ts = Timestamp::from_datetime(&at, Locale::ja_JP);
        assert_eq!(ts.calendar_date, "2024年05月14日 (火曜日)");
        assert_eq!(ts.clock_time, "21:00:00");
    }

    #[test]
    fn test_render_timestamp_pads_week() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let ts = Timestamp::from_datetime(&at, Locale::en_US);
        let mut buf = Vec::new();
        render_timestamp(&mut buf, &ts, &Painter::default()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "🕐 Date & Time Information:\n\
             \x20 ├─ Date: 2024年01月01日 (Monday)\n\
             \x20 ├─ Time: 00:00:00\n\
             \x20 ├─ Week: 00週目\n\
             \x20 └─ Unix Timestamp: 1704067200\n\n"
        );
    }

    #[test]
    fn test_now_is_current() {
        let before = Utc::now().timestamp();
        let ts = Timestamp::now(Locale::en_US);
        let after = Utc::now().timestamp();
        assert!(ts.epoch_seconds >= before && ts.epoch_seconds <= after);
    }
}
