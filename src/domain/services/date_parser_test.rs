// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::*;
use chrono::Datelike;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_day_month_year_separators() {
    assert_eq!(DateParser::parse("15/01/2025"), Some(ymd(2025, 1, 15)));
    assert_eq!(DateParser::parse("15-01-2025"), Some(ymd(2025, 1, 15)));
    assert_eq!(DateParser::parse("15.1.2025"), Some(ymd(2025, 1, 15)));
    assert_eq!(DateParser::parse("5/3/25"), Some(ymd(2025, 3, 5)));
}

#[test]
fn test_iso_like_dates() {
    assert_eq!(DateParser::parse("2025-01-15"), Some(ymd(2025, 1, 15)));
    assert_eq!(DateParser::parse("2025/1/5"), Some(ymd(2025, 1, 5)));
}

#[test]
fn test_textual_month_forms() {
    assert_eq!(DateParser::parse("15 January 2025"), Some(ymd(2025, 1, 15)));
    assert_eq!(DateParser::parse("15th of Jan 2025"), Some(ymd(2025, 1, 15)));
    assert_eq!(DateParser::parse("January 15, 2025"), Some(ymd(2025, 1, 15)));
    assert_eq!(DateParser::parse("SEPT 3 2026"), Some(ymd(2026, 9, 3)));
    assert_eq!(
        DateParser::parse("is Monday, 2nd March 2026"),
        Some(ymd(2026, 3, 2))
    );
}

#[test]
fn test_textual_month_requires_a_day() {
    assert_eq!(DateParser::parse("March 2026"), None);
}

/// 每种分隔符和年份宽度下都能还原出原日期
const ROUND_TRIP_FORMATS: &[&str] = &[
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d/%m/%y",
    "%d-%m-%y",
    "%d.%m.%y",
    "%-d/%-m/%Y",
    "%-d.%-m.%y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y-%-m-%-d",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
];

#[test]
fn test_round_trip_for_explicit_formats() {
    // Spans several leap years, including the 2000 century leap day
    let days = ymd(2000, 1, 1)
        .iter_days()
        .take_while(|date| date.year() <= 2031);

    let mut checked = 0;
    for date in days {
        for fmt in ROUND_TRIP_FORMATS {
            let text = date.format(fmt).to_string();
            assert_eq!(DateParser::parse(&text), Some(date), "{} ({})", text, fmt);
            checked += 1;
        }
    }
    assert_eq!(checked, 11_688 * ROUND_TRIP_FORMATS.len());
}

#[test]
fn test_two_digit_years_cover_the_whole_century() {
    for year in 2000..=2099 {
        for (month, day) in [(1, 1), (2, 28), (12, 31)] {
            let date = ymd(year, month, day);
            for fmt in ["%d/%m/%y", "%d-%m-%y", "%d.%m.%y"] {
                let text = date.format(fmt).to_string();
                assert_eq!(DateParser::parse(&text), Some(date), "{}", text);
            }
        }
    }
}

#[test]
fn test_invalid_calendar_dates_do_not_roll_over() {
    assert_eq!(DateParser::parse("31/02/2025"), None);
    assert_eq!(DateParser::parse("31/04/2025"), None);
    assert_eq!(DateParser::parse("2025-02-30"), None);
    assert_eq!(DateParser::parse("29 February 2025"), None);
}

#[test]
fn test_empty_and_missing_input() {
    assert_eq!(DateParser::parse(""), None);
    assert_eq!(DateParser::parse("   "), None);
    assert_eq!(DateParser::parse_opt(None), None);
    assert_eq!(DateParser::parse("no date here"), None);
}

#[test]
fn test_generic_fallback() {
    assert_eq!(
        DateParser::parse("2025-03-04T10:30:00Z"),
        Some(ymd(2025, 3, 4))
    );
    assert_eq!(DateParser::parse("04-Mar-2025"), Some(ymd(2025, 3, 4)));
    // US order only reachable once day-first interpretation is invalid
    assert_eq!(DateParser::parse("12/31/2025"), Some(ymd(2025, 12, 31)));
}

#[test]
fn test_unknown_month_word_is_skipped() {
    assert_eq!(DateParser::parse("Foo 12 2025"), None);
}
