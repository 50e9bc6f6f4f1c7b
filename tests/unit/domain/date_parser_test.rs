// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use jobcrawlrs::domain::services::date_parser::DateParser;

#[test]
fn test_explicit_formats_agree() {
    let expected = NaiveDate::from_ymd_opt(2025, 1, 15);

    for text in ["15/01/2025", "15-01-2025", "2025-01-15", "2025/01/15", "15 January 2025", "15 Jan 2025"] {
        assert_eq!(DateParser::parse(text), expected, "{}", text);
    }
}

#[test]
fn test_impossible_and_blank_dates() {
    assert_eq!(DateParser::parse("31/02/2025"), None);
    assert_eq!(DateParser::parse(""), None);
    assert_eq!(DateParser::parse_opt(None), None);
}
