// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// 15/01/2025, 15-01-25, 15.1.2025
static DAY_MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{4}|\d{2})\b").unwrap());

// 2025-01-15, 2025/1/15
static YEAR_MONTH_DAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4})[/.\-](\d{1,2})[/.\-](\d{1,2})\b").unwrap());

// 15 January 2025, 15th of Jan 2025, January 15, 2025
static TEXTUAL_MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:\b(\d{1,2})(?:st|nd|rd|th)?\s+(?:of\s+)?)?\b([a-z]{3,})\.?,?\s*(?:(\d{1,2})(?:st|nd|rd|th)?,?\s+)?(\d{4})\b",
    )
    .unwrap()
});

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// 兜底解析时尝试的日期格式
const GENERIC_DATE_FORMATS: &[&str] = &[
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d-%b-%Y",
];

const GENERIC_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// 日期解析器
///
/// 把一段自由文本解析为日历日期。依次尝试：
///
/// 1. 数字 `日/月/年`（分隔符 `/`、`-`、`.`，两位年份视为 `2000+年`）
/// 2. 数字 `年-月-日`
/// 3. 英文月份名（前三个字母匹配，不区分大小写），日在月份前或后
/// 4. 通用日期格式兜底
///
/// 所有日期都通过年月日分量构造，无效日期（如2月31日）返回 `None` 而不是顺延。
pub struct DateParser;

impl DateParser {
    /// 解析日期文本
    ///
    /// # 参数
    ///
    /// * `text` - 日期文本片段
    ///
    /// # 返回值
    ///
    /// * `Some(NaiveDate)` - 第一个得到有效日期的解析结果
    /// * `None` - 没有任何格式匹配，或日期无效
    pub fn parse(text: &str) -> Option<NaiveDate> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        parse_day_month_year(text)
            .or_else(|| parse_year_month_day(text))
            .or_else(|| parse_textual_month(text))
            .or_else(|| parse_generic(text))
    }

    /// 解析可能缺失的日期文本
    pub fn parse_opt(text: Option<&str>) -> Option<NaiveDate> {
        text.and_then(Self::parse)
    }
}

fn parse_day_month_year(text: &str) -> Option<NaiveDate> {
    let caps = DAY_MONTH_YEAR.captures(text)?;
    let day = number(&caps, 1)?;
    let month = number(&caps, 2)?;
    let raw_year = caps.get(3)?.as_str();
    let mut year: i32 = raw_year.parse().ok()?;
    if raw_year.len() == 2 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_year_month_day(text: &str) -> Option<NaiveDate> {
    let caps = YEAR_MONTH_DAY.captures(text)?;
    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, number(&caps, 2)?, number(&caps, 3)?)
}

fn parse_textual_month(text: &str) -> Option<NaiveDate> {
    TEXTUAL_MONTH.captures_iter(text).find_map(|caps| {
        let month = month_number(caps.get(2)?.as_str())?;
        // Leading day wins when both sides carry one
        let day = number(&caps, 1).or_else(|| number(&caps, 3))?;
        let year: i32 = caps.get(4)?.as_str().parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    })
}

fn parse_generic(text: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    GENERIC_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            GENERIC_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
}

fn month_number(word: &str) -> Option<u32> {
    let prefix: String = word.chars().take(3).collect::<String>().to_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == prefix)
        .map(|idx| idx as u32 + 1)
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

#[cfg(test)]
#[path = "date_parser_test.rs"]
mod tests;
