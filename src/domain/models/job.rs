// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 日历日期
///
/// 仅包含年月日，不带时区和时间，保证比较和排序的精确性
pub type CalendarDate = NaiveDate;

/// 职位实体
///
/// 一次成功提取后创建，之后不再修改。`link` 是唯一标识。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// 职位标题
    pub title: String,
    /// 职位详情页链接
    pub link: String,
    /// 申请截止日期
    pub last_date: CalendarDate,
}

impl Job {
    /// 创建新的职位实例
    pub fn new(title: impl Into<String>, link: impl Into<String>, last_date: CalendarDate) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            last_date,
        }
    }
}

/// 按链接去重，保留首次出现的职位
pub fn dedup_by_link(jobs: Vec<Job>) -> Vec<Job> {
    let mut seen = HashSet::new();
    jobs.into_iter()
        .filter(|job| seen.insert(job.link.clone()))
        .collect()
}
