// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::{CalendarDate, Job};
use chrono::Months;
use serde::{Deserialize, Serialize};

/// 截止日期过滤策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DeadlineFilter {
    /// 不过滤
    #[default]
    All,
    /// 精确匹配目标日期，没有则取目标日期之前最近的日期
    OnOrNearestBefore(CalendarDate),
    /// 截止日期在未来N个月以内
    WithinMonths(u32),
}

impl DeadlineFilter {
    /// 应用过滤策略
    ///
    /// # 参数
    ///
    /// * `jobs` - 职位列表
    /// * `today` - 计算时间范围的基准日期
    pub fn apply(&self, jobs: Vec<Job>, today: CalendarDate) -> Vec<Job> {
        match self {
            DeadlineFilter::All => jobs,
            DeadlineFilter::OnOrNearestBefore(target) => filter_by_target(jobs, Some(*target)),
            DeadlineFilter::WithinMonths(months) => filter_within_horizon(jobs, *months, today),
        }
    }
}

/// 按目标日期过滤
///
/// 1. 有截止日期等于目标日期的职位时只返回这些职位
/// 2. 否则在不晚于目标日期的职位中取最大日期，返回所有该日期的职位
/// 3. 所有职位都晚于目标日期时返回空列表
pub fn filter_by_target(jobs: Vec<Job>, target: Option<CalendarDate>) -> Vec<Job> {
    let Some(target) = target else {
        return jobs;
    };

    if jobs.iter().any(|job| job.last_date == target) {
        return jobs.into_iter().filter(|job| job.last_date == target).collect();
    }

    let nearest = jobs
        .iter()
        .map(|job| job.last_date)
        .filter(|date| *date <= target)
        .max();

    match nearest {
        Some(max_date) => jobs
            .into_iter()
            .filter(|job| job.last_date == max_date)
            .collect(),
        None => Vec::new(),
    }
}

/// 只保留截止日期在 `today + months` 之内的职位
pub fn filter_within_horizon(jobs: Vec<Job>, months: u32, today: CalendarDate) -> Vec<Job> {
    let horizon = today
        .checked_add_months(Months::new(months))
        .unwrap_or(CalendarDate::MAX);
    jobs.into_iter()
        .filter(|job| job.last_date <= horizon)
        .collect()
}
