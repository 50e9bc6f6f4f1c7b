// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::{models::job::CalendarDate, services::deadline_filter::DeadlineFilter};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 扫描请求数据传输对象
///
/// `target_date` 与 `horizon_months` 只能二选一
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_filter_choice"))]
pub struct ScanRequestDto {
    /// 职位列表页URL
    #[validate(url)]
    pub url: String,
    /// 目标截止日期 (YYYY-MM-DD)
    pub target_date: Option<CalendarDate>,
    /// 只保留未来N个月内截止的职位
    #[validate(range(min = 1, max = 24))]
    pub horizon_months: Option<u32>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<usize>,
}

impl ScanRequestDto {
    /// 根据请求参数选择过滤策略
    ///
    /// # 参数
    ///
    /// * `default_horizon` - 请求未指定过滤条件时使用的默认时间窗口
    pub fn deadline_filter(&self, default_horizon: Option<u32>) -> DeadlineFilter {
        match (self.target_date, self.horizon_months.or(default_horizon)) {
            (Some(target), _) => DeadlineFilter::OnOrNearestBefore(target),
            (None, Some(months)) => DeadlineFilter::WithinMonths(months),
            (None, None) => DeadlineFilter::All,
        }
    }
}

fn validate_filter_choice(dto: &ScanRequestDto) -> Result<(), ValidationError> {
    if dto.target_date.is_some() && dto.horizon_months.is_some() {
        let mut err = ValidationError::new("exclusive_filters");
        err.message = Some("target_date and horizon_months cannot be combined".into());
        return Err(err);
    }
    Ok(())
}
