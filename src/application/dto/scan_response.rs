// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::{
    models::{
        job::{CalendarDate, Job},
        scan::ScanReport,
    },
    services::{job_listing::Page, share_text::format_share_text},
};
use serde::{Deserialize, Serialize};

/// 扫描响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct ScanResponseDto {
    /// 请求处理是否成功
    pub success: bool,
    /// 过滤后的职位总数
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub jobs: Vec<JobDto>,
    pub stats: ScanStatsDto,
}

/// 单个职位
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    pub title: String,
    pub link: String,
    pub last_date: CalendarDate,
    /// 可直接分享的文本
    pub share_text: String,
}

/// 扫描统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanStatsDto {
    pub candidates: usize,
    pub fetched: usize,
    pub failed: usize,
    pub rejected: usize,
}

impl From<Job> for JobDto {
    fn from(job: Job) -> Self {
        let share_text = format_share_text(&job);
        Self {
            title: job.title,
            link: job.link,
            last_date: job.last_date,
            share_text,
        }
    }
}

impl From<&ScanReport> for ScanStatsDto {
    fn from(report: &ScanReport) -> Self {
        Self {
            candidates: report.candidates,
            fetched: report.fetched,
            failed: report.failed,
            rejected: report.rejected,
        }
    }
}

impl ScanResponseDto {
    pub fn new(page: Page<Job>, stats: ScanStatsDto) -> Self {
        Self {
            success: true,
            total: page.total,
            page: page.page,
            total_pages: page.total_pages,
            jobs: page.items.into_iter().map(JobDto::from).collect(),
            stats,
        }
    }
}
