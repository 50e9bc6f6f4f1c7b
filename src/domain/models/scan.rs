// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::Job;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 扫描阶段状态
///
/// 每个流水线阶段都会发出一个状态，供调用方展示进度。
/// 状态转换遵循以下流程：
/// FetchingSeed → DiscoveringLinks → FetchingCandidates → Extracting → Completed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum ScanStatus {
    /// 正在抓取种子页面
    FetchingSeed { url: String },
    /// 正在发现候选链接
    DiscoveringLinks,
    /// 正在并发抓取候选链接
    FetchingCandidates { total: usize },
    /// 正在提取标题和截止日期
    Extracting { fetched: usize, failed: usize },
    /// 扫描完成
    Completed { jobs: usize },
    /// 扫描失败
    Failed { reason: String },
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScanStatus::FetchingSeed { url } => write!(f, "Fetching main page {}", url),
            ScanStatus::DiscoveringLinks => write!(f, "Looking for job links"),
            ScanStatus::FetchingCandidates { total } => {
                write!(f, "Fetching {} candidate pages", total)
            }
            ScanStatus::Extracting { fetched, failed } => write!(
                f,
                "Extracting deadlines from {} pages ({} unavailable)",
                fetched, failed
            ),
            ScanStatus::Completed { jobs } => write!(f, "Found {} open positions", jobs),
            ScanStatus::Failed { reason } => write!(f, "Scan failed: {}", reason),
        }
    }
}

/// 扫描结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    /// 去重后的职位列表（未排序）
    pub jobs: Vec<Job>,
    /// 候选链接数
    pub candidates: usize,
    /// 成功抓取的页面数
    pub fetched: usize,
    /// 抓取失败的页面数
    pub failed: usize,
    /// 被提取规则拒绝的页面数
    pub rejected: usize,
}
