// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 扫描视图状态
//!
//! 状态不可变，所有变化都通过 [`reduce`] 由动作推导出新状态。
//! 每次扫描带有代数编号，旧代数的动作会被忽略。

use crate::domain::{
    models::{
        job::{CalendarDate, Job},
        scan::ScanStatus,
    },
    services::{
        deadline_filter::DeadlineFilter,
        job_listing::{paginate, sort_by_deadline, Page},
    },
};

/// 默认每页条数
pub const DEFAULT_PER_PAGE: usize = 20;

/// 扫描阶段
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanPhase {
    #[default]
    Idle,
    Loading(ScanStatus),
    Ready,
    Failed(String),
}

/// 扫描视图状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanState {
    /// 当前扫描代数，0 表示尚未开始
    pub generation: u64,
    pub phase: ScanPhase,
    /// 最近一次成功扫描的职位
    pub jobs: Vec<Job>,
    pub filter: DeadlineFilter,
    /// 当前页码（从1开始）
    pub page: usize,
    pub per_page: usize,
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

/// 状态动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanAction {
    /// 开始新一代扫描
    Started { generation: u64, url: String },
    Progress { generation: u64, status: ScanStatus },
    Succeeded { generation: u64, jobs: Vec<Job> },
    Failed { generation: u64, message: String },
    /// 修改过滤条件，页码回到第一页
    FilterChanged(DeadlineFilter),
    PageChanged(usize),
}

impl ScanState {
    pub fn new(per_page: usize) -> Self {
        Self {
            generation: 0,
            phase: ScanPhase::Idle,
            jobs: Vec::new(),
            filter: DeadlineFilter::All,
            page: 1,
            per_page: per_page.max(1),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ScanPhase::Loading(_))
    }

    /// 当前可见页
    ///
    /// 依次执行过滤、按截止日期排序和分页
    ///
    /// # 参数
    ///
    /// * `today` - 计算时间范围过滤的基准日期
    pub fn visible_page(&self, today: CalendarDate) -> Page<Job> {
        let mut jobs = self.filter.apply(self.jobs.clone(), today);
        sort_by_deadline(&mut jobs);
        paginate(jobs, self.page, self.per_page)
    }
}

/// 根据动作推导新状态
///
/// # 参数
///
/// * `state` - 当前状态
/// * `action` - 动作
///
/// # 返回值
///
/// 新状态；过期代数的动作返回原状态的副本
pub fn reduce(state: &ScanState, action: ScanAction) -> ScanState {
    match action {
        ScanAction::Started { generation, url } if generation > state.generation => ScanState {
            generation,
            phase: ScanPhase::Loading(ScanStatus::FetchingSeed { url }),
            jobs: Vec::new(),
            page: 1,
            ..state.clone()
        },
        ScanAction::Progress { generation, status } if generation == state.generation => {
            ScanState {
                phase: ScanPhase::Loading(status),
                ..state.clone()
            }
        }
        ScanAction::Succeeded { generation, jobs } if generation == state.generation => {
            ScanState {
                phase: ScanPhase::Ready,
                jobs,
                page: 1,
                ..state.clone()
            }
        }
        ScanAction::Failed {
            generation,
            message,
        } if generation == state.generation => ScanState {
            phase: ScanPhase::Failed(message),
            jobs: Vec::new(),
            ..state.clone()
        },
        ScanAction::FilterChanged(filter) => ScanState {
            filter,
            page: 1,
            ..state.clone()
        },
        ScanAction::PageChanged(page) => ScanState {
            page: page.max(1),
            ..state.clone()
        },
        // Stale generation
        _ => state.clone(),
    }
}
