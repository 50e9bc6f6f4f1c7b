// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::Job;
use serde::Serialize;

/// 分页结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// 当前页的条目
    pub items: Vec<T>,
    /// 当前页码（从1开始）
    pub page: usize,
    /// 每页条数
    pub per_page: usize,
    /// 总条数
    pub total: usize,
    /// 总页数，至少为1
    pub total_pages: usize,
}

/// 按截止日期升序排序，日期相同时按标题、链接排序
pub fn sort_by_deadline(jobs: &mut [Job]) {
    jobs.sort_by(|a, b| {
        a.last_date
            .cmp(&b.last_date)
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.link.cmp(&b.link))
    });
}

/// 分页
///
/// 页码从1开始，0按1处理；超出范围的页码返回空列表
pub fn paginate(jobs: Vec<Job>, page: usize, per_page: usize) -> Page<Job> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total = jobs.len();
    let total_pages = total.div_ceil(per_page).max(1);

    let items = jobs
        .into_iter()
        .skip((page - 1).saturating_mul(per_page))
        .take(per_page)
        .collect();

    Page {
        items,
        page,
        per_page,
        total,
        total_pages,
    }
}
