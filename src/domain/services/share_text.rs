// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job::Job;

/// 生成便于分享的职位摘要
pub fn format_share_text(job: &Job) -> String {
    format!(
        "{}\nLast date: {}\nApply: {}",
        job.title.trim(),
        job.last_date.format("%-d %b %Y"),
        job.link
    )
}
