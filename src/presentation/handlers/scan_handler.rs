// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use validator::Validate;

use crate::{
    application::{
        dto::{
            scan_request::ScanRequestDto,
            scan_response::{ScanResponseDto, ScanStatsDto},
        },
        use_cases::scan_jobs::{LogProgress, ScanJobsUseCase, ScanSession},
    },
    config::settings::ListingSettings,
    domain::services::job_listing::{paginate, sort_by_deadline},
    presentation::errors::AppError,
};

/// 扫描职位列表页
///
/// 每个请求使用独立的扫描会话，并发请求之间互不影响。
/// 扫描完成后按请求中的过滤条件排序并分页返回结果
pub async fn create_scan(
    Extension(use_case): Extension<Arc<ScanJobsUseCase>>,
    Extension(listing): Extension<ListingSettings>,
    Json(payload): Json<ScanRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let session = ScanSession::new();
    let report = use_case.run(&payload.url, &session, &LogProgress).await?;
    let stats = ScanStatsDto::from(&report);

    let filter = payload.deadline_filter(listing.horizon_months);
    let mut jobs = filter.apply(report.jobs, use_case.today());
    sort_by_deadline(&mut jobs);
    let page = paginate(
        jobs,
        payload.page.unwrap_or(1),
        payload.per_page.unwrap_or(listing.per_page),
    );

    Ok((StatusCode::OK, Json(ScanResponseDto::new(page, stats))))
}
