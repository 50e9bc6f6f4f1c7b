// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::scan_jobs::ScanJobsUseCase;
use crate::config::settings::ListingSettings;
use crate::presentation::handlers::scan_handler;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由，扫描用例和列表配置需通过 `Extension` 层注入
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let scan_routes = Router::new().route("/v1/scans", post(scan_handler::create_scan));

    Router::new().merge(public_routes).merge(scan_routes)
}

/// 创建完整应用
///
/// # 参数
///
/// * `use_case` - 共享的扫描用例
/// * `listing` - 列表展示默认值
pub fn app(use_case: Arc<ScanJobsUseCase>, listing: ListingSettings) -> Router {
    routes().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(Extension(use_case))
            .layer(Extension(listing)),
    )
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
