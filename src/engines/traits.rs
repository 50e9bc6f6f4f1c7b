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

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// 引擎错误类型
///
/// 流水线对所有抓取错误一视同仁，都视为页面不可用
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非成功状态码
    #[error("Unexpected HTTP status {0}")]
    HttpStatus(u16),
    /// 超时
    #[error("Timeout")]
    Timeout,
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 页面抓取特质
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 抓取页面并返回原始HTML
    async fn fetch_page(&self, url: &str) -> Result<String, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<F: PageFetcher + ?Sized> PageFetcher for Arc<F> {
    async fn fetch_page(&self, url: &str) -> Result<String, EngineError> {
        (**self).fetch_page(url).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
