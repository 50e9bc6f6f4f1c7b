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

use crate::config::settings::FetchSettings;
use crate::engines::traits::{EngineError, PageFetcher};
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::debug;

/// 抓取模式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchMode {
    /// 直接请求目标URL
    Direct,
    /// 通过代理前缀转发，目标URL经过百分号编码后拼接在前缀之后
    Proxy { prefix: String },
}

/// 抓取引擎
///
/// 基于reqwest实现的HTTP抓取引擎，所有请求共享同一个客户端
pub struct ReqwestEngine {
    client: reqwest::Client,
    mode: FetchMode,
}

impl ReqwestEngine {
    /// 根据抓取配置创建引擎
    ///
    /// # 参数
    ///
    /// * `settings` - 抓取配置
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestEngine)` - 引擎实例
    /// * `Err(EngineError)` - 客户端构建失败或代理配置不完整
    pub fn new(settings: &FetchSettings) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            mode: settings.fetch_mode()?,
        })
    }

    /// 使用现有客户端创建引擎
    pub fn with_client(client: reqwest::Client, mode: FetchMode) -> Self {
        Self { client, mode }
    }

    /// 实际发出请求的URL
    pub fn request_url(&self, url: &str) -> String {
        match &self.mode {
            FetchMode::Direct => url.to_string(),
            FetchMode::Proxy { prefix } => format!("{}{}", prefix, urlencoding::encode(url)),
        }
    }
}

#[async_trait]
impl PageFetcher for ReqwestEngine {
    /// 执行HTTP抓取
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 响应内容
    /// * `Err(EngineError)` - 网络错误或非2xx状态码
    async fn fetch_page(&self, url: &str) -> Result<String, EngineError> {
        let target = self.request_url(url);
        let start = Instant::now();

        let response = self.client.get(&target).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::HttpStatus(status.as_u16()));
        }

        let content = response.text().await?;
        debug!(
            "Fetched {} ({} bytes) in {}ms",
            url,
            content.len(),
            start.elapsed().as_millis()
        );
        Ok(content)
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
