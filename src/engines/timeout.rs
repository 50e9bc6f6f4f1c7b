// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{EngineError, PageFetcher};
use async_trait::async_trait;
use std::time::Duration;

/// 超时包装器
///
/// 给任意抓取引擎叠加一个整体超时，超时后返回 `EngineError::Timeout`
pub struct TimeoutFetcher<F> {
    inner: F,
    timeout: Duration,
}

impl<F: PageFetcher> TimeoutFetcher<F> {
    pub fn new(inner: F, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl<F: PageFetcher> PageFetcher for TimeoutFetcher<F> {
    async fn fetch_page(&self, url: &str) -> Result<String, EngineError> {
        tokio::time::timeout(self.timeout, self.inner.fetch_page(url))
            .await
            .map_err(|_| EngineError::Timeout)?
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
