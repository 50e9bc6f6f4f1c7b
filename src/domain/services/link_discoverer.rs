// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::document::Document;
use crate::domain::policy::{LinkPolicy, PolicyError};
use crate::domain::services::title_extractor::compile_selector;
use crate::utils::url_utils::{normalize_link, same_origin};
use scraper::{ElementRef, Selector};
use std::collections::HashSet;
use tracing::{debug, warn};
use url::Url;

/// 链接发现器
///
/// 从种子页面的结构容器中收集同源、疑似职位详情页的链接
pub struct LinkDiscoverer {
    containers: Vec<Selector>,
    anchor: Selector,
    keywords: Vec<String>,
}

impl LinkDiscoverer {
    /// 根据策略创建链接发现器
    ///
    /// # 返回值
    ///
    /// * `Ok(LinkDiscoverer)` - 发现器实例
    /// * `Err(PolicyError)` - 容器选择器无效或关键词为空
    pub fn new(policy: &LinkPolicy) -> Result<Self, PolicyError> {
        let containers = policy
            .container_selectors
            .iter()
            .map(|s| compile_selector(s))
            .collect::<Result<Vec<_>, _>>()?;
        if containers.is_empty() {
            return Err(PolicyError::Empty("container_selectors"));
        }

        let keywords: Vec<String> = policy
            .keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.is_empty() {
            return Err(PolicyError::Empty("link_keywords"));
        }

        Ok(Self {
            containers,
            anchor: compile_selector("a[href]")?,
            keywords,
        })
    }

    /// 从种子页面发现候选链接
    ///
    /// # 参数
    ///
    /// * `seed_doc` - 已解析的种子页面
    /// * `seed_url` - 种子页面URL，用于解析相对链接和同源判断
    ///
    /// # 返回值
    ///
    /// 去重后的候选链接集合，可能为空
    pub fn discover(&self, seed_doc: &Document, seed_url: &str) -> HashSet<String> {
        let base = match Url::parse(seed_url) {
            Ok(url) => url,
            Err(e) => {
                warn!("Cannot resolve links against seed {}: {}", seed_url, e);
                return HashSet::new();
            }
        };

        let mut links = HashSet::new();
        for container in &self.containers {
            for element in seed_doc.select(container) {
                for anchor in self.anchors_within(element) {
                    if let Some(link) = self.accept(&base, &anchor) {
                        links.insert(link);
                    }
                }
            }
        }

        debug!("Discovered {} candidate links on {}", links.len(), seed_url);
        links
    }

    fn anchors_within<'a>(&self, element: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        let mut anchors: Vec<ElementRef<'a>> = element.select(&self.anchor).collect();
        // The container may itself be the anchor, e.g. <a class="job" href=..>
        if element.value().name() == "a" && element.value().attr("href").is_some() {
            anchors.push(element);
        }
        anchors
    }

    fn accept(&self, base: &Url, anchor: &ElementRef<'_>) -> Option<String> {
        let href = anchor.value().attr("href")?;
        let Some(url) = normalize_link(base, href) else {
            debug!("Skipping unusable href '{}'", href);
            return None;
        };

        if !same_origin(base, &url) {
            return None;
        }

        let url_lower = url.as_str().to_lowercase();
        let text_lower = Document::element_text(anchor).to_lowercase();
        let job_like = self
            .keywords
            .iter()
            .any(|k| url_lower.contains(k.as_str()) || text_lower.contains(k.as_str()));

        job_like.then(|| url.to_string())
    }
}

impl Default for LinkDiscoverer {
    fn default() -> Self {
        Self::new(&LinkPolicy::default()).expect("default link policy is valid")
    }
}
