// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 日期解析（date_parser）：把自由文本解析为日历日期
/// - 截止日期提取（deadline_extractor）：触发短语加相关性评分的两阶段判定
/// - 截止日期过滤（deadline_filter）：目标日期和时间范围过滤
/// - 职位列表（job_listing）：排序和分页
/// - 链接发现（link_discoverer）：从种子页面收集候选链接
/// - 相关性评分（relevance_scorer）：统计职位关键词
/// - 分享文本（share_text）：生成职位摘要
/// - 标题提取（title_extractor）：查找页面标题
pub mod date_parser;
pub mod deadline_extractor;
pub mod deadline_filter;
pub mod job_listing;
pub mod link_discoverer;
pub mod relevance_scorer;
pub mod share_text;
pub mod title_extractor;
