// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心提取逻辑，包括：
/// - 领域模型（models）：页面文档、职位和扫描状态
/// - 启发式策略（policy）：触发短语、关键词和选择器列表
/// - 服务（services）：日期解析、标题和截止日期提取、链接发现、过滤
///
/// 领域层不依赖网络或HTTP框架，全部是纯函数或同步计算。
pub mod models;
pub mod policy;
pub mod services;
