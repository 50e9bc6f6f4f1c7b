// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 页面文档模型
pub mod document;
/// 职位实体
pub mod job;
/// 扫描状态与结果
pub mod scan;
