// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 提供日志初始化和URL处理等通用功能
pub mod telemetry;
pub mod url_utils;
