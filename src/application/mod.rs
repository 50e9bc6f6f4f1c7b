// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含扫描用例、视图状态和数据传输对象，
/// 将业务流程与抓取引擎和HTTP层分离
pub mod dto;
pub mod state;
pub mod use_cases;
