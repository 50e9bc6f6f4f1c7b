// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod date_parser_test;
pub mod deadline_filter_test;
pub mod extraction_test;
