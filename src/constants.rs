// ABOUTME: Application constants re-exported from smoothie-core
// ABOUTME: Limits, defaults, table names, and form text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use smoothie_core::constants::*;
