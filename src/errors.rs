// ABOUTME: Unified error handling re-exported from smoothie-core
// ABOUTME: AppError, ErrorCode, and the order form's domain errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use smoothie_core::errors::*;
