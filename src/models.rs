// ABOUTME: Core data models re-exported from smoothie-core
// ABOUTME: Fruit catalog entries, orders, and nutrition results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use smoothie_core::models::*;
