// ABOUTME: External API client modules (SmoothieFroot nutrition service)
// ABOUTME: Provides the nutrition provider trait, its reqwest client, and a recording mock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! This module contains clients for external APIs used by the smoothie order server.

pub mod nutrition_client;

// Re-export commonly used types
pub use nutrition_client::{
    MockNutritionProvider, MockReply, NutritionProvider, NutritionResponse, SmoothieFrootClient,
};
