// ABOUTME: Route module organization for the smoothie order server HTTP endpoints
// ABOUTME: HTML form routes, the JSON API, and health checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the smoothie order server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the render turn or the service layer.

/// JSON API routes
pub mod api;
/// Health check and readiness routes
pub mod health;
/// Server-rendered order form routes
pub mod order_form;

pub use api::ApiRoutes;
pub use health::HealthRoutes;
pub use order_form::OrderFormRoutes;
