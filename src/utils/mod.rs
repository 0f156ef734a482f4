// ABOUTME: Utility modules for common functionality across the application
// ABOUTME: Contains HTML escaping, the nutrition HTTP client builder, and database timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// HTML escaping for server-rendered pages
pub mod html;
/// HTTP client configuration and helpers
pub mod http_client;
/// Timeout wrappers for database operations
pub mod route_timeout;
