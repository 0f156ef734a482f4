// ABOUTME: Timeout utilities for route handlers to prevent hanging database operations
// ABOUTME: Wraps a store call so a stalled SQLite lock surfaces as an error instead of a hung request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

/// Execute a database operation, failing if it takes longer than `limit`
///
/// # Errors
///
/// Returns an error if the operation times out or the operation itself fails
pub async fn with_database_timeout<F, T, E>(limit: Duration, operation: F) -> AppResult<T>
where
    F: Future<Output = Result<T, E>>,
    E: Into<AppError>,
{
    (timeout(limit, operation).await).map_or_else(
        |_| {
            Err(AppError::database(format!(
                "Database operation timed out after {}s",
                limit.as_secs()
            )))
        },
        |result| result.map_err(Into::into),
    )
}
