// ABOUTME: HTML escaping utilities to prevent XSS in server-rendered templates
// ABOUTME: Separate helpers for text nodes and double-quoted attribute values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Escape a string for insertion between HTML tags
#[must_use]
pub fn escape_html_text(input: &str) -> String {
    html_escape::encode_text(input).into_owned()
}

/// Escape a string for safe insertion into a double-quoted attribute like `value="..."`
#[must_use]
pub fn escape_html_attribute(input: &str) -> String {
    html_escape::encode_double_quoted_attribute(input).into_owned()
}
