// ABOUTME: Render turn for the order form: page model construction and HTML output
// ABOUTME: One request runs one turn from catalog read through optional submission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// HTML rendering of the page model
pub mod html;
/// Page model and the render turn
pub mod page;

pub use html::{render_error_page, render_order_page, render_pending_orders};
pub use page::{render_turn, Banner, OrderPage, RenderStage};
