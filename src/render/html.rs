// ABOUTME: Server-side HTML rendering of the order form, pending orders, and error pages
// ABOUTME: Templates are embedded at compile time and filled in a single pass with escaped values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::page::{Banner, OrderPage};
use crate::constants::messages;
use crate::errors::{AppError, LookupWarning};
use crate::models::{NutritionResult, NutritionTable, OrderRecord};
use crate::utils::html::{escape_html_attribute, escape_html_text};
use std::fmt::Write;

/// Templates embedded at compile-time; no filesystem IO on the request path
const ORDER_FORM_TEMPLATE: &str = include_str!("../../templates/order_form.html");
const PENDING_ORDERS_TEMPLATE: &str = include_str!("../../templates/pending_orders.html");
const ERROR_PAGE_TEMPLATE: &str = include_str!("../../templates/error_page.html");

/// Render the order form for one turn
#[must_use]
pub fn render_order_page(page: &OrderPage) -> String {
    let banners = render_banners(page);
    let name_value = escape_html_attribute(&page.customer_name);
    let name_echo = format!(
        "{} {}",
        messages::NAME_ECHO,
        escape_html_text(&page.customer_name)
    );
    let options = render_options(page);
    let nutrition = render_nutrition(&page.nutrition);

    fill_template(
        ORDER_FORM_TEMPLATE,
        &[
            ("TITLE", messages::PAGE_TITLE),
            ("INTRO", messages::PAGE_INTRO),
            ("BANNERS", banners.as_str()),
            ("NAME_LABEL", messages::NAME_LABEL),
            ("NAME_VALUE", name_value.as_str()),
            ("NAME_ECHO", name_echo.as_str()),
            ("INGREDIENTS_LABEL", messages::INGREDIENTS_LABEL),
            ("OPTIONS", options.as_str()),
            ("PREVIEW_LABEL", messages::PREVIEW_LABEL),
            ("SUBMIT_LABEL", messages::SUBMIT_LABEL),
            ("NUTRITION", nutrition.as_str()),
        ],
    )
}

/// Render the read-only list of unfilled orders
#[must_use]
pub fn render_pending_orders(orders: &[OrderRecord]) -> String {
    let content = if orders.is_empty() {
        format!(
            r#"<div class="banner success">{}</div>"#,
            messages::NO_PENDING_ORDERS
        )
    } else {
        let mut rows = String::new();
        for order in orders {
            let _ = write!(
                rows,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                order.order_uid,
                escape_html_text(&order.name_on_order),
                escape_html_text(&order.ingredients),
                order.order_ts.format("%Y-%m-%d %H:%M:%S"),
            );
        }
        format!(
            "<table><thead><tr><th>Order</th><th>Name</th><th>Ingredients</th><th>Ordered at (UTC)</th></tr></thead><tbody>{rows}</tbody></table>"
        )
    };

    fill_template(
        PENDING_ORDERS_TEMPLATE,
        &[("TITLE", messages::PENDING_TITLE), ("CONTENT", content.as_str())],
    )
}

/// Render a page-level failure such as an unavailable catalog
#[must_use]
pub fn render_error_page(error: &AppError) -> String {
    let message = escape_html_text(&error.message);
    fill_template(
        ERROR_PAGE_TEMPLATE,
        &[("TITLE", messages::PAGE_TITLE), ("MESSAGE", message.as_str())],
    )
}

fn render_banners(page: &OrderPage) -> String {
    let mut html = String::new();

    if let Some(banner) = &page.banner {
        let (class, text) = match banner {
            Banner::Info(text) => ("info", text),
            Banner::Success(text) => ("success", text),
            Banner::Warning(text) => ("warning", text),
            Banner::Error(text) => ("error", text),
        };
        let _ = write!(
            html,
            r#"<div class="banner {class}">{}</div>"#,
            escape_html_text(text)
        );
    }

    for warning in &page.warnings {
        html.push_str(&render_warning(warning));
    }

    html
}

fn render_warning(warning: &LookupWarning) -> String {
    let excerpt = warning.excerpt().map_or_else(String::new, |excerpt| {
        format!(
            r#"<span class="excerpt">{}</span>"#,
            escape_html_text(excerpt)
        )
    });
    format!(
        r#"<div class="banner warning">{}{excerpt}</div>"#,
        escape_html_text(&warning.to_string())
    )
}

fn render_options(page: &OrderPage) -> String {
    let mut html = String::new();
    for choice in &page.choices {
        let selected = if choice.selected { " selected" } else { "" };
        let _ = writeln!(
            html,
            r#"            <option value="{}"{selected}>{}</option>"#,
            escape_html_attribute(&choice.name),
            escape_html_text(&choice.name)
        );
    }
    html
}

fn render_nutrition(results: &[NutritionResult]) -> String {
    let mut html = String::new();
    for result in results {
        if let Some(table) = result.table() {
            let _ = write!(
                html,
                "<h2>{} Nutrition Information</h2>{}",
                escape_html_text(&result.fruit_name),
                render_table(&table)
            );
        }
    }
    html
}

fn render_table(table: &NutritionTable) -> String {
    let mut html = String::from("<table><thead><tr>");
    for column in &table.columns {
        let _ = write!(html, "<th>{}</th>", escape_html_text(column));
    }
    html.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            let _ = write!(html, "<td>{}</td>", escape_html_text(cell));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

/// Replace each `{{KEY}}` in one left-to-right pass
///
/// Substituted text is never rescanned, so values containing `{{...}}` stay literal.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            output.push_str(&rest[start..]);
            return output;
        };

        let key = &after_open[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => output.push_str(value),
            None => output.push_str(&rest[start..start + end + 4]),
        }
        rest = &after_open[end + 2..];
    }

    output.push_str(rest);
    output
}
