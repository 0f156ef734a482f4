// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Limits, defaults, table names, and user-facing messages for the order form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single flat list.

/// Form and lookup limits
pub mod limits {
    /// Maximum number of ingredients a single smoothie may contain
    pub const MAX_INGREDIENTS: usize = 5;

    /// Maximum characters of a raw nutrition response body quoted in a warning
    pub const NUTRITION_EXCERPT_CHARS: usize = 120;
}

/// Default configuration values
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8081;

    /// Default bind address
    pub const HTTP_HOST: &str = "0.0.0.0";

    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/smoothies.db";

    /// Default timeout for a single database operation
    pub const DATABASE_TIMEOUT_SECS: u64 = 10;

    /// Default nutrition service base URL
    pub const NUTRITION_BASE_URL: &str = "https://my.smoothiefroot.com";

    /// Default request timeout for nutrition lookups
    pub const NUTRITION_TIMEOUT_SECS: u64 = 10;

    /// Default connect timeout for nutrition lookups
    pub const NUTRITION_CONNECT_TIMEOUT_SECS: u64 = 5;

    /// Upper bound on a whole render turn (up to five serial lookups plus one insert)
    pub const REQUEST_TIMEOUT_SECS: u64 = 90;

    /// Delimiter used to join selected fruits into the stored ingredients string
    pub const INGREDIENTS_DELIMITER: &str = ", ";
}

/// Database table names
pub mod tables {
    /// Catalog of selectable fruits
    pub const FRUIT_OPTIONS: &str = "fruit_options";

    /// Append-only smoothie orders
    pub const ORDERS: &str = "orders";
}

/// Service identity used in structured logs
pub mod service_names {
    /// HTTP server service name
    pub const SMOOTHIE_ORDER_SERVER: &str = "smoothie-order-server";
}

/// Text shown on the order form
pub mod messages {
    /// Page title
    pub const PAGE_TITLE: &str = "Customize Your Smoothie!";

    /// Intro line under the title
    pub const PAGE_INTRO: &str = "Choose the fruits you want in your custom Smoothie!";

    /// Label of the name input
    pub const NAME_LABEL: &str = "Name on Smoothie:";

    /// Prefix of the name echo line
    pub const NAME_ECHO: &str = "The name on your Smoothie will be:";

    /// Label of the ingredient multi-select
    pub const INGREDIENTS_LABEL: &str = "Choose up to 5 ingredients:";

    /// Label of the submit button
    pub const SUBMIT_LABEL: &str = "Submit Order";

    /// Label of the button that re-renders the form without ordering
    pub const PREVIEW_LABEL: &str = "Show Nutrition";

    /// Prompt shown while nothing is selected
    pub const SELECT_PROMPT: &str = "Select one or more fruits to see their nutrition information.";

    /// Title of the pending orders page
    pub const PENDING_TITLE: &str = "Pending Smoothie Orders";

    /// Shown when every order has been filled
    pub const NO_PENDING_ORDERS: &str = "Great work! There are no pending orders right now.";
}
