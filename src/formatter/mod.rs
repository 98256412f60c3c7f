pub mod hub;
pub mod repository;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use hub::*;
pub use repository::*;

/// Placeholder printed for values the backend did not provide
pub const NOT_AVAILABLE: &str = "N/A";

/// Width of the `=` banners framing report headers
pub const BANNER_WIDTH: usize = 60;

/// Human readable text block, ready for stdout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent(pub String);

impl TextContent {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TextContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Formats an integer with `,` thousands separators (`1234567` -> `1,234,567`)
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}

pub fn format_optional_count(value: Option<u64>) -> String {
    value.map(format_count).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Date portion (`YYYY-MM-DD`) of a UTC timestamp
pub fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

pub fn format_optional_date(dt: Option<DateTime<Utc>>) -> String {
    dt.map(format_date)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Comma joined values, or `placeholder` when there are none
pub fn join_or<S: AsRef<str>>(values: &[S], placeholder: &str) -> String {
    if values.is_empty() {
        placeholder.to_string()
    } else {
        values
            .iter()
            .map(|v| v.as_ref())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
