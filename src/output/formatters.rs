//! Reusable formatting utilities for CLI output
//!
//! Formatting for follower counts and capture timestamps shared by the view
//! renderer and the output formats.

use chrono::{DateTime, Local};

/// Format a count with en-US thousands separators.
///
/// # Example output
/// `1,234,567`
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Format a capture time as a human-readable local date/time.
///
/// # Example output
/// `10/19/2026, 2:05:09 PM`
pub fn format_local_datetime(at: &DateTime<Local>) -> String {
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Label stamped on the results panel after a successful fetch
pub fn fetched_at_label(at: &DateTime<Local>) -> String {
    format!("Fetched at {}", format_local_datetime(at))
}
