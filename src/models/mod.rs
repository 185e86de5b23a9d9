//! Display models for CLI output
//!
//! Converts the rendered results panel into table rows and JSON records.

pub mod display;

pub use display::{FollowerStatsDisplay, FollowerStatsRecord};
