//! Display model implementations for table and JSON output
//!
//! Display models transform the results panel into CLI-friendly formats
//! with appropriate column names and serialization.

mod follower;

pub use follower::{FollowerStatsDisplay, FollowerStatsRecord};
