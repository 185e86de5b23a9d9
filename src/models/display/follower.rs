//! Follower statistics display models

use serde::Serialize;
use tabled::Tabled;

use crate::view::ResultsPanel;

/// Follower statistics row for table output (counts already formatted).
#[derive(Debug, Clone, Tabled)]
pub struct FollowerStatsDisplay {
    #[tabled(rename = "ORGANIZATION")]
    pub organization: String,

    #[tabled(rename = "ORGANIC")]
    pub organic: String,

    #[tabled(rename = "PAID")]
    pub paid: String,

    #[tabled(rename = "TOTAL")]
    pub total: String,

    #[tabled(rename = "FETCHED AT")]
    pub fetched_at: String,
}

impl From<&ResultsPanel> for FollowerStatsDisplay {
    fn from(panel: &ResultsPanel) -> Self {
        Self {
            organization: panel.organization.clone(),
            organic: panel.organic.clone(),
            paid: panel.paid.clone(),
            total: panel.total.clone(),
            fetched_at: crate::output::formatters::format_local_datetime(&panel.fetched_at),
        }
    }
}

/// Follower statistics record for JSON output (raw counts).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowerStatsRecord {
    pub organization_urn: String,
    pub organic_follower_count: u64,
    pub paid_follower_count: u64,
    pub total_follower_count: u64,
    pub fetched_at: String,
}

impl From<&ResultsPanel> for FollowerStatsRecord {
    fn from(panel: &ResultsPanel) -> Self {
        Self {
            organization_urn: panel.organization.clone(),
            organic_follower_count: panel.counts.organic_follower_count,
            paid_follower_count: panel.counts.paid_follower_count,
            total_follower_count: panel.counts.total(),
            fetched_at: panel.fetched_at.to_rfc3339(),
        }
    }
}
