//! Follower statistics models

use serde::{Deserialize, Deserializer, Serialize};

/// Organic and paid follower counts for an organization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowerCounts {
    /// Followers gained without sponsored content
    #[serde(default, deserialize_with = "null_as_zero")]
    pub organic_follower_count: u64,

    /// Followers gained through sponsored content
    #[serde(default, deserialize_with = "null_as_zero")]
    pub paid_follower_count: u64,
}

impl FollowerCounts {
    #[allow(dead_code)]
    pub fn new(organic: u64, paid: u64) -> Self {
        Self {
            organic_follower_count: organic,
            paid_follower_count: paid,
        }
    }

    /// Organic plus paid followers
    pub fn total(&self) -> u64 {
        self.organic_follower_count
            .saturating_add(self.paid_follower_count)
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or_default())
}

/// One entry of the `elements` array returned by the statistics endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowerStatistics {
    /// Entity the statistics belong to (echoed back by LinkedIn)
    #[serde(default)]
    pub organizational_entity: Option<String>,

    #[serde(default)]
    pub follower_counts: Option<FollowerCounts>,
}

impl FollowerStatistics {
    /// Follower counts, treating a missing object as all zero
    pub fn counts(&self) -> FollowerCounts {
        self.follower_counts.unwrap_or_default()
    }
}

/// Envelope of the statistics endpoint response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatisticsResponse {
    #[serde(default)]
    pub elements: Option<Vec<FollowerStatistics>>,
}

impl StatisticsResponse {
    /// First statistics element, if any were returned
    pub fn into_first(self) -> Option<FollowerStatistics> {
        self.elements.and_then(|elements| elements.into_iter().next())
    }
}
