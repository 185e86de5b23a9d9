//! LinkedIn API client

use async_trait::async_trait;

use crate::error::Result;

pub mod linkedin;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use linkedin::LinkedInClient;
#[cfg(test)]
pub use mock::MockLinkedInClient;
pub use models::{FollowerCounts, FollowerStatistics, OrganizationUrn};

/// Organization follower statistics API
#[async_trait]
pub trait FollowerStatsApi: Send + Sync {
    /// Fetch the current follower statistics for an organization.
    ///
    /// Returns the first element of the response; an empty result set is an
    /// [`ApiError::NoData`](crate::error::ApiError::NoData) error.
    async fn fetch_follower_statistics(
        &self,
        access_token: &str,
        org_urn: &OrganizationUrn,
    ) -> Result<FollowerStatistics>;
}
