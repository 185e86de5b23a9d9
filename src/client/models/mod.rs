//! LinkedIn API data models
//!
//! Domain types for the organization follower statistics endpoint and the
//! organization identifiers it is queried with.

mod follower;
mod org;

pub use follower::{FollowerCounts, FollowerStatistics, StatisticsResponse};
pub use org::{ORG_URN_PREFIX, OrganizationUrn, resolve_org_urn};
