//! Mock LinkedIn API client for testing
//!
//! Provides a mock implementation of [`FollowerStatsApi`] for unit testing the
//! form without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::FollowerStatsApi;
use super::models::{FollowerCounts, FollowerStatistics, OrganizationUrn};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockLinkedInClient::new().with_counts(100, 25);
/// let stats = mock.fetch_follower_statistics("token", &urn).await?;
/// assert_eq!(stats.counts().total(), 125);
/// ```
#[derive(Clone, Default)]
pub struct MockLinkedInClient {
    /// Statistics returned on success; `None` behaves like an empty result set
    statistics: Arc<Mutex<Option<FollowerStatistics>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// A request the mock received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    pub access_token: String,
    pub org_urn: String,
}

impl MockLinkedInClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond with the given follower counts
    pub fn with_counts(self, organic: u64, paid: u64) -> Self {
        self.with_statistics(FollowerStatistics {
            organizational_entity: None,
            follower_counts: Some(FollowerCounts::new(organic, paid)),
        })
    }

    /// Respond with a raw statistics element
    pub fn with_statistics(self, statistics: FollowerStatistics) -> Self {
        *self.statistics.try_lock().expect("mock not shared yet") = Some(statistics);
        self
    }

    /// Fail the next call with the given error
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().expect("mock not shared yet") = Some(error);
        self
    }

    /// Number of calls made to the mock
    pub async fn call_count(&self) -> usize {
        self.captured_requests.lock().await.len()
    }

    /// Requests received so far
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }
}

#[async_trait]
impl FollowerStatsApi for MockLinkedInClient {
    async fn fetch_follower_statistics(
        &self,
        access_token: &str,
        org_urn: &OrganizationUrn,
    ) -> Result<FollowerStatistics> {
        self.captured_requests.lock().await.push(CapturedRequest {
            access_token: access_token.to_string(),
            org_urn: org_urn.to_string(),
        });

        if let Some(err) = self.error.lock().await.take() {
            return Err(err.into());
        }

        self.statistics
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::NoData.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::resolve_org_urn;
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_returns_counts_and_captures_request() {
        let mock = MockLinkedInClient::new().with_counts(3, 4);
        let urn = resolve_org_urn(None, Some("1")).unwrap();

        let stats = mock.fetch_follower_statistics("tok", &urn).await.unwrap();
        assert_eq!(stats.counts().total(), 7);

        let requests = mock.captured_requests().await;
        assert_eq!(
            requests,
            vec![CapturedRequest {
                access_token: "tok".to_string(),
                org_urn: "urn:li:organization:1".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed() {
        let mock = MockLinkedInClient::new()
            .with_counts(1, 1)
            .with_error(ApiError::Unauthorized);
        let urn = resolve_org_urn(None, Some("1")).unwrap();

        let err = mock.fetch_follower_statistics("tok", &urn).await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Unauthorized)));

        assert!(mock.fetch_follower_statistics("tok", &urn).await.is_ok());
        assert_eq!(mock.call_count().await, 2);
    }
}
