//! LinkedIn REST API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};

use super::FollowerStatsApi;
use super::models::{FollowerStatistics, OrganizationUrn, StatisticsResponse};
use crate::error::{ApiError, Result};

/// LinkedIn API base URL
pub const API_BASE_URL: &str = "https://api.linkedin.com";

/// Organization follower statistics endpoint
const FOLLOWER_STATISTICS_PATH: &str = "/v2/organizationalEntityFollowerStatistics";

/// Rest.li protocol version sent with every request
const RESTLI_PROTOCOL_VERSION: &str = "2.0.0";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Maximum number of characters of an error body kept in error messages
const ERROR_SNIPPET_CHARS: usize = 160;

/// LinkedIn API client
pub struct LinkedInClient {
    http: HttpClient,
    base_url: String,
}

impl LinkedInClient {
    /// Create a client against the production LinkedIn API
    #[allow(dead_code)]
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_base_url(API_BASE_URL, timeout)
    }

    /// Create a client against a custom API root (mock servers, proxies)
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("lifollow/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the follower statistics endpoint
    pub fn statistics_url(&self) -> String {
        format!("{}{}", self.base_url, FOLLOWER_STATISTICS_PATH)
    }
}

/// First `ERROR_SNIPPET_CHARS` characters of a response body
fn snippet(body: &str) -> String {
    body.chars().take(ERROR_SNIPPET_CHARS).collect()
}

#[async_trait]
impl FollowerStatsApi for LinkedInClient {
    async fn fetch_follower_statistics(
        &self,
        access_token: &str,
        org_urn: &OrganizationUrn,
    ) -> Result<FollowerStatistics> {
        let url = self.statistics_url();
        log::debug!("GET {} for {}", url, org_urn);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", "organizationalEntity"),
                ("organizationalEntity", org_urn.as_str()),
            ])
            .bearer_auth(access_token)
            .header("X-Restli-Protocol-Version", RESTLI_PROTOCOL_VERSION)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        log::debug!("LinkedIn responded with {}", status);

        match status {
            StatusCode::UNAUTHORIZED => return Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => return Err(ApiError::Forbidden.into()),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_else(|e| {
                    log::debug!("Could not read {} response body: {}", status, e);
                    String::new()
                });
                return Err(ApiError::Request {
                    status: status.as_u16(),
                    snippet: snippet(&body),
                }
                .into());
            }
            _ => {}
        }

        let body = response.text().await.map_err(ApiError::from)?;
        let payload: StatisticsResponse = serde_json::from_str(&body).map_err(|e| {
            log::warn!("Undecodable statistics response: {}", snippet(&body));
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        let statistics = payload.into_first().ok_or(ApiError::NoData)?;

        if let Some(entity) = statistics.organizational_entity.as_deref() {
            if entity != org_urn.as_str() {
                log::warn!("Requested {} but LinkedIn returned {}", org_urn, entity);
            }
        }

        Ok(statistics)
    }
}
