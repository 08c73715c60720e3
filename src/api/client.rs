//! Activity feed client
//!
//! Issues paged GraphQL queries against the rider web endpoint. The feed is
//! the backbone of a run: any HTTP or decode failure here is fatal and
//! propagates to abort the whole run, no retries.

use serde_json::json;
use ureq::Agent;

use crate::consts::{PAGE_LIMIT, USER_AGENT};
use crate::credentials::Credentials;
use crate::error::FeedError;

use super::types::{ActivitiesEnvelope, PageResult};

const ACTIVITIES_QUERY: &str = "\
query Activities($endTimeMs: Float, $limit: Int = 10, $nextPageToken: String, $startTimeMs: Float) {
  activities {
    past(
      endTimeMs: $endTimeMs
      limit: $limit
      nextPageToken: $nextPageToken
      orderTypes: [RIDES, TRAVEL]
      profileType: PERSONAL
      startTimeMs: $startTimeMs
    ) {
      activities {
        uuid
        subtitle
      }
      nextPageToken
    }
  }
}
";

/// Shared HTTP agent. Non-2xx statuses come back as responses, not errors,
/// so callers inspect the status code explicitly.
pub(crate) fn agent() -> Agent {
    Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

/// One page of past trip activity for a time window.
pub(crate) trait ActivityFeed {
    fn fetch_page(
        &self,
        next_page_token: &str,
        start_time_ms: i64,
        end_time_ms: i64,
    ) -> Result<PageResult, FeedError>;
}

pub(crate) struct FeedClient {
    agent: Agent,
    base_url: String,
    credentials: Credentials,
}

impl FeedClient {
    pub(crate) fn new(agent: Agent, base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            agent,
            base_url: base_url.into(),
            credentials,
        }
    }
}

impl ActivityFeed for FeedClient {
    fn fetch_page(
        &self,
        next_page_token: &str,
        start_time_ms: i64,
        end_time_ms: i64,
    ) -> Result<PageResult, FeedError> {
        let body = json!({
            "operationName": "Activities",
            "variables": {
                "limit": PAGE_LIMIT,
                "nextPageToken": next_page_token,
                "startTimeMs": start_time_ms,
                "endTimeMs": end_time_ms,
            },
            "query": ACTIVITIES_QUERY,
        });

        let url = format!("{}/graphql", self.base_url);
        let mut response = self
            .agent
            .post(url.as_str())
            .header("User-Agent", USER_AGENT)
            .header("Accept", "*/*")
            .header("content-type", "application/json")
            // The endpoint only checks the header is present.
            .header("x-csrf-token", "x")
            .header("Origin", self.base_url.as_str())
            .header("Cookie", self.credentials.cookie_header())
            .send_json(&body)?;

        let status = response.status();
        let text = response.body_mut().read_to_string()?;
        if !status.is_success() {
            return Err(FeedError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        let envelope: ActivitiesEnvelope = serde_json::from_str(&text)?;
        Ok(PageResult::from(envelope))
    }
}
