//! HTTP client for the Legistar Web API.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::{
    retry::{fetch_with_retry, RetryPolicy},
    types::{Event, EventItem, MatterHistory, Vote},
    Error,
};

const DEFAULT_BASE_URL: &str = "https://webapi.legistar.com/v1/";

/// Client for one Legistar tenant, identified by its client code
/// (e.g. `HarrisCountyTx`).
///
/// Holds a single `reqwest::Client`, so every fetch in a run shares one
/// connection pool; `reqwest::Client` is internally reference-counted and
/// safe to use from concurrent tasks. All endpoint methods retry under the
/// client's [`RetryPolicy`] and degrade to `None` on exhaustion.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    /// Base URL, normalized to end with `/`. Defaults to the production API.
    base_api_url: String,
    client_code: String,
    policy: RetryPolicy,
}

impl Client {
    /// Creates a client for `client_code` against the production Legistar API.
    pub fn new(client_code: &str) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, client_code)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, client_code: &str) -> Self {
        let mut base_api_url = base_url.to_string();
        if !base_api_url.ends_with('/') {
            base_api_url.push('/');
        }
        Self {
            http: reqwest::Client::new(),
            base_api_url,
            client_code: client_code.to_string(),
            policy: RetryPolicy::default(),
        }
    }

    /// Replaces the default retry policy for all subsequent fetches.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The retry policy endpoint methods use unless overridden per call.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}{}", self.base_api_url, self.client_code, path).as_str()).map_err(
            |e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::RequestFailed
            },
        )
    }

    /// One GET attempt: 200 parses and returns, anything else is an [`Error`].
    async fn get<T>(&self, url: Url, timeout: Duration) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let resp = self
            .http
            .get(url)
            .timeout(timeout)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::debug!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::debug!(
                "Failed to parse resource: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::RequestFailed
        })
    }

    async fn get_retry<T>(&self, path: &str, policy: &RetryPolicy) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path).ok()?;
        fetch_with_retry(policy, url.as_str(), || {
            self.get::<T>(url.clone(), policy.timeout)
        })
        .await
    }

    /// Fetches the events scheduled on `date`, in API response order.
    pub async fn events_on(&self, date: NaiveDate) -> Option<Vec<Event>> {
        self.events_on_with_policy(date, &self.policy).await
    }

    /// [`Self::events_on`] with a per-call retry policy.
    pub async fn events_on_with_policy(
        &self,
        date: NaiveDate,
        policy: &RetryPolicy,
    ) -> Option<Vec<Event>> {
        // The OData filter is sent pre-encoded: `+` for spaces and `%27` for
        // the datetime quotes, exactly as the API expects.
        let path = format!(
            "/Events?$filter=EventDate+eq+datetime%27{}%27",
            date.format("%Y-%m-%d")
        );
        self.get_retry(&path, policy).await
    }

    /// Fetches the agenda item list for an event, with agenda notes, minutes
    /// notes, and attachments embedded inline.
    pub async fn event_items(&self, event_id: i64) -> Option<Vec<EventItem>> {
        self.event_items_with_policy(event_id, &self.policy).await
    }

    /// [`Self::event_items`] with a per-call retry policy.
    pub async fn event_items_with_policy(
        &self,
        event_id: i64,
        policy: &RetryPolicy,
    ) -> Option<Vec<EventItem>> {
        let path = format!(
            "/Events/{}/EventItems?AgendaNote=1&MinutesNote=1&Attachments=1",
            event_id
        );
        self.get_retry(&path, policy).await
    }

    /// Fetches the recorded votes for one agenda item.
    pub async fn event_item_votes(&self, event_item_id: i64) -> Option<Vec<Vote>> {
        self.event_item_votes_with_policy(event_item_id, &self.policy)
            .await
    }

    /// [`Self::event_item_votes`] with a per-call retry policy.
    pub async fn event_item_votes_with_policy(
        &self,
        event_item_id: i64,
        policy: &RetryPolicy,
    ) -> Option<Vec<Vote>> {
        self.get_retry(&format!("/EventItems/{}/Votes", event_item_id), policy)
            .await
    }

    /// Fetches the legislative history for one matter.
    pub async fn matter_histories(&self, matter_id: i64) -> Option<Vec<MatterHistory>> {
        self.matter_histories_with_policy(matter_id, &self.policy)
            .await
    }

    /// [`Self::matter_histories`] with a per-call retry policy.
    pub async fn matter_histories_with_policy(
        &self,
        matter_id: i64,
        policy: &RetryPolicy,
    ) -> Option<Vec<MatterHistory>> {
        self.get_retry(&format!("/Matters/{}/Histories", matter_id), policy)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
