//! Async REST client for the tracker.
//!
//! Two collaborators feed the reconciliation: issue search with the
//! changelog expanded, and the dev-status API that links commits to an
//! issue. Failures surface to the caller unchanged; there is no retry.

use std::time::Duration;

use reqwest::{Client, ClientBuilder, RequestBuilder, Response};
use serde::Deserialize;
use tracing::debug;
use trackline_core::{Issue, RepositoryCommits};

use crate::endpoint::Credentials;
use crate::error::{JiraError, Result};

/// Issue fields requested with each search.
const SEARCH_FIELDS: &str = "timeestimate,created";

/// Expansions requested with each search.
const SEARCH_EXPAND: &str = "changelog";

/// Issues fetched per search page.
const PAGE_SIZE: u32 = 50;

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One page of a search result.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    /// Offset of the first issue in this page.
    pub start_at: u32,

    /// Page size the tracker applied.
    pub max_results: u32,

    /// Total matching issues across all pages.
    pub total: u32,

    /// The issues of this page.
    pub issues: Vec<Issue>,
}

/// Commit-link envelope returned by the dev-status API.
#[derive(Debug, Deserialize)]
struct DetailResponse {
    #[serde(default)]
    detail: Vec<Detail>,
}

#[derive(Debug, Deserialize)]
struct Detail {
    #[serde(default)]
    repositories: Vec<RepositoryCommits>,
}

/// Client for the tracker's search and dev-status APIs.
#[derive(Debug, Clone)]
pub struct JiraClient {
    client: Client,
    endpoint: String,
    credentials: Option<Credentials>,
}

impl JiraClient {
    /// Create a client for `endpoint`, already scheme-resolved.
    ///
    /// # Errors
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, credentials: Option<Credentials>) -> Result<Self> {
        let client = ClientBuilder::new().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            credentials,
        })
    }

    /// Fetch one page of issues matching `jql`, changelog expanded.
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-success answer, or an
    /// undecodable body.
    pub async fn search(&self, jql: &str, start_at: u32) -> Result<SearchPage> {
        let url = format!("{}/rest/api/2/search", self.endpoint);
        debug!(jql = %jql, start_at, "Searching issues");

        let start_at = start_at.to_string();
        let max_results = PAGE_SIZE.to_string();
        let request = self.client.get(&url).query(&[
            ("jql", jql),
            ("fields", SEARCH_FIELDS),
            ("expand", SEARCH_EXPAND),
            ("startAt", start_at.as_str()),
            ("maxResults", max_results.as_str()),
        ]);

        let response = checked(self.authorized(request).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Fetch every issue matching `jql`, walking pages until the reported
    /// total is reached.
    ///
    /// # Errors
    /// Returns the first page failure; no partial result is produced.
    pub async fn search_all(&self, jql: &str) -> Result<Vec<Issue>> {
        let mut issues = Vec::new();
        let mut start_at = 0;
        loop {
            let page = self.search(jql, start_at).await?;
            if page.issues.is_empty() {
                break;
            }
            start_at += page.issues.len() as u32;
            let total = page.total;
            issues.extend(page.issues);
            if start_at >= total {
                break;
            }
        }
        debug!(count = issues.len(), "Search complete");
        Ok(issues)
    }

    /// Fetch the commits the tracker links to an issue, grouped by
    /// repository. An issue without development information yields an
    /// empty list.
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-success answer, or an
    /// undecodable body.
    pub async fn commits(&self, issue_id: &str) -> Result<Vec<RepositoryCommits>> {
        let url = format!("{}/rest/dev-status/1.0/issue/detail", self.endpoint);
        debug!(issue_id = %issue_id, "Fetching linked commits");

        let request = self.client.get(&url).query(&[
            ("issueId", issue_id),
            ("applicationType", "stash"),
            ("dataType", "repository"),
        ]);

        let response = checked(self.authorized(request).send().await?).await?;
        Ok(repositories(response.json().await?))
    }

    /// Apply basic auth when credentials are configured.
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some(credentials) => {
                request.basic_auth(&credentials.username, credentials.password.as_deref())
            }
            None => request,
        }
    }
}

/// Turn a non-success response into an API error carrying the body.
async fn checked(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(JiraError::Api { status, body })
}

/// Unwrap the commit-link envelope: the first detail block's repository
/// groups, or nothing when the issue has no development information.
fn repositories(response: DetailResponse) -> Vec<RepositoryCommits> {
    response
        .detail
        .into_iter()
        .next()
        .map(|detail| detail.repositories)
        .unwrap_or_default()
}
