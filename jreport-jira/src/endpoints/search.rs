//! # Jira Search Endpoint
//!
//! `GET /rest/api/2/search` with a JQL query.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, USER_AGENT as USER_AGENT_HEADER};
use tracing::debug;

use crate::client::JiraClient;
use crate::consts::{SEARCH_PATH, USER_AGENT};
use crate::models::JiraSearchResponse;

impl JiraClient {
  /// Run a JQL search and return the first page of results
  pub async fn search_issues(&self, jql: &str) -> Result<JiraSearchResponse> {
    let url = format!("{}{}", self.base_url, SEARCH_PATH);
    debug!(%url, %jql, "Searching Jira issues");

    let response = self
      .client
      .get(&url)
      .query(&[("jql", jql)])
      .bearer_auth(&self.auth.access_token)
      .header(ACCEPT, "application/json")
      .header(USER_AGENT_HEADER, USER_AGENT)
      .send()
      .await
      .context("Failed to search Jira issues")?;

    match response.status() {
      status if status.is_success() => {
        let results = response
          .json::<JiraSearchResponse>()
          .await
          .context("Failed to parse Jira search results")?;
        Ok(results)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira access token."
      )),
      StatusCode::BAD_REQUEST => Err(anyhow::anyhow!(
        "Jira rejected the search query: {}",
        response.text().await.unwrap_or_default()
      )),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }
}
