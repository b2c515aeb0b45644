//! # Jira API Client
//!
//! Jira REST API integration for the monthly report: a bearer-token client,
//! the search endpoint, the JQL for an assignee's month, and the concurrent
//! per-assignee fetcher.

mod client;
mod consts;
mod endpoints;
pub mod fetch;
pub mod jql;
pub mod models;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
pub use fetch::{fetch_assignee_issues, fetch_team_issues};
pub use jql::assignee_month_jql;
// Re-export models
pub use models::{JiraAuth, JiraIssue, JiraIssueFields, JiraIssueStatus, JiraSearchResponse};
