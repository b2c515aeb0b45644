//! # Jira API Endpoints
//!
//! Endpoint implementations on [`crate::JiraClient`]. The report only reads,
//! so search is the single endpoint in use.

pub mod search;
