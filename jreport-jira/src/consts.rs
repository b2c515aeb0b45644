//! Constants for the jreport-jira client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Search endpoint, relative to the base URL
pub const SEARCH_PATH: &str = "/rest/api/2/search";
