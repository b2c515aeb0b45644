use jreport_core::ReportConfig;
use reqwest::Client;

use crate::models::JiraAuth;

/// Represents a Jira API client
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its connection
/// pool, so each concurrent fetch task gets its own handle.
#[derive(Clone)]
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: JiraAuth,
}

impl JiraClient {
  /// Create a new Jira client
  pub fn new(base_url: &str, auth: JiraAuth) -> Self {
    let client = Client::new();
    Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
    }
  }

  /// Base URL requests are issued against
  pub fn base_url(&self) -> &str {
    &self.base_url
  }
}

/// Create a Jira client from the report configuration
pub fn create_jira_client(config: &ReportConfig) -> JiraClient {
  let auth = JiraAuth {
    access_token: config.access_token.clone(),
  };

  JiraClient::new(&config.jira_url, auth)
}
