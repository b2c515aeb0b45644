//! Canned data for tests: a complete report environment and Jira search
//! payloads shaped like the `/rest/api/2/search` response.

use std::collections::HashMap;

use serde_json::{Value, json};

/// Every variable the report reads, with plausible values.
///
/// The Jira URL points at a fixed host; tests talking to a mock server
/// override `JIRA_URL` with the server's URI.
pub fn sample_env() -> HashMap<&'static str, String> {
  HashMap::from([
    ("JIRA_ACCESS_TOKEN", "secret-token".to_string()),
    ("JIRA_TEAM_MEMBERS", "alice,bob".to_string()),
    ("JIRA_URL", "https://jira.example.com/".to_string()),
    ("JIRA_PROJECT_NAME", "PLAT".to_string()),
    ("JIRA_STATUS", "Done, Closed".to_string()),
    ("JIRA_STATUS_CATEGORY", "Done".to_string()),
    ("JIRA_ORDER_BY", "updated".to_string()),
    ("JIRA_ORDER_DIRECTION", "DESC".to_string()),
    ("JIRA_TEAM_NAME", "Platform".to_string()),
  ])
}

/// Builder for one element of the search response's `issues` array
#[derive(Debug, Clone)]
pub struct IssueJson {
  key: String,
  id: String,
  status: String,
  resolution: Option<String>,
  subtasks: Option<usize>,
  parent_id: Option<String>,
  issue_type: String,
  summary: String,
}

impl IssueJson {
  /// A resolved-less, subtask-less story with the given key and id
  pub fn new(key: &str, id: &str) -> Self {
    Self {
      key: key.to_string(),
      id: id.to_string(),
      status: "In Progress".to_string(),
      resolution: None,
      subtasks: None,
      parent_id: None,
      issue_type: "Story".to_string(),
      summary: format!("Summary of {key}"),
    }
  }

  pub fn status(mut self, status: &str) -> Self {
    self.status = status.to_string();
    self
  }

  pub fn resolution(mut self, resolution: &str) -> Self {
    self.resolution = Some(resolution.to_string());
    self
  }

  /// Include a `subtasks` array with `count` entries
  pub fn subtasks(mut self, count: usize) -> Self {
    self.subtasks = Some(count);
    self
  }

  pub fn parent(mut self, parent_id: &str) -> Self {
    self.parent_id = Some(parent_id.to_string());
    self
  }

  pub fn issue_type(mut self, issue_type: &str) -> Self {
    self.issue_type = issue_type.to_string();
    self
  }

  pub fn build(&self) -> Value {
    let project_key = self.key.split('-').next().unwrap_or_default();
    let mut fields = json!({
        "project": { "key": project_key, "name": "Platform" },
        "summary": self.summary,
        "status": { "id": "3", "name": self.status },
        "issuetype": { "id": "10001", "name": self.issue_type },
        "created": "2024-03-04T09:30:00.000+0000",
        "updated": "2024-03-11T16:45:12.000+0000",
        "resolution": self.resolution.as_ref().map(|name| json!({ "name": name })),
    });

    if let Some(count) = self.subtasks {
      let subtasks: Vec<Value> = (0..count)
        .map(|i| json!({ "id": format!("9{i}"), "key": format!("{}-S{i}", self.key) }))
        .collect();
      fields["subtasks"] = Value::Array(subtasks);
    }
    if let Some(parent_id) = &self.parent_id {
      fields["parent"] = json!({ "id": parent_id, "key": "PARENT-1" });
    }

    json!({
        "id": self.id,
        "key": self.key,
        "self": format!("https://jira.example.com/rest/api/2/issue/{}", self.id),
        "fields": fields,
    })
  }
}

/// Wrap issues in a search response body
pub fn search_response(issues: &[IssueJson]) -> Value {
  let issues: Vec<Value> = issues.iter().map(IssueJson::build).collect();
  json!({
      "startAt": 0,
      "maxResults": 50,
      "total": issues.len(),
      "issues": issues,
  })
}
