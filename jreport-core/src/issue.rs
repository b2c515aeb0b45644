//! Domain records passed from the fetcher to the renderer.

/// An issue as the report sees it, independent of the Jira wire format
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Issue {
  pub key: String,
  pub id: String,
  pub parent_id: Option<String>,
  pub project_key: String,
  pub summary: String,
  pub status: String,
  /// `None` while the issue is unresolved
  pub resolution: Option<String>,
  pub issue_type: String,
  /// `None` when the tracker did not return a subtask list
  pub subtask_count: Option<usize>,
  /// Raw tracker timestamp, e.g. `2024-03-04T09:30:00.000+0000`
  pub created: String,
  pub updated: String,
}

/// One assignee and their issues, in tracker response order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssigneeIssueGroup {
  pub assignee: String,
  pub issues: Vec<Issue>,
}

impl AssigneeIssueGroup {
  pub fn new(assignee: impl Into<String>, issues: Vec<Issue>) -> Self {
    Self {
      assignee: assignee.into(),
      issues,
    }
  }

  /// A group for an assignee whose fetch produced nothing
  pub fn empty(assignee: impl Into<String>) -> Self {
    Self::new(assignee, Vec::new())
  }
}
