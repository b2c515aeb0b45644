use jreport_core::Issue;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub access_token: String,
}

impl std::fmt::Debug for JiraAuth {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("JiraAuth").field("access_token", &"<redacted>").finish()
  }
}

/// Body of `GET /rest/api/2/search`
#[derive(Debug, Deserialize)]
pub struct JiraSearchResponse {
  #[serde(default)]
  pub issues: Vec<JiraIssue>,
}

/// Represents a Jira issue
#[derive(Debug, Deserialize)]
pub struct JiraIssue {
  #[serde(deserialize_with = "id_as_string")]
  pub id: String,
  pub key: String,
  pub fields: JiraIssueFields,
}

/// Represents the Jira issue fields the report reads
#[derive(Debug, Deserialize)]
pub struct JiraIssueFields {
  pub project: JiraProject,
  pub summary: String,
  pub status: JiraIssueStatus,
  #[serde(default)]
  pub resolution: Option<JiraResolution>,
  pub issuetype: JiraIssueType,
  #[serde(default)]
  pub subtasks: Option<Vec<IgnoredAny>>,
  #[serde(default)]
  pub parent: Option<JiraParent>,
  pub created: String,
  pub updated: String,
}

#[derive(Debug, Deserialize)]
pub struct JiraProject {
  pub key: String,
}

/// Represents a Jira issue status
#[derive(Debug, Deserialize)]
pub struct JiraIssueStatus {
  pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct JiraResolution {
  pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct JiraIssueType {
  pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct JiraParent {
  #[serde(deserialize_with = "id_as_string")]
  pub id: String,
}

/// Jira documents ids as numeric strings, but some proxies and older
/// servers send them as bare integers.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum RawId {
    Text(String),
    Number(u64),
  }

  Ok(match RawId::deserialize(deserializer)? {
    RawId::Text(id) => id,
    RawId::Number(id) => id.to_string(),
  })
}

impl From<JiraIssue> for Issue {
  fn from(issue: JiraIssue) -> Self {
    let fields = issue.fields;
    Self {
      key: issue.key,
      id: issue.id,
      parent_id: fields.parent.map(|parent| parent.id),
      project_key: fields.project.key,
      summary: fields.summary,
      status: fields.status.name,
      resolution: fields.resolution.map(|resolution| resolution.name),
      issue_type: fields.issuetype.name,
      subtask_count: fields.subtasks.map(|subtasks| subtasks.len()),
      created: fields.created,
      updated: fields.updated,
    }
  }
}
