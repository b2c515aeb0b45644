//! # Issue Fetcher
//!
//! One search per assignee, all in flight at once. A failed search never
//! fails the run: it is logged and the assignee is reported with no issues.

use jreport_core::{AssigneeIssueGroup, Issue, ReportConfig, ReportPeriod};
use tracing::{error, info};

use crate::client::JiraClient;
use crate::jql::assignee_month_jql;

/// Fetch one assignee's issues, degrading any failure to an empty list.
pub async fn fetch_assignee_issues(client: &JiraClient, assignee: &str, jql: &str) -> Vec<Issue> {
  match client.search_issues(jql).await {
    Ok(results) => {
      let issues: Vec<Issue> = results.issues.into_iter().map(Issue::from).collect();
      info!(assignee, count = issues.len(), "Fetched issues");
      issues
    }
    Err(e) => {
      error!(assignee, "{e:#}");
      Vec::new()
    }
  }
}

/// Fetch every configured team member's issues for the period.
///
/// All searches are spawned before any is awaited, and the handles are joined
/// in team-member order, so the returned groups follow the configured order
/// no matter which search finishes first. Must be called from within a Tokio
/// runtime.
pub async fn fetch_team_issues(
  client: &JiraClient,
  config: &ReportConfig,
  period: &ReportPeriod,
) -> Vec<AssigneeIssueGroup> {
  let handles: Vec<_> = config
    .team_members
    .iter()
    .map(|assignee| {
      let client = client.clone();
      let assignee = assignee.clone();
      let jql = assignee_month_jql(config, period, &assignee);
      tokio::spawn(async move {
        let issues = fetch_assignee_issues(&client, &assignee, &jql).await;
        AssigneeIssueGroup::new(assignee, issues)
      })
    })
    .collect();

  let mut groups = Vec::with_capacity(handles.len());
  for (handle, assignee) in handles.into_iter().zip(&config.team_members) {
    match handle.await {
      Ok(group) => groups.push(group),
      Err(e) => {
        error!(assignee = assignee.as_str(), "Fetch task did not complete: {e}");
        groups.push(AssigneeIssueGroup::empty(assignee.as_str()));
      }
    }
  }

  groups
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use chrono::NaiveDate;
  use jreport_test_utils::{IssueJson, search_response};
  use wiremock::matchers::{header, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::client::create_jira_client;

  fn config_for(server: &MockServer, members: &[&str]) -> ReportConfig {
    ReportConfig {
      jira_url: server.uri(),
      access_token: "test_token".to_string(),
      project: "PLAT".to_string(),
      team_members: members.iter().map(ToString::to_string).collect(),
      excluded_statuses: "Done".to_string(),
      status_category: "Done".to_string(),
      order_by: "updated".to_string(),
      order_direction: "DESC".to_string(),
      team_name: "Platform".to_string(),
    }
  }

  fn period() -> ReportPeriod {
    ReportPeriod::from_date(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
  }

  async fn mount_assignee(server: &MockServer, config: &ReportConfig, assignee: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .and(query_param("jql", assignee_month_jql(config, &period(), assignee)))
      .and(header("Authorization", "Bearer test_token"))
      .respond_with(response)
      .expect(1)
      .mount(server)
      .await;
  }

  #[tokio::test]
  async fn test_fetch_team_issues_keeps_member_order() {
    let server = MockServer::start().await;
    let config = config_for(&server, &["alice", "bob"]);

    // alice answers last; her group must still come first
    mount_assignee(
      &server,
      &config,
      "alice",
      ResponseTemplate::new(200)
        .set_body_json(search_response(&[IssueJson::new("PLAT-1", "1"), IssueJson::new("PLAT-2", "2")]))
        .set_delay(Duration::from_millis(200)),
    )
    .await;
    mount_assignee(
      &server,
      &config,
      "bob",
      ResponseTemplate::new(200).set_body_json(search_response(&[IssueJson::new("PLAT-3", "3")])),
    )
    .await;

    let client = create_jira_client(&config);
    let groups = fetch_team_issues(&client, &config, &period()).await;

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].assignee, "alice");
    assert_eq!(groups[0].issues.len(), 2);
    assert_eq!(groups[0].issues[0].key, "PLAT-1");
    assert_eq!(groups[1].assignee, "bob");
    assert_eq!(groups[1].issues.len(), 1);
  }

  #[tokio::test]
  async fn test_failed_fetch_degrades_to_empty_group() {
    let server = MockServer::start().await;
    let config = config_for(&server, &["alice", "bob", "carol"]);

    mount_assignee(
      &server,
      &config,
      "alice",
      ResponseTemplate::new(200).set_body_json(search_response(&[IssueJson::new("PLAT-1", "1")])),
    )
    .await;
    mount_assignee(&server, &config, "bob", ResponseTemplate::new(500)).await;
    mount_assignee(
      &server,
      &config,
      "carol",
      ResponseTemplate::new(200).set_body_string("not json"),
    )
    .await;

    let client = create_jira_client(&config);
    let groups = fetch_team_issues(&client, &config, &period()).await;

    let summary: Vec<(&str, usize)> = groups.iter().map(|g| (g.assignee.as_str(), g.issues.len())).collect();
    assert_eq!(summary, vec![("alice", 1), ("bob", 0), ("carol", 0)]);
  }

  #[tokio::test]
  async fn test_unreachable_server_degrades_to_empty() {
    let server = MockServer::start().await;
    let mut config = config_for(&server, &["alice"]);
    // Nothing listens on port 9 on the test host
    config.jira_url = "http://127.0.0.1:9".to_string();
    drop(server);

    let client = create_jira_client(&config);
    let groups = fetch_team_issues(&client, &config, &period()).await;

    assert_eq!(groups, vec![AssigneeIssueGroup::empty("alice")]);
  }
}
