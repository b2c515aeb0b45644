//! # JQL Construction
//!
//! Builds the search query for one assignee over the report month.

use jreport_core::{ReportConfig, ReportPeriod};

/// JQL selecting the issues `assignee` held at any point during the month.
///
/// Issues already in one of the excluded statuses before the month began are
/// left out, and results are filtered by status category and sorted as
/// configured.
pub fn assignee_month_jql(config: &ReportConfig, period: &ReportPeriod, assignee: &str) -> String {
  let start = period.month_start_str();
  let end = period.month_end_str();

  format!(
    "project in ({project}) AND assignee was in ({assignee}) during (\"{start}\", \"{end}\") \
     AND status was not in ({statuses}) before \"{start}\" \
     AND statusCategory = {category} ORDER BY {order_by} {direction}",
    project = config.project,
    statuses = config.excluded_statuses,
    category = config.status_category,
    order_by = config.order_by,
    direction = config.order_direction,
  )
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use insta::assert_snapshot;

  use super::*;

  fn config() -> ReportConfig {
    ReportConfig {
      jira_url: "https://jira.example.com".to_string(),
      access_token: "token".to_string(),
      project: "PLAT".to_string(),
      team_members: vec!["alice".to_string()],
      excluded_statuses: "Done, Closed".to_string(),
      status_category: "Done".to_string(),
      order_by: "updated".to_string(),
      order_direction: "DESC".to_string(),
      team_name: "Platform".to_string(),
    }
  }

  #[test]
  fn test_assignee_month_jql() {
    let period = ReportPeriod::from_date(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
    let jql = assignee_month_jql(&config(), &period, "alice");

    assert_snapshot!(
      jql,
      @r#"project in (PLAT) AND assignee was in (alice) during ("2024-02-01", "2024-02-29") AND status was not in (Done, Closed) before "2024-02-01" AND statusCategory = Done ORDER BY updated DESC"#
    );
  }

  #[test]
  fn test_jql_varies_only_by_assignee() {
    let period = ReportPeriod::from_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    let alice = assignee_month_jql(&config(), &period, "alice");
    let bob = assignee_month_jql(&config(), &period, "bob");

    assert_eq!(alice.replace("(alice)", "(bob)"), bob);
  }
}
