//! Core constants shared across jreport components.

/// Bearer token for the Jira REST API
pub const ENV_ACCESS_TOKEN: &str = "JIRA_ACCESS_TOKEN";

/// Comma-separated list of assignees, in report order
pub const ENV_TEAM_MEMBERS: &str = "JIRA_TEAM_MEMBERS";

/// Jira base URL
pub const ENV_URL: &str = "JIRA_URL";

/// Project identifier used in the `project in (...)` clause
pub const ENV_PROJECT_NAME: &str = "JIRA_PROJECT_NAME";

/// Statuses excluded as of the start of the month
pub const ENV_STATUS: &str = "JIRA_STATUS";

/// Status category filter
pub const ENV_STATUS_CATEGORY: &str = "JIRA_STATUS_CATEGORY";

/// Sort field for the search
pub const ENV_ORDER_BY: &str = "JIRA_ORDER_BY";

/// Sort direction for the search
pub const ENV_ORDER_DIRECTION: &str = "JIRA_ORDER_DIRECTION";

/// Team name embedded in the output file name
pub const ENV_TEAM_NAME: &str = "JIRA_TEAM_NAME";

/// Date format used in JQL literals and the output file name
pub const DATE_FORMAT: &str = "%Y-%m-%d";
