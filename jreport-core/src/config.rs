//! # Report Configuration
//!
//! The run's query parameters, loaded once at the process boundary from
//! environment variables (optionally seeded from a `.env` file by the CLI)
//! and handed to the fetcher as an immutable value.

use thiserror::Error;

use crate::consts::{
  ENV_ACCESS_TOKEN, ENV_ORDER_BY, ENV_ORDER_DIRECTION, ENV_PROJECT_NAME, ENV_STATUS, ENV_STATUS_CATEGORY,
  ENV_TEAM_MEMBERS, ENV_TEAM_NAME, ENV_URL,
};
use crate::url::normalize_base_url;

/// Errors raised while assembling a [`ReportConfig`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("Environment variable '{0}' is not set")]
  Missing(&'static str),
  #[error("Environment variable '{0}' does not list any team members")]
  NoTeamMembers(&'static str),
  #[error("Invalid Jira URL '{value}': {reason}")]
  InvalidUrl { value: String, reason: String },
}

/// Everything needed to query Jira and name the output for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
  /// Normalized tracker base URL, without a trailing slash
  pub jira_url: String,
  /// Bearer token sent on every request
  pub access_token: String,
  /// Project identifier placed in `project in (...)`
  pub project: String,
  /// Assignees in report order
  pub team_members: Vec<String>,
  /// Body of the `status was not in (...)` clause
  pub excluded_statuses: String,
  /// Value of the `statusCategory = ...` clause
  pub status_category: String,
  pub order_by: String,
  pub order_direction: String,
  /// Used in the output file name
  pub team_name: String,
}

impl ReportConfig {
  /// Build the configuration from the process environment.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  /// Build the configuration from an arbitrary variable lookup.
  ///
  /// Blank values are treated the same as unset ones.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let require = |name: &'static str| -> Result<String, ConfigError> {
      lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::Missing(name))
    };

    let team_members = parse_team_members(&require(ENV_TEAM_MEMBERS)?);
    if team_members.is_empty() {
      return Err(ConfigError::NoTeamMembers(ENV_TEAM_MEMBERS));
    }

    Ok(Self {
      jira_url: normalize_base_url(&require(ENV_URL)?)?,
      access_token: require(ENV_ACCESS_TOKEN)?,
      project: require(ENV_PROJECT_NAME)?,
      team_members,
      excluded_statuses: require(ENV_STATUS)?,
      status_category: require(ENV_STATUS_CATEGORY)?,
      order_by: require(ENV_ORDER_BY)?,
      order_direction: require(ENV_ORDER_DIRECTION)?,
      team_name: require(ENV_TEAM_NAME)?,
    })
  }
}

/// Split a comma-separated member list, dropping blank entries.
fn parse_team_members(raw: &str) -> Vec<String> {
  raw
    .split(',')
    .map(str::trim)
    .filter(|name| !name.is_empty())
    .map(ToString::to_string)
    .collect()
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use jreport_test_utils::{EnvVarGuard, sample_env};

  use super::*;

  fn lookup_from(vars: HashMap<&'static str, String>) -> impl Fn(&str) -> Option<String> {
    move |name| vars.get(name).cloned()
  }

  #[test]
  fn test_from_lookup_reads_every_variable() {
    let config = ReportConfig::from_lookup(lookup_from(sample_env())).unwrap();

    assert_eq!(config.jira_url, "https://jira.example.com");
    assert_eq!(config.access_token, "secret-token");
    assert_eq!(config.project, "PLAT");
    assert_eq!(config.team_members, vec!["alice", "bob"]);
    assert_eq!(config.excluded_statuses, "Done, Closed");
    assert_eq!(config.status_category, "Done");
    assert_eq!(config.order_by, "updated");
    assert_eq!(config.order_direction, "DESC");
    assert_eq!(config.team_name, "Platform");
  }

  #[test]
  fn test_from_lookup_missing_variable() {
    let mut vars = sample_env();
    vars.remove(ENV_ACCESS_TOKEN);

    let err = ReportConfig::from_lookup(lookup_from(vars)).unwrap_err();
    assert_eq!(err, ConfigError::Missing(ENV_ACCESS_TOKEN));
    assert!(err.to_string().contains("JIRA_ACCESS_TOKEN"));
  }

  #[test]
  fn test_from_lookup_blank_is_missing() {
    let mut vars = sample_env();
    vars.insert(ENV_TEAM_NAME, "   ".to_string());

    let err = ReportConfig::from_lookup(lookup_from(vars)).unwrap_err();
    assert_eq!(err, ConfigError::Missing(ENV_TEAM_NAME));
  }

  #[test]
  fn test_team_members_are_trimmed() {
    let mut vars = sample_env();
    vars.insert(ENV_TEAM_MEMBERS, " alice , bob,,carol ".to_string());

    let config = ReportConfig::from_lookup(lookup_from(vars)).unwrap();
    assert_eq!(config.team_members, vec!["alice", "bob", "carol"]);
  }

  #[test]
  fn test_team_members_only_separators() {
    let mut vars = sample_env();
    vars.insert(ENV_TEAM_MEMBERS, ", ,".to_string());

    let err = ReportConfig::from_lookup(lookup_from(vars)).unwrap_err();
    assert_eq!(err, ConfigError::NoTeamMembers(ENV_TEAM_MEMBERS));
  }

  #[test]
  fn test_invalid_url_is_reported() {
    let mut vars = sample_env();
    vars.insert(ENV_URL, "https://".to_string());

    let err = ReportConfig::from_lookup(lookup_from(vars)).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl { .. }));
  }

  #[test]
  fn test_from_env() {
    let guards: Vec<EnvVarGuard> = sample_env()
      .into_iter()
      .map(|(name, value)| {
        let guard = EnvVarGuard::new(name);
        guard.set(&value);
        guard
      })
      .collect();

    let config = ReportConfig::from_env().unwrap();
    assert_eq!(config.team_members, vec!["alice", "bob"]);
    assert_eq!(config.team_name, "Platform");

    drop(guards);
  }
}
