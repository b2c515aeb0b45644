//! # Report Pipeline
//!
//! Fetch → render → save, once per run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jreport_core::{ReportConfig, ReportPeriod};
use jreport_jira::{create_jira_client, fetch_team_issues};
use jreport_xlsx::{RenderContext, render_workbook, save};
use tracing::info;

/// Generate the team report for `period` and write it into `output_dir`.
///
/// Fetch failures for individual assignees only empty their group; rendering
/// and save failures are returned.
pub async fn generate_report(
  config: &ReportConfig,
  period: &ReportPeriod,
  ctx: &RenderContext,
  output_dir: &Path,
) -> Result<PathBuf> {
  let client = create_jira_client(config);
  info!(
    members = config.team_members.len(),
    from = %period.month_start_str(),
    to = %period.month_end_str(),
    "Fetching team issues"
  );

  let groups = fetch_team_issues(&client, config, period).await;
  let total: usize = groups.iter().map(|group| group.issues.len()).sum();
  info!(total, "Rendering workbook");

  let document = render_workbook(&groups, ctx);
  let path = output_dir.join(period.report_file_name(&config.team_name));
  save(&document, &path).with_context(|| format!("Failed to save report for team {}", config.team_name))?;

  Ok(path)
}
