//! # Command Line Interface
//!
//! Argument parsing and the top-level handler for the `jreport` binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser};
use jreport_core::output::format_path;
use jreport_core::{ReportConfig, ReportPeriod, print_info, print_success};
use jreport_xlsx::RenderContext;
use tokio::runtime::Builder;
use tracing::debug;

use crate::report::generate_report;

/// Top-level CLI command for the jreport tool
#[derive(Parser, Debug)]
#[command(name = "jreport")]
#[command(about = "Monthly Jira team report")]
#[command(
  long_about = "Fetches the issues each team member held in Jira during the current month\n\
        and writes them to a single styled XLSX workbook, grouped by assignee.\n\n\
        Connection and query settings are read from JIRA_* environment variables,\n\
        or from a .env file in the working directory."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Report on the month containing this date (YYYY-MM-DD) instead of today
  #[arg(long, value_name = "DATE")]
  pub date: Option<NaiveDate>,

  /// Directory the workbook is written to
  #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
  pub output_dir: PathBuf,

  /// Load environment variables from this file instead of ./.env
  #[arg(long = "env-file", value_name = "PATH")]
  pub env_file: Option<PathBuf>,
}

/// Load `.env` values into the process environment.
///
/// An explicit file must exist; the implicit `./.env` is optional.
fn load_env_file(env_file: Option<&PathBuf>) -> Result<()> {
  match env_file {
    Some(path) => {
      dotenv::from_path(path).with_context(|| format!("Failed to load environment file {}", path.display()))?;
      debug!(path = %path.display(), "Loaded environment file");
    }
    None => {
      if let Ok(path) = dotenv::dotenv() {
        debug!(path = %path.display(), "Loaded environment file");
      }
    }
  }
  Ok(())
}

/// Handle the parsed command line
pub fn handle_cli(cli: Cli) -> Result<()> {
  load_env_file(cli.env_file.as_ref())?;

  let config = ReportConfig::from_env().context("Invalid report configuration")?;
  let period = cli.date.map_or_else(ReportPeriod::current, ReportPeriod::from_date);
  print_info(&format!("Reporting on {} {} for {}", period.month_name(), period.year(), config.team_name));

  let rt = Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")?;

  let ctx = RenderContext::new(&period);
  let path = rt.block_on(generate_report(&config, &period, &ctx, &cli.output_dir))?;

  print_success(&format!("Data exported to {}", format_path(&path.display().to_string())));
  Ok(())
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_defaults() {
    let cli = Cli::try_parse_from(["jreport"]).unwrap();
    assert_eq!(cli.verbose, 0);
    assert_eq!(cli.date, None);
    assert_eq!(cli.output_dir, PathBuf::from("."));
    assert_eq!(cli.env_file, None);
  }

  #[test]
  fn test_all_flags() {
    let cli = Cli::try_parse_from([
      "jreport",
      "-vv",
      "--date",
      "2024-02-10",
      "-o",
      "reports",
      "--env-file",
      "team.env",
    ])
    .unwrap();

    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.date, NaiveDate::from_ymd_opt(2024, 2, 10));
    assert_eq!(cli.output_dir, PathBuf::from("reports"));
    assert_eq!(cli.env_file, Some(PathBuf::from("team.env")));
  }

  #[test]
  fn test_invalid_date_is_rejected() {
    assert!(Cli::try_parse_from(["jreport", "--date", "10/02/2024"]).is_err());
  }

  #[test]
  fn test_missing_env_file_is_an_error() {
    let missing = PathBuf::from("/definitely/not/here/.env");
    let err = load_env_file(Some(&missing)).unwrap_err();
    assert!(err.to_string().contains("Failed to load environment file"));
  }
}
