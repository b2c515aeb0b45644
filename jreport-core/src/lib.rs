//! # jreport Core Library
//!
//! Shared building blocks for the monthly team report: the run configuration,
//! the reporting period, the domain issue records handed from the fetcher to
//! the renderer, and terminal output helpers.

pub mod config;
pub mod consts;
pub mod issue;
pub mod output;
pub mod period;
pub mod url;

pub use config::{ConfigError, ReportConfig};
pub use issue::{AssigneeIssueGroup, Issue};
pub use output::{print_error, print_info, print_success};
pub use period::ReportPeriod;
