//! # Report Layout
//!
//! Turns the fetched issue groups into a [`WorkbookDocument`]: one header
//! row, one row per issue, and a yellow divider between assignees.

use chrono::{DateTime, FixedOffset, Local};
use jreport_core::{AssigneeIssueGroup, Issue, ReportPeriod};

use crate::columns::{COLUMNS, ColumnKey};
use crate::document::{Cell, CellValue, Row, RowKind, WorkbookDocument};
use crate::style::{CellStyle, Rgb};

/// Name of the report's only worksheet
pub const SHEET_NAME: &str = "All Issues";

/// Resolution text for issues that have none
pub const UNRESOLVED: &str = "Unresolved";

pub const HEADER_ROW_HEIGHT: f64 = 30.0;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Zone in which issue timestamps are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampZone {
  Local,
  Fixed(FixedOffset),
}

/// Run-level values shared by every row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
  pub month_name: String,
  pub year: String,
  pub zone: TimestampZone,
}

impl RenderContext {
  pub fn new(period: &ReportPeriod) -> Self {
    Self {
      month_name: period.month_name(),
      year: period.year(),
      zone: TimestampZone::Local,
    }
  }

  /// Display timestamps at a fixed offset instead of local time
  pub fn with_offset(mut self, offset: FixedOffset) -> Self {
    self.zone = TimestampZone::Fixed(offset);
    self
  }
}

/// Conditional fill for a status or resolution cell.
///
/// Matching is a case-insensitive substring test; "done" takes precedence
/// over "won't do" and "closed".
pub fn conditional_fill(text: &str) -> Option<Rgb> {
  let lowered = text.to_lowercase();
  if lowered.contains("done") {
    Some(Rgb::LIGHT_GREEN)
  } else if lowered.contains("won't do") || lowered.contains("closed") {
    Some(Rgb::LIGHT_GRAY)
  } else {
    None
  }
}

/// Render a Jira timestamp as `yyyy-MM-dd HH:mm` in the context's zone.
///
/// Values that do not parse are returned unchanged.
pub fn format_timestamp(raw: &str, zone: TimestampZone) -> String {
  let parsed = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z").or_else(|_| DateTime::parse_from_rfc3339(raw));

  match parsed {
    Ok(timestamp) => match zone {
      TimestampZone::Local => timestamp.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
      TimestampZone::Fixed(offset) => timestamp.with_timezone(&offset).format(TIMESTAMP_FORMAT).to_string(),
    },
    Err(_) => raw.to_string(),
  }
}

/// Build the report worksheet for `groups`, in the order given.
pub fn render_workbook(groups: &[AssigneeIssueGroup], ctx: &RenderContext) -> WorkbookDocument {
  let mut document = WorkbookDocument::new(SHEET_NAME);
  document.autofilter = true;
  document.rows.push(header_row());

  for (index, group) in groups.iter().enumerate() {
    for issue in &group.issues {
      document.rows.push(issue_row(&group.assignee, issue, ctx));
    }

    if index + 1 < groups.len() {
      document.rows.push(separator_row());
    }
  }

  document
}

fn header_row() -> Row {
  let header = CellStyle::header();
  let cells = COLUMNS
    .iter()
    .map(|column| Cell {
      value: CellValue::Text(column.title.to_string()),
      style: CellStyle::resolve([&header, &column.key.header_style()]),
    })
    .collect();

  Row {
    kind: RowKind::Header,
    cells,
    height: Some(HEADER_ROW_HEIGHT),
    row_style: None,
  }
}

fn issue_row(assignee: &str, issue: &Issue, ctx: &RenderContext) -> Row {
  let data = CellStyle::data();
  let cells = COLUMNS
    .iter()
    .map(|column| {
      let value = issue_value(column.key, assignee, issue, ctx);
      let conditional = match column.key {
        ColumnKey::Status | ColumnKey::Resolution => {
          conditional_fill(&value.display()).map_or(CellStyle::EMPTY, CellStyle::filled)
        }
        _ => CellStyle::EMPTY,
      };

      Cell {
        value,
        style: CellStyle::resolve([&data, &conditional]),
      }
    })
    .collect();

  Row {
    kind: RowKind::Issue,
    cells,
    height: None,
    row_style: None,
  }
}

fn issue_value(key: ColumnKey, assignee: &str, issue: &Issue, ctx: &RenderContext) -> CellValue {
  let text = |value: &str| CellValue::Text(value.to_string());

  match key {
    ColumnKey::Project => text(&issue.project_key),
    ColumnKey::Assignee => text(assignee),
    ColumnKey::Key => text(&issue.key),
    ColumnKey::IssueId => text(&issue.id),
    ColumnKey::ParentId => issue.parent_id.as_deref().map_or(CellValue::Blank, text),
    ColumnKey::Summary => text(&issue.summary),
    ColumnKey::Status => text(&issue.status),
    ColumnKey::Created => CellValue::Text(format_timestamp(&issue.created, ctx.zone)),
    ColumnKey::Updated => CellValue::Text(format_timestamp(&issue.updated, ctx.zone)),
    ColumnKey::Month => text(&ctx.month_name),
    ColumnKey::Year => text(&ctx.year),
    ColumnKey::NumberOfTask => CellValue::Number(task_count(issue) as f64),
    ColumnKey::IssueType => text(&issue.issue_type),
    ColumnKey::Resolution => text(issue.resolution.as_deref().unwrap_or(UNRESOLVED)),
  }
}

/// Subtask count, or 1 when the issue has none
fn task_count(issue: &Issue) -> usize {
  issue.subtask_count.filter(|count| *count > 0).unwrap_or(1)
}

fn separator_row() -> Row {
  let fill = CellStyle::filled(Rgb::YELLOW);
  let style = CellStyle::resolve([&fill]);

  Row {
    kind: RowKind::Separator,
    cells: COLUMNS
      .iter()
      .map(|_| Cell {
        value: CellValue::Blank,
        style,
      })
      .collect(),
    height: None,
    row_style: Some(style),
  }
}
