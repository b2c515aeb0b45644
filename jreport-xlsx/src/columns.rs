//! Fixed column schema of the "All Issues" worksheet.

use crate::style::{CellStyle, Rgb};

/// Identifies a worksheet column independent of its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
  Project,
  Assignee,
  Key,
  IssueId,
  ParentId,
  Summary,
  Status,
  Created,
  Updated,
  Month,
  Year,
  NumberOfTask,
  IssueType,
  Resolution,
}

impl ColumnKey {
  pub const fn as_str(self) -> &'static str {
    match self {
      ColumnKey::Project => "project",
      ColumnKey::Assignee => "assignee",
      ColumnKey::Key => "key",
      ColumnKey::IssueId => "issue_id",
      ColumnKey::ParentId => "parent_id",
      ColumnKey::Summary => "summary",
      ColumnKey::Status => "status",
      ColumnKey::Created => "created",
      ColumnKey::Updated => "updated",
      ColumnKey::Month => "month",
      ColumnKey::Year => "year",
      ColumnKey::NumberOfTask => "number_of_task",
      ColumnKey::IssueType => "issuetype",
      ColumnKey::Resolution => "resolution",
    }
  }

  /// Zero-based position in [`COLUMNS`]
  pub fn index(self) -> usize {
    COLUMNS.iter().position(|column| column.key == self).unwrap_or_default()
  }

  /// Header fill for the columns that carry one
  pub const fn header_fill(self) -> Option<Rgb> {
    match self {
      ColumnKey::Month => Some(Rgb::YELLOW),
      ColumnKey::Year => Some(Rgb::LIGHT_PINK),
      ColumnKey::NumberOfTask => Some(Rgb::LIGHT_BLUE),
      _ => None,
    }
  }

  /// Style layer for this column's header cell
  pub const fn header_style(self) -> CellStyle {
    match self.header_fill() {
      Some(color) => CellStyle::filled(color),
      None => CellStyle::EMPTY,
    }
  }
}

/// Column definition: key, header title and display width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
  pub key: ColumnKey,
  pub title: &'static str,
  pub width: f64,
}

const fn column(key: ColumnKey, title: &'static str, width: f64) -> Column {
  Column { key, title, width }
}

/// Worksheet columns in display order
pub const COLUMNS: [Column; 14] = [
  column(ColumnKey::Project, "Project", 20.0),
  column(ColumnKey::Assignee, "Assignee", 20.0),
  column(ColumnKey::Key, "Issue Key", 20.0),
  column(ColumnKey::IssueId, "Issue ID", 20.0),
  column(ColumnKey::ParentId, "Parent ID", 20.0),
  column(ColumnKey::Summary, "Summary", 32.0),
  column(ColumnKey::Status, "Status", 15.0),
  column(ColumnKey::Created, "Created Date", 20.0),
  column(ColumnKey::Updated, "Updated Date", 20.0),
  column(ColumnKey::Month, "Month-GTV", 20.0),
  column(ColumnKey::Year, "Year-GTV", 20.0),
  column(ColumnKey::NumberOfTask, "Number of Task", 20.0),
  column(ColumnKey::IssueType, "Issue Type", 20.0),
  column(ColumnKey::Resolution, "Resolution", 20.0),
];

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn test_column_keys_are_unique() {
    let keys: HashSet<&str> = COLUMNS.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys.len(), COLUMNS.len());
  }

  #[test]
  fn test_column_index_matches_position() {
    for (i, column) in COLUMNS.iter().enumerate() {
      assert_eq!(column.key.index(), i);
    }
    assert_eq!(ColumnKey::Status.index(), 6);
    assert_eq!(ColumnKey::Resolution.index(), 13);
  }

  #[test]
  fn test_only_period_and_task_headers_are_filled() {
    let filled: Vec<&str> = COLUMNS
      .iter()
      .filter(|c| c.key.header_fill().is_some())
      .map(|c| c.key.as_str())
      .collect();

    assert_eq!(filled, vec!["month", "year", "number_of_task"]);
  }
}
