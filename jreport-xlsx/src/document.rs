//! # Workbook Document
//!
//! In-memory description of the report worksheet. The layout code produces a
//! [`WorkbookDocument`] without touching the filesystem; the writer turns it
//! into an XLSX file.

use crate::columns::{COLUMNS, Column, ColumnKey};
use crate::style::CellStyle;

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
  Text(String),
  Number(f64),
  Blank,
}

impl CellValue {
  /// Text shown in the cell; numbers use their shortest form
  pub fn display(&self) -> String {
    match self {
      CellValue::Text(text) => text.clone(),
      CellValue::Number(number) => number.to_string(),
      CellValue::Blank => String::new(),
    }
  }
}

/// A value with its fully resolved style
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
  pub value: CellValue,
  pub style: CellStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
  Header,
  Issue,
  /// Blank divider between two assignees
  Separator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
  pub kind: RowKind,
  /// One cell per column, in [`COLUMNS`] order
  pub cells: Vec<Cell>,
  pub height: Option<f64>,
  /// Style applied to the whole row, including columns past the schema
  pub row_style: Option<CellStyle>,
}

impl Row {
  pub fn cell(&self, key: ColumnKey) -> &Cell {
    &self.cells[key.index()]
  }

  /// Display text of the cell in column `key`
  pub fn text(&self, key: ColumnKey) -> String {
    self.cell(key).value.display()
  }
}

/// A single-worksheet workbook ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookDocument {
  pub sheet_name: String,
  pub columns: Vec<Column>,
  /// Header first, then issue and separator rows
  pub rows: Vec<Row>,
  /// Attach an auto-filter across the header row
  pub autofilter: bool,
}

impl WorkbookDocument {
  pub fn new(sheet_name: impl Into<String>) -> Self {
    Self {
      sheet_name: sheet_name.into(),
      columns: COLUMNS.to_vec(),
      rows: Vec::new(),
      autofilter: false,
    }
  }

  pub fn header(&self) -> Option<&Row> {
    self.rows.first().filter(|row| row.kind == RowKind::Header)
  }

  /// Every row after the header
  pub fn body(&self) -> &[Row] {
    match self.header() {
      Some(_) => &self.rows[1..],
      None => &self.rows,
    }
  }

  pub fn rows_of(&self, kind: RowKind) -> impl Iterator<Item = &Row> {
    self.rows.iter().filter(move |row| row.kind == kind)
  }
}
