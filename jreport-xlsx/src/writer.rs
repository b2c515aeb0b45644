//! # XLSX Writer
//!
//! Serializes a [`WorkbookDocument`] with `rust_xlsxwriter`. Every cell is
//! written with its own resolved style, so nothing depends on the library's
//! defaults.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use tracing::debug;

use crate::document::{CellValue, WorkbookDocument};
use crate::error::RenderError;
use crate::style::{Border, CellStyle, VerticalAlign};

/// Convert a resolved style into a `rust_xlsxwriter` format
pub fn to_format(style: &CellStyle) -> Format {
  let mut format = Format::new();

  if let Some(name) = style.font_name {
    format = format.set_font_name(name);
  }
  if let Some(size) = style.font_size {
    format = format.set_font_size(size);
  }
  if style.bold == Some(true) {
    format = format.set_bold();
  }
  if let Some(fill) = style.fill {
    format = format
      .set_pattern(FormatPattern::Solid)
      .set_background_color(Color::RGB(fill.0));
  }
  if let Some(Border::Thin) = style.border {
    format = format.set_border(FormatBorder::Thin);
  }
  if let Some(VerticalAlign::Center) = style.vertical_align {
    format = format.set_align(FormatAlign::VerticalCenter);
  }

  format
}

/// Build a `rust_xlsxwriter` workbook from the document
pub fn to_workbook(document: &WorkbookDocument) -> Result<Workbook, RenderError> {
  let mut workbook = Workbook::new();
  let sheet = workbook.add_worksheet();
  sheet.set_name(&document.sheet_name)?;

  for (col, column) in document.columns.iter().enumerate() {
    sheet.set_column_width(col as u16, column.width)?;
  }

  for (index, row) in document.rows.iter().enumerate() {
    let row_num = u32::try_from(index).map_err(|_| RenderError::TooManyRows)?;

    if let Some(height) = row.height {
      sheet.set_row_height(row_num, height)?;
    }
    if let Some(row_style) = &row.row_style {
      sheet.set_row_format(row_num, &to_format(row_style))?;
    }

    for (col, cell) in row.cells.iter().enumerate() {
      let col = col as u16;
      let format = to_format(&cell.style);
      match &cell.value {
        CellValue::Text(text) => {
          sheet.write_string_with_format(row_num, col, text, &format)?;
        }
        CellValue::Number(number) => {
          sheet.write_number_with_format(row_num, col, *number, &format)?;
        }
        CellValue::Blank => {
          sheet.write_blank(row_num, col, &format)?;
        }
      }
    }
  }

  if document.autofilter && !document.columns.is_empty() {
    let last_col = (document.columns.len() - 1) as u16;
    sheet.autofilter(0, 0, 0, last_col)?;
  }

  Ok(workbook)
}

/// Serialize the document to XLSX bytes
pub fn to_bytes(document: &WorkbookDocument) -> Result<Vec<u8>, RenderError> {
  let mut workbook = to_workbook(document)?;
  Ok(workbook.save_to_buffer()?)
}

/// Write the document to `path`, replacing any existing file
pub fn save(document: &WorkbookDocument, path: &Path) -> Result<(), RenderError> {
  let mut workbook = to_workbook(document)?;
  debug!(path = %path.display(), rows = document.rows.len(), "Writing workbook");

  workbook.save(path).map_err(|source| RenderError::Save {
    path: path.to_path_buf(),
    source,
  })
}
