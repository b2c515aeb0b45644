//! # jreport XLSX Renderer
//!
//! Lays out the fetched issue groups as a styled worksheet and writes it as an
//! XLSX file. Layout ([`render_workbook`]) is pure and produces a
//! [`WorkbookDocument`]; [`save`] is the only part that touches the
//! filesystem.

pub mod columns;
pub mod document;
mod error;
pub mod layout;
pub mod style;
pub mod writer;

pub use columns::{COLUMNS, Column, ColumnKey};
pub use document::{Cell, CellValue, Row, RowKind, WorkbookDocument};
pub use error::RenderError;
pub use layout::{RenderContext, SHEET_NAME, TimestampZone, UNRESOLVED, conditional_fill, render_workbook};
pub use style::{CellStyle, Rgb};
pub use writer::{save, to_bytes};
