use std::path::PathBuf;

use thiserror::Error;

/// Errors from turning a document into an XLSX file
#[derive(Debug, Error)]
pub enum RenderError {
  #[error("Failed to build worksheet: {0}")]
  Xlsx(#[from] rust_xlsxwriter::XlsxError),
  #[error("Failed to write report to {path}: {source}")]
  Save {
    path: PathBuf,
    #[source]
    source: rust_xlsxwriter::XlsxError,
  },
  #[error("Worksheet has more rows than a spreadsheet can hold")]
  TooManyRows,
}
