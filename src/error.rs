//! Error types for the sheetload library.

use std::io;
use thiserror::Error;

/// Result type alias for sheetload operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading spreadsheet data.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The workbook container could not be opened or read.
    #[error("Workbook error: {0}")]
    Workbook(String),

    /// The requested sheet index does not exist in the workbook.
    #[error("Sheet index {index} out of range (workbook has {count} sheets)")]
    SheetIndex { index: usize, count: usize },

    /// A cell address string was not valid A1 notation.
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// The header row contains the same column name more than once.
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),
}

impl From<calamine::Error> for Error {
    fn from(err: calamine::Error) -> Self {
        match err {
            calamine::Error::Io(e) => Error::Io(e),
            other => Error::Workbook(other.to_string()),
        }
    }
}
