//! Workbook access shared by the loader and the range slicer.
//!
//! Calamine owns the container decoding; this module is the one place
//! that opens workbooks, so both read paths select sheets and surface
//! errors the same way. The workbook handle is a local in each function
//! and is dropped on every exit path.

use crate::error::{Error, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// Open the workbook at `path` and read the used range of the sheet at
/// the given 0-based index.
pub(crate) fn open_range(path: &Path, sheet_index: usize) -> Result<Range<Data>> {
    let mut workbook = open_workbook_auto(path)?;
    match workbook.worksheet_range_at(sheet_index) {
        Some(range) => Ok(range?),
        None => Err(Error::SheetIndex {
            index: sheet_index,
            count: workbook.sheet_names().len(),
        }),
    }
}

/// List the sheet names of the workbook at `path`, in workbook order.
///
/// # Example
///
/// ```no_run
/// let names = sheetload::sheet_names("data.xlsx")?;
/// println!("{} sheets", names.len());
/// # Ok::<(), sheetload::Error>(())
/// ```
pub fn sheet_names(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let workbook = open_workbook_auto(path.as_ref())?;
    Ok(workbook.sheet_names().to_vec())
}
