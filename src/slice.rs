//! Rectangular range extraction.
//!
//! A stateless read of every cell inside an inclusive A1-notation
//! rectangle. Positions with no cell behind them come back as
//! [`CellValue::Absent`] instead of raising an error, so sparse sheets
//! (which omit unused trailing rows entirely) slice cleanly.

use crate::address::CellAddress;
use crate::error::Result;
use crate::value::{format_data, CellValue};
use crate::workbook;
use calamine::Data;
use std::path::Path;

/// Read the inclusive rectangle between two A1-notation addresses.
///
/// Rows are outer, columns inner, in sheet order. If `bottom_right`
/// precedes `top_left` on either axis the result is empty on that axis
/// rather than an error.
///
/// # Example
///
/// ```no_run
/// use sheetload::{slice_range, CellValue};
///
/// let rect = slice_range("data.xlsx", 0, "A1", "B2")?;
/// for row in &rect {
///     for cell in row {
///         match cell {
///             CellValue::Value(s) => print!("{}\t", s),
///             CellValue::Absent => print!("-\t"),
///         }
///     }
///     println!();
/// }
/// # Ok::<(), sheetload::Error>(())
/// ```
///
/// # Errors
///
/// Fails if the workbook cannot be opened or read, the sheet index is
/// out of range, or either address is not valid A1 notation.
pub fn slice_range(
    path: impl AsRef<Path>,
    sheet_index: usize,
    top_left: &str,
    bottom_right: &str,
) -> Result<Vec<Vec<CellValue>>> {
    let start: CellAddress = top_left.parse()?;
    let end: CellAddress = bottom_right.parse()?;

    let range = workbook::open_range(path.as_ref(), sheet_index)?;

    let mut data = Vec::new();
    for row in start.row..=end.row {
        let mut row_data = Vec::with_capacity(end.col.saturating_sub(start.col) + 1);
        for col in start.col..=end.col {
            let cell = match range.get_value((row as u32, col as u32)) {
                None | Some(Data::Empty) => CellValue::Absent,
                Some(data) => CellValue::Value(format_data(data)),
            };
            row_data.push(cell);
        }
        data.push(row_data);
    }

    Ok(data)
}
