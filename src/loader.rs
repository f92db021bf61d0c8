//! Header-mapped table loading.
//!
//! [`SheetLoader`] walks one sheet of a workbook, formats every cell to
//! a display string, and pivots the result into a [`Table`] keyed by the
//! header row.
//!
//! # Example
//!
//! ```no_run
//! use sheetload::SheetLoader;
//!
//! let mut loader = SheetLoader::new("people.xlsx", 0);
//! if loader.parse()? {
//!     println!("{} rows", loader.row_count());
//!     if let Some(ages) = loader.column("Age") {
//!         println!("ages: {:?}", ages);
//!     }
//! }
//! # Ok::<(), sheetload::Error>(())
//! ```

use crate::error::Result;
use crate::table::Table;
use crate::value::format_data;
use crate::workbook;
use calamine::{Data, Range};
use std::path::{Path, PathBuf};

/// Loads one sheet of a workbook into a column-oriented [`Table`].
///
/// Construction performs no I/O; [`parse`](SheetLoader::parse) does all
/// the work and may be called again to reload the file.
#[derive(Debug)]
pub struct SheetLoader {
    path: PathBuf,
    sheet_index: usize,
    table: Table,
}

impl SheetLoader {
    /// Bind a loader to a workbook path and a 0-based sheet index.
    pub fn new(path: impl Into<PathBuf>, sheet_index: usize) -> Self {
        Self {
            path: path.into(),
            sheet_index,
            table: Table::new(),
        }
    }

    /// Parse the bound sheet into a table.
    ///
    /// Returns `Ok(false)` when the sheet holds fewer than two usable
    /// rows (no header plus at least one data row); the previously
    /// stored table is left untouched in that case. On `Ok(true)` the
    /// stored table is fully replaced.
    ///
    /// # Errors
    ///
    /// Fails if the workbook cannot be opened or read, the sheet index
    /// is out of range, or the header row repeats a column name.
    pub fn parse(&mut self) -> Result<bool> {
        let range = workbook::open_range(&self.path, self.sheet_index)?;
        let grid = grid_from_range(&range);

        // At least a header row and one data row are required.
        if grid.len() < 2 {
            return Ok(false);
        }

        self.table = Table::from_grid(&grid)?;
        Ok(true)
    }

    /// Number of data rows from the last successful parse.
    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    /// Number of columns from the last successful parse.
    pub fn column_count(&self) -> usize {
        self.table.column_count()
    }

    /// Column names in header order.
    pub fn column_names(&self) -> &[String] {
        self.table.column_names()
    }

    /// All values under the named column, or `None` if no such column.
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.table.column(name)
    }

    /// The loaded table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Consume the loader, keeping only the loaded table.
    pub fn into_table(self) -> Table {
        self.table
    }

    /// The workbook path this loader is bound to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The 0-based sheet index this loader is bound to.
    pub fn sheet_index(&self) -> usize {
        self.sheet_index
    }
}

/// Format a calamine range into a grid of display strings.
///
/// Blank cells inside a row stay as empty-string slots so later values
/// keep their column position; trailing blanks are trimmed and rows
/// with no content at all are skipped.
fn grid_from_range(range: &Range<Data>) -> Vec<Vec<String>> {
    let mut grid = Vec::new();

    for row in range.rows() {
        let mut values: Vec<String> = row.iter().map(format_data).collect();
        while values.last().is_some_and(|v| v.is_empty()) {
            values.pop();
        }
        if !values.is_empty() {
            grid.push(values);
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::Data;

    fn range_from_rows(rows: Vec<Vec<Data>>) -> Range<Data> {
        let mut range = Range::new(
            (0, 0),
            (
                rows.len().saturating_sub(1) as u32,
                rows.iter().map(|r| r.len()).max().unwrap_or(1).max(1) as u32 - 1,
            ),
        );
        for (r, row) in rows.into_iter().enumerate() {
            for (c, cell) in row.into_iter().enumerate() {
                range.set_value((r as u32, c as u32), cell);
            }
        }
        range
    }

    #[test]
    fn test_grid_keeps_interior_blanks() {
        let range = range_from_rows(vec![vec![
            Data::String("a".to_string()),
            Data::Empty,
            Data::String("c".to_string()),
        ]]);

        let grid = grid_from_range(&range);
        assert_eq!(grid, vec![vec!["a".to_string(), String::new(), "c".to_string()]]);
    }

    #[test]
    fn test_grid_trims_trailing_blanks_and_empty_rows() {
        let range = range_from_rows(vec![
            vec![Data::String("a".to_string()), Data::Empty, Data::Empty],
            vec![Data::Empty, Data::Empty, Data::Empty],
            vec![Data::Empty, Data::Float(1.0), Data::Empty],
        ]);

        let grid = grid_from_range(&range);
        assert_eq!(
            grid,
            vec![
                vec!["a".to_string()],
                vec![String::new(), "1".to_string()],
            ]
        );
    }

    #[test]
    fn test_loader_defaults_before_parse() {
        let loader = SheetLoader::new("unused.xlsx", 0);
        assert_eq!(loader.row_count(), 0);
        assert_eq!(loader.column_count(), 0);
        assert!(loader.column_names().is_empty());
        assert!(loader.column("anything").is_none());
        assert_eq!(loader.sheet_index(), 0);
    }
}
