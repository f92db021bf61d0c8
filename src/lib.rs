//! # sheetload
//!
//! Column-oriented table loading and cell-range extraction for
//! spreadsheet files.
//!
//! This library is a thin shaping layer over [calamine], which does the
//! container decoding and hands back each formula cell's cached
//! computed value. sheetload turns one sheet into a table keyed by its
//! header row, or reads a raw rectangle of cells by A1 address.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sheetload::{load_table, slice_range};
//!
//! // Header-mapped loading: first row names the columns
//! if let Some(table) = load_table("people.xlsx", 0)? {
//!     println!("{} rows x {} columns", table.row_count(), table.column_count());
//!     if let Some(names) = table.column("Name") {
//!         println!("{:?}", names);
//!     }
//! }
//!
//! // Raw rectangle by cell address
//! let rect = slice_range("people.xlsx", 0, "A1", "C10")?;
//! println!("{} rows", rect.len());
//! # Ok::<(), sheetload::Error>(())
//! ```
//!
//! ## Loader API
//!
//! ```no_run
//! use sheetload::SheetLoader;
//!
//! let mut loader = SheetLoader::new("people.xlsx", 0);
//! if loader.parse()? {
//!     for name in loader.column_names() {
//!         println!("{}: {} values", name, loader.column(name).unwrap().len());
//!     }
//! }
//! # Ok::<(), sheetload::Error>(())
//! ```
//!
//! [calamine]: https://docs.rs/calamine

pub mod address;
pub mod error;
pub mod loader;
pub mod slice;
pub mod table;
pub mod value;

mod workbook;

// Re-exports
pub use address::{column_label, CellAddress};
pub use error::{Error, Result};
pub use loader::SheetLoader;
pub use slice::slice_range;
pub use table::Table;
pub use value::CellValue;
pub use workbook::sheet_names;

use std::path::Path;

/// Load one sheet into a column-oriented [`Table`].
///
/// Returns `Ok(None)` when the sheet holds fewer than two usable rows
/// (a header plus at least one data row).
///
/// # Example
///
/// ```no_run
/// use sheetload::load_table;
///
/// if let Some(table) = load_table("people.xlsx", 0)? {
///     println!("columns: {:?}", table.column_names());
/// }
/// # Ok::<(), sheetload::Error>(())
/// ```
pub fn load_table(path: impl AsRef<Path>, sheet_index: usize) -> Result<Option<Table>> {
    let mut loader = SheetLoader::new(path.as_ref(), sheet_index);
    if loader.parse()? {
        Ok(Some(loader.into_table()))
    } else {
        Ok(None)
    }
}
