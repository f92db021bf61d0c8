//! Column-oriented table model.
//!
//! A [`Table`] is the pivoted form of a grid of formatted cell strings:
//! the first grid row supplies the column names, every later row
//! contributes one value per column, and values are stored per column
//! rather than per row.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A mapping from column name to ordered values, built from a header row
/// plus data rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// Column names in header order.
    names: Vec<String>,
    /// Values per column name.
    columns: HashMap<String, Vec<String>>,
    /// Number of data rows (header row excluded).
    rows: usize,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pivot a grid of formatted cell strings into a table.
    ///
    /// Grid row 0 is the header; each later row maps positionally onto
    /// the header names. Blank interior cells must already be present as
    /// empty-string slots so positions line up (the grid builder keeps
    /// them). A data row shorter than the header leaves the trailing
    /// columns without a value for that row; extra trailing values
    /// beyond the header width are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateColumn`] if the header row names the
    /// same column twice.
    pub fn from_grid(grid: &[Vec<String>]) -> Result<Self> {
        let names = grid.first().cloned().unwrap_or_default();

        let mut columns: HashMap<String, Vec<String>> = HashMap::with_capacity(names.len());
        for name in &names {
            if columns.insert(name.clone(), Vec::new()).is_some() {
                return Err(Error::DuplicateColumn(name.clone()));
            }
        }

        for row in grid.iter().skip(1) {
            for (name, value) in names.iter().zip(row.iter()) {
                if let Some(values) = columns.get_mut(name) {
                    values.push(value.clone());
                }
            }
        }

        Ok(Self {
            names,
            columns,
            rows: grid.len().saturating_sub(1),
        })
    }

    /// Number of data rows (header row excluded).
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns, taken from the header row.
    pub fn column_count(&self) -> usize {
        self.names.len()
    }

    /// Column names in header order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// All values under the named column, or `None` if no such column.
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.columns.get(name).map(|v| v.as_slice())
    }

    /// Check if the table holds no columns.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over (name, values) pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.names.iter().filter_map(move |name| {
            self.columns
                .get(name)
                .map(|values| (name.as_str(), values.as_slice()))
        })
    }
}
