//! Cell values and display formatting.
//!
//! Calamine hands back typed cell data ([`calamine::Data`]); this module
//! reduces it to the display strings the rest of the crate works with.
//! Formula cells never reach us as formula text: calamine surfaces the
//! cached computed value, so `=1+1` formats as "2".

use calamine::{CellErrorType, Data};
use serde::{Deserialize, Serialize};

/// A cell read from a rectangular range.
///
/// `Absent` marks a position with no cell behind it (sparse sheets omit
/// unused rows and cells entirely). It is distinct from `Value("")`,
/// which is a cell whose formatted content happens to be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A formatted cell value. May be an empty string.
    Value(String),
    /// No cell exists at this position.
    Absent,
}

impl CellValue {
    /// Returns true if no cell exists at this position.
    pub fn is_absent(&self) -> bool {
        matches!(self, CellValue::Absent)
    }

    /// Get the formatted string, or `None` when absent.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Value(s) => Some(s.as_str()),
            CellValue::Absent => None,
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Value(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Value(s.to_string())
    }
}

/// Format a calamine cell into its display string.
///
/// Strings pass through verbatim. Floats with integral values print
/// without a decimal point, matching how spreadsheets display them.
/// Date and time cells print their serial number; number-format-driven
/// date rendering is out of scope for this layer.
pub fn format_data(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => format_number(*n),
        Data::Int(n) => n.to_string(),
        Data::Bool(b) => {
            if *b {
                "TRUE".to_string()
            } else {
                "FALSE".to_string()
            }
        }
        Data::Error(e) => error_code(e).to_string(),
        Data::DateTime(dt) => format_number(dt.as_f64()),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Integers render without decimals; everything else uses Rust's
/// shortest-round-trip float formatting.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Canonical spreadsheet error codes.
fn error_code(e: &CellErrorType) -> &'static str {
    match e {
        CellErrorType::Div0 => "#DIV/0!",
        CellErrorType::NA => "#N/A",
        CellErrorType::Name => "#NAME?",
        CellErrorType::Null => "#NULL!",
        CellErrorType::Num => "#NUM!",
        CellErrorType::Ref => "#REF!",
        CellErrorType::Value => "#VALUE!",
        CellErrorType::GettingData => "#DATA!",
    }
}
