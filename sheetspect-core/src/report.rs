//! Report data model for formatting inspections

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Cell reference (e.g., A1, B2), stored as 0-based row/column indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub row: u32,
    pub col: u32,
}

/// Failure to parse an Excel-style cell reference
#[derive(Debug, Error)]
#[error("invalid cell reference: {0}")]
pub struct CellRefError(pub String);

impl CellRef {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parse an Excel-style reference like "A1" into 0-based indices
    pub fn parse(reference: &str) -> Result<Self, CellRefError> {
        let mut col = 0u32;
        let mut row_str = String::new();
        let mut seen_digit = false;

        for ch in reference.chars() {
            if ch.is_ascii_alphabetic() && !seen_digit {
                col = col * 26 + (ch.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
            } else if ch.is_ascii_digit() {
                seen_digit = true;
                row_str.push(ch);
            } else {
                return Err(CellRefError(reference.to_string()));
            }
        }

        if col == 0 || row_str.is_empty() {
            return Err(CellRefError(reference.to_string()));
        }

        let row = row_str
            .parse::<u32>()
            .map_err(|_| CellRefError(reference.to_string()))?;
        if row == 0 {
            return Err(CellRefError(reference.to_string()));
        }

        Ok(Self {
            row: row - 1,
            col: col - 1,
        })
    }

    /// Convert to Excel-style reference (e.g., "A1")
    pub fn to_excel_ref(&self) -> String {
        format!("{}{}", col_to_letter(self.col), self.row + 1)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_excel_ref())
    }
}

/// Convert column number to letter (0 -> A, 1 -> B, etc.)
pub fn col_to_letter(mut col: u32) -> String {
    let mut result = String::new();
    loop {
        result.insert(0, (b'A' + (col % 26) as u8) as char);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    result
}

/// Display width of a single column: explicit, or the workbook default
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    Default,
    Explicit(f64),
}

impl Serialize for ColumnWidth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ColumnWidth::Default => serializer.serialize_str("default"),
            ColumnWidth::Explicit(width) => serializer.serialize_f64(*width),
        }
    }
}

impl fmt::Display for ColumnWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnWidth::Default => write!(f, "default"),
            ColumnWidth::Explicit(width) => write!(f, "{}", width),
        }
    }
}

/// Width entry for one reported column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnWidthReport {
    /// Column letter (A, B, ...)
    pub column: String,
    /// 1-based column index
    pub index: u32,
    pub width: ColumnWidth,
}

/// Font attributes of a cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontInfo {
    pub name: String,
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    /// ARGB string as stored in the workbook; absent for indexed/theme/auto colors
    pub color: Option<String>,
}

impl Default for FontInfo {
    fn default() -> Self {
        Self {
            name: "Calibri".to_string(),
            size: 11.0,
            bold: false,
            italic: false,
            color: None,
        }
    }
}

/// Alignment attributes of a cell; horizontal/vertical are absent when not set
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlignmentInfo {
    pub horizontal: Option<String>,
    pub vertical: Option<String>,
    pub wrap_text: bool,
}

/// Fill attributes of a cell
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FillInfo {
    /// ARGB string of the visible background; absent when no fill is applied
    pub background: Option<String>,
}

/// Style snapshot of a single cell
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CellFormat {
    pub font: FontInfo,
    pub alignment: AlignmentInfo,
    pub fill: FillInfo,
}

/// Full inspection report for one sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatReport {
    pub sheet: String,
    /// Excel-style reference of the inspected cell
    pub cell: String,
    pub columns: Vec<ColumnWidthReport>,
    pub cell_format: CellFormat,
}
