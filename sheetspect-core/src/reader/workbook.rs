//! Per-sheet formatting data structures

use std::collections::HashMap;

use crate::report::{CellFormat, CellRef};

/// Read-only formatting view of a single worksheet
#[derive(Debug, Clone, Default)]
pub struct SheetFormat {
    pub name: String,
    /// Explicit column widths keyed by 0-based column index
    pub column_widths: HashMap<u32, f64>,
    /// Workbook style table, in cellXfs order
    pub styles: Vec<CellFormat>,
    /// Style index per cell, keyed by 0-based (row, col)
    pub cell_style_indices: HashMap<(u32, u32), usize>,
}

impl SheetFormat {
    /// Explicit width of a 0-based column, if one is declared
    pub fn column_width(&self, col: u32) -> Option<f64> {
        self.column_widths.get(&col).copied()
    }

    /// Resolve the format of a cell through the style table.
    ///
    /// Cells without a style index fall back to entry 0; workbooks
    /// without a style table fall back to the default format.
    pub fn cell_format(&self, cell: CellRef) -> CellFormat {
        let index = self
            .cell_style_indices
            .get(&(cell.row, cell.col))
            .copied()
            .unwrap_or(0);
        self.styles.get(index).cloned().unwrap_or_default()
    }
}
