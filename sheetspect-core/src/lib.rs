//! sheetspect-core: workbook formatting inspection
//!
//! Opens a workbook, locates a sheet by exact name, and reports the
//! display widths of the leading columns plus the font/alignment/fill of
//! a single cell.

pub mod config;
pub mod reader;
pub mod report;

use anyhow::Result;
use std::path::Path;

pub use config::InspectorConfig;
pub use report::{CellFormat, CellRef, ColumnWidth, ColumnWidthReport, FormatReport};

/// Resolved inspection request
#[derive(Debug, Clone)]
pub struct InspectRequest {
    /// Sheet name, compared exactly against the workbook's sheet list
    pub sheet: String,
    /// Cell whose style is reported
    pub cell: CellRef,
    /// Number of leading columns to report widths for
    pub columns: u32,
}

/// Outcome of an inspection: a report, or the sheet was absent
#[derive(Debug, Clone, PartialEq)]
pub enum InspectOutcome {
    Report(FormatReport),
    SheetNotFound {
        sheet: String,
        /// Names that do exist, in workbook order
        available: Vec<String>,
    },
}

/// Main inspector interface
pub struct Inspector {
    request: InspectRequest,
}

impl Inspector {
    pub fn new(request: InspectRequest) -> Self {
        Self { request }
    }

    /// Inspect a workbook file.
    ///
    /// The presence check runs first; when the sheet is absent no
    /// formatting is parsed at all.
    pub fn inspect_file<P: AsRef<Path>>(&self, path: P) -> Result<InspectOutcome> {
        let path = path.as_ref();
        let sheet_names = reader::read_sheet_names(path)?;

        let Some(sheet_index) = sheet_names.iter().position(|name| name == &self.request.sheet)
        else {
            return Ok(InspectOutcome::SheetNotFound {
                sheet: self.request.sheet.clone(),
                available: sheet_names,
            });
        };

        let sheet = reader::read_sheet_format(path, sheet_index, &self.request.sheet)?;

        let columns = (1..=self.request.columns)
            .map(|index| {
                let col = index - 1;
                let width = match sheet.column_width(col) {
                    Some(w) => ColumnWidth::Explicit(w),
                    None => ColumnWidth::Default,
                };
                ColumnWidthReport {
                    column: report::col_to_letter(col),
                    index,
                    width,
                }
            })
            .collect();

        let cell_format = sheet.cell_format(self.request.cell);

        Ok(InspectOutcome::Report(FormatReport {
            sheet: self.request.sheet.clone(),
            cell: self.request.cell.to_excel_ref(),
            columns,
            cell_format,
        }))
    }
}
