//! Workbook reader: calamine for sheet discovery, raw XML for formatting

use anyhow::{Context, Result};
use calamine::{Reader, Sheets, open_workbook_auto};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub mod workbook;
pub mod xml_parser;

pub use workbook::SheetFormat;

/// Read the workbook's sheet names, in workbook order
pub fn read_sheet_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let excel: Sheets<_> = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;
    Ok(excel.sheet_names())
}

/// Read the formatting view of one sheet, addressed by workbook position.
///
/// Formatting attributes live in the xlsx archive; other formats are
/// rejected. Missing archive parts degrade to empty tables.
pub fn read_sheet_format<P: AsRef<Path>>(
    path: P,
    sheet_index: usize,
    sheet_name: &str,
) -> Result<SheetFormat> {
    let path = path.as_ref();

    if path.extension().and_then(|s| s.to_str()) != Some("xlsx") {
        anyhow::bail!(
            "Formatting inspection requires an .xlsx file: {}",
            path.display()
        );
    }

    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))
        .with_context(|| format!("Failed to read archive: {}", path.display()))?;

    let styles = xml_parser::parse_style_sheet(&mut archive)?;
    let (column_widths, cell_style_indices) = xml_parser::parse_sheet_xml(&mut archive, sheet_index)?;

    Ok(SheetFormat {
        name: sheet_name.to_string(),
        column_widths,
        styles,
        cell_style_indices,
    })
}
