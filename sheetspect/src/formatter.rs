//! Output formatters for inspection outcomes

use anyhow::Result;
use colored::*;
use sheetspect_core::InspectOutcome;
use sheetspect_core::report::{ColumnWidth, FormatReport};
use std::path::Path;

/// Print an outcome in human-readable format with colors
pub fn print_human(file_path: &Path, outcome: &InspectOutcome) {
    match outcome {
        InspectOutcome::SheetNotFound { sheet, .. } => {
            println!("Sheet not found: {}", sheet);
        }
        InspectOutcome::Report(report) => print_report(file_path, report),
    }
}

fn print_report(file_path: &Path, report: &FormatReport) {
    println!(
        "{}",
        format!("Inspecting: {}", file_path.display()).bold()
    );
    println!("{} {}", "Sheet:".bold(), report.sheet.cyan().bold());
    println!();

    println!("{}", "Column widths:".bold().underline());
    for column in &report.columns {
        match column.width {
            ColumnWidth::Explicit(width) => {
                println!("  {}: {}", column.column.yellow(), width);
            }
            ColumnWidth::Default => {
                println!("  {}: {}", column.column.yellow(), "default".bright_black());
            }
        }
    }
    println!();

    let format = &report.cell_format;
    println!("{} {}", "Cell:".bold(), report.cell.yellow());
    println!(
        "  Font: {} size {}{}{} color {}",
        format.font.name,
        format.font.size,
        if format.font.bold { " bold" } else { "" },
        if format.font.italic { " italic" } else { "" },
        display_opt(&format.font.color),
    );
    println!(
        "  Alignment: horizontal {} vertical {} wrap {}",
        display_opt(&format.alignment.horizontal),
        display_opt(&format.alignment.vertical),
        format.alignment.wrap_text,
    );
    println!("  Fill: {}", display_opt(&format.fill.background));
}

fn display_opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

/// Print an outcome in JSON format
pub fn print_json(file_path: &Path, outcome: &InspectOutcome) -> Result<()> {
    let output = match outcome {
        InspectOutcome::SheetNotFound { sheet, available } => serde_json::json!({
            "file": file_path.display().to_string(),
            "sheet": sheet,
            "found": false,
            "available_sheets": available,
        }),
        InspectOutcome::Report(report) => serde_json::json!({
            "file": file_path.display().to_string(),
            "found": true,
            "report": report,
        }),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
