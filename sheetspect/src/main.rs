use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sheetspect_core::report::CellRef;
use sheetspect_core::{InspectRequest, Inspector, InspectorConfig};
use std::path::PathBuf;

mod formatter;

#[derive(Parser)]
#[command(name = "sheetspect")]
#[command(about = "Report column widths and cell formatting from a workbook sheet", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the workbook file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Sheet name to inspect (falls back to defaults.sheet in config)
    #[arg(value_name = "SHEET")]
    sheet: Option<String>,

    /// Cell whose style is reported (e.g. A1)
    #[arg(long, value_name = "REF")]
    cell: Option<String>,

    /// Number of leading columns to report widths for
    #[arg(long, value_name = "N")]
    columns: Option<u32>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON output
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        InspectorConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        // Try to load default config from current directory if it exists
        let default_config_path = PathBuf::from("sheetspect.toml");
        if default_config_path.exists() {
            InspectorConfig::from_file(&default_config_path).with_context(|| {
                format!(
                    "Failed to load config from {}",
                    default_config_path.display()
                )
            })?
        } else {
            InspectorConfig::default()
        }
    };

    // Resolve the request: command line, then config, then built-in default
    let sheet = cli.sheet.or(config.defaults.sheet).context(
        "No sheet name given. Pass SHEET or set defaults.sheet in sheetspect.toml.",
    )?;

    let cell_ref = cli
        .cell
        .or(config.defaults.cell)
        .unwrap_or_else(|| "A1".to_string());
    let cell = CellRef::parse(&cell_ref)
        .with_context(|| format!("Invalid cell reference: {}", cell_ref))?;

    let columns = cli.columns.or(config.defaults.columns).unwrap_or(9);

    let inspector = Inspector::new(InspectRequest {
        sheet,
        cell,
        columns,
    });

    let outcome = inspector
        .inspect_file(&cli.file)
        .with_context(|| format!("Failed to inspect file: {}", cli.file.display()))?;

    match cli.format {
        OutputFormat::Human => formatter::print_human(&cli.file, &outcome),
        OutputFormat::Json => formatter::print_json(&cli.file, &outcome)?,
    }

    Ok(())
}
