//! CLI commands for the index table

use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::display::format_index_table;
use crate::error::{KpiError, KpiResult};
use crate::export::{export_table_csv, export_table_json, export_table_yaml};
use crate::models::IndexTable;
use crate::storage::TableFormat;

/// File format for `kpi table export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

impl From<TableFormat> for ExportFormat {
    fn from(format: TableFormat) -> Self {
        match format {
            TableFormat::Json => ExportFormat::Json,
            TableFormat::Yaml => ExportFormat::Yaml,
            TableFormat::Csv => ExportFormat::Csv,
        }
    }
}

/// Index table subcommands
#[derive(Subcommand, Debug)]
pub enum TableCommands {
    /// Show the active index table
    #[command(alias = "list")]
    Show,

    /// Write the active index table to a file
    Export {
        /// Output file
        file: PathBuf,

        /// File format (defaults to the file extension)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },
}

/// Handle index table commands
pub fn handle_table_command(
    table: &IndexTable,
    settings: &Settings,
    cmd: TableCommands,
) -> KpiResult<()> {
    match cmd {
        TableCommands::Show => {
            println!("{}", format_index_table(table, settings));
            Ok(())
        }
        TableCommands::Export { file, format } => {
            let format = match format {
                Some(f) => f,
                None => TableFormat::from_path(&file)?.into(),
            };
            export_table_to_file(table, &file, format)?;
            println!("Exported {} years to {}", table.len(), file.display());
            Ok(())
        }
    }
}

fn export_table_to_file(table: &IndexTable, path: &Path, format: ExportFormat) -> KpiResult<()> {
    let file = File::create(path)
        .map_err(|e| KpiError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => export_table_json(table, &mut writer),
        ExportFormat::Yaml => export_table_yaml(table, &mut writer),
        ExportFormat::Csv => export_table_csv(table, &mut writer),
    }?;

    writer.flush()?;
    Ok(())
}
