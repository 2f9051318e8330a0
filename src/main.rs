use anyhow::Result;
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use tracing::info;

use kpi_calc::cli::{handle_convert_command, handle_table_command, ConvertArgs, TableCommands};
use kpi_calc::config::{KpiPaths, Settings};
use kpi_calc::logging::init_logging;
use kpi_calc::services::ConversionEngine;
use kpi_calc::storage::{initialize_storage, load_active_table};

#[derive(Parser)]
#[command(
    name = "kpi",
    version,
    about = "Convert amounts between years using the consumer price index",
    long_about = "kpi converts a monetary amount from one year's prices to another's \
                  using a yearly consumer price index (KPI) table, and shows the \
                  percentage change between the two years."
)]
struct Cli {
    /// Enable debug logging (overridden by KPI_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount between two years
    #[command(alias = "c")]
    Convert(ConvertArgs),

    /// Index table commands
    #[command(subcommand)]
    Table(TableCommands),

    /// Launch the interactive form
    #[command(alias = "ui")]
    Form,

    /// Write default settings and an editable index table
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, matches!(cli.command, Some(Commands::Form)));

    let paths = KpiPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let current_year = Local::now().year();

    match cli.command {
        Some(Commands::Convert(args)) => {
            let (table, _) = load_active_table(&paths, &settings)?;
            let engine = ConversionEngine::new(table);
            handle_convert_command(&engine, &settings, args, current_year)?;
        }
        Some(Commands::Table(cmd)) => {
            let (table, _) = load_active_table(&paths, &settings)?;
            handle_table_command(&table, &settings, cmd)?;
        }
        Some(Commands::Form) => {
            let (table, _) = load_active_table(&paths, &settings)?;
            let engine = ConversionEngine::new(table);
            kpi_calc::tui::run_tui(&engine, &settings, current_year)?;
        }
        Some(Commands::Init) => {
            println!("Initializing kpi at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            info!(path = %paths.base_dir().display(), "initialized");
            println!("Initialization complete!");
            println!();
            println!("Settings:    {}", paths.settings_file().display());
            println!("Index table: {}", paths.index_file().display());
            println!();
            println!("Edit the index table to add or correct years.");
        }
        Some(Commands::Config) => {
            let (table, source) = load_active_table(&paths, &settings)?;
            println!("kpi Configuration");
            println!("=================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency:            {}", settings.currency_code);
            println!("  Decimal separator:   '{}'", settings.decimal_separator);
            println!("  Thousands separator: '{}'", settings.thousands_separator);
            println!("  Default lookback:    {} years", settings.default_lookback_years);
            println!();
            println!("Index table:");
            println!("  Source: {}", source);
            println!(
                "  Years:  {}-{} ({} entries)",
                table.first_year(),
                table.last_year(),
                table.len()
            );
        }
        None => {
            println!("kpi - consumer price index calculator");
            println!();
            println!("Run 'kpi --help' for usage information.");
            println!("Run 'kpi convert 1000 --from 2000 --to 2024' for a quick conversion.");
            println!("Run 'kpi form' to launch the interactive form.");
        }
    }

    Ok(())
}
