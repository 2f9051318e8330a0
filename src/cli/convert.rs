//! CLI command for one-shot conversions

use clap::{Args, ValueEnum};
use std::io::{self, Write};

use crate::config::Settings;
use crate::display::format_conversion;
use crate::error::{KpiError, KpiResult};
use crate::export::{export_result_json, export_result_yaml};
use crate::services::{parse_amount, ConversionEngine};

/// Output format for a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Arguments for `kpi convert`
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Amount to convert (e.g. "1000", "1 000,50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Year the amount is from (defaults to five years ago)
    #[arg(short, long)]
    pub from: Option<i32>,

    /// Year to express the amount in (defaults to the newest year in the table)
    #[arg(short, long)]
    pub to: Option<i32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Handle `kpi convert`
pub fn handle_convert_command(
    engine: &ConversionEngine,
    settings: &Settings,
    args: ConvertArgs,
    current_year: i32,
) -> KpiResult<()> {
    let mut stdout = io::stdout().lock();
    run_convert(engine, settings, args, current_year, &mut stdout)
}

fn run_convert<W: Write>(
    engine: &ConversionEngine,
    settings: &Settings,
    args: ConvertArgs,
    current_year: i32,
    out: &mut W,
) -> KpiResult<()> {
    let (default_from, default_to) =
        engine.default_years(current_year, settings.default_lookback_years);
    let source_year = args.from.unwrap_or(default_from);
    let target_year = args.to.unwrap_or(default_to);

    let amount = parse_amount(&args.amount);
    engine.validate(amount, source_year, target_year)?;
    let amount = amount.ok_or(KpiError::InvalidAmount)?;

    let result = engine.convert(amount, source_year, target_year)?;

    match args.format {
        OutputFormat::Text => write!(out, "{}", format_conversion(&result, settings))?,
        OutputFormat::Json => export_result_json(&result, out)?,
        OutputFormat::Yaml => export_result_yaml(&result, out)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IndexTable;

    fn args(amount: &str, from: Option<i32>, to: Option<i32>, format: OutputFormat) -> ConvertArgs {
        ConvertArgs {
            amount: amount.to_string(),
            from,
            to,
            format,
        }
    }

    fn run(args: ConvertArgs) -> KpiResult<String> {
        let engine = ConversionEngine::new(IndexTable::ssb());
        let mut out = Vec::new();
        run_convert(&engine, &Settings::default(), args, 2026, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_text_output() {
        let output = run(args("1000", Some(2000), Some(2024), OutputFormat::Text)).unwrap();
        assert!(output.starts_with("1 982,69 NOK"));
        assert!(output.contains("+98,3% (increase)"));
    }

    #[test]
    fn test_default_years() {
        let output = run(args("100", None, None, OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["request"]["source_year"], 2021);
        assert_eq!(value["request"]["target_year"], 2024);
    }

    #[test]
    fn test_input_errors_propagate() {
        assert!(matches!(
            run(args("abc", Some(2000), Some(2024), OutputFormat::Text)),
            Err(KpiError::InvalidAmount)
        ));
        assert!(matches!(
            run(args("-5", Some(2000), Some(2024), OutputFormat::Text)),
            Err(KpiError::InvalidAmount)
        ));
        assert!(matches!(
            run(args("5", Some(2010), Some(2010), OutputFormat::Text)),
            Err(KpiError::SameYear)
        ));
        assert!(matches!(
            run(args("5", Some(1999), None, OutputFormat::Text)),
            Err(KpiError::MissingIndexData { year: 1999 })
        ));
    }

    #[test]
    fn test_yaml_output() {
        let output = run(args("1000,50", Some(2000), Some(2001), OutputFormat::Yaml)).unwrap();
        assert!(output.contains("amount: 1000.5"));
    }
}
