//! Conversion result display formatting
//!
//! Turns a `ConversionResult` into the text shown by the CLI and the TUI
//! result panel.

use crate::config::Settings;
use crate::models::ConversionResult;

use super::format::{format_index, format_money, format_percentage};

/// Pre-formatted pieces of a conversion result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionView {
    /// The equivalent amount with currency, e.g. "1 982,69 NOK"
    pub headline: String,
    /// One sentence explaining the conversion
    pub explanation: String,
    pub source_label: String,
    pub source_index: String,
    pub target_label: String,
    pub target_index: String,
    /// Signed percentage with direction, e.g. "+98,3% (increase)"
    pub change: String,
}

impl ConversionView {
    pub fn new(result: &ConversionResult, settings: &Settings) -> Self {
        let request = &result.request;
        let headline = format_money(result.equivalent_amount, settings);

        let explanation = format!(
            "{} in {} is about {} in {} adjusted for the consumer price index.",
            format_money(request.amount, settings),
            request.source_year,
            headline,
            request.target_year
        );

        Self {
            headline,
            explanation,
            source_label: format!("KPI {}", request.source_year),
            source_index: format_index(result.source_index),
            target_label: format!("KPI {}", request.target_year),
            target_index: format_index(result.target_index),
            change: format!(
                "{} ({})",
                format_percentage(result.percentage_change, settings),
                result.direction()
            ),
        }
    }
}

/// Format a conversion result for terminal output
pub fn format_conversion(result: &ConversionResult, settings: &Settings) -> String {
    let view = ConversionView::new(result, settings);
    let label_width = view.source_label.len().max(view.target_label.len()).max(6);

    let mut output = String::new();
    output.push_str(&view.headline);
    output.push_str("\n\n");
    output.push_str(&view.explanation);
    output.push_str("\n\n");
    output.push_str(&format!(
        "{:<width$}  {}\n",
        view.source_label,
        view.source_index,
        width = label_width
    ));
    output.push_str(&format!(
        "{:<width$}  {}\n",
        view.target_label,
        view.target_index,
        width = label_width
    ));
    output.push_str(&format!(
        "{:<width$}  {}\n",
        "Change",
        view.change,
        width = label_width
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IndexTable;
    use crate::services::ConversionEngine;

    fn reference_result() -> ConversionResult {
        ConversionEngine::new(IndexTable::ssb())
            .convert(1000.0, 2000, 2024)
            .unwrap()
    }

    #[test]
    fn test_view_fields() {
        let view = ConversionView::new(&reference_result(), &Settings::default());
        assert_eq!(view.headline, "1 982,69 NOK");
        assert_eq!(
            view.explanation,
            "1 000,00 NOK in 2000 is about 1 982,69 NOK in 2024 adjusted for the consumer price index."
        );
        assert_eq!(view.source_label, "KPI 2000");
        assert_eq!(view.source_index, "52.0");
        assert_eq!(view.target_index, "103.1");
        assert_eq!(view.change, "+98,3% (increase)");
    }

    #[test]
    fn test_decrease_wording() {
        let result = ConversionEngine::new(IndexTable::ssb())
            .convert(1000.0, 2024, 2000)
            .unwrap();
        let view = ConversionView::new(&result, &Settings::default());
        assert_eq!(view.change, "-49,6% (decrease)");
    }

    #[test]
    fn test_format_conversion_layout() {
        let text = format_conversion(&reference_result(), &Settings::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "1 982,69 NOK");
        assert!(lines.contains(&"KPI 2000  52.0"));
        assert!(lines.contains(&"KPI 2024  103.1"));
        assert!(lines.contains(&"Change    +98,3% (increase)"));
    }
}
