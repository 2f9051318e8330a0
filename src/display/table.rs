//! Index table display

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::IndexTable;

use super::format::{format_index, format_percentage};

#[derive(Tabled)]
struct IndexRowView {
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "KPI")]
    index: String,
    #[tabled(rename = "Change")]
    change: String,
}

/// Format the index table, newest year first, with year-over-year change
pub fn format_index_table(table: &IndexTable, settings: &Settings) -> String {
    let mut previous: Option<f64> = None;
    let mut rows: Vec<IndexRowView> = table
        .iter()
        .map(|(year, index)| {
            let change = previous
                .map(|prev| format_percentage((index - prev) / prev * 100.0, settings))
                .unwrap_or_else(|| "-".to_string());
            previous = Some(index);
            IndexRowView {
                year,
                index: format_index(index),
                change,
            }
        })
        .collect();
    rows.reverse();

    Table::new(rows).with(Style::rounded()).to_string()
}
