//! Conversion engine
//!
//! Validates user input and converts amounts between years using the index
//! table it was constructed with. Everything here is pure: no I/O and no
//! state beyond the table.

use tracing::debug;

use crate::error::{KpiError, KpiResult};
use crate::models::{ConversionRequest, ConversionResult, IndexTable};

/// Amounts must be strictly below this value
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// Default number of years to look back when picking a source year
pub const DEFAULT_LOOKBACK_YEARS: u32 = 5;

/// Converts amounts between years using an injected index table
#[derive(Debug, Clone)]
pub struct ConversionEngine {
    table: IndexTable,
}

impl ConversionEngine {
    /// Create an engine over the given table
    pub fn new(table: IndexTable) -> Self {
        Self { table }
    }

    /// The table this engine converts with
    pub fn table(&self) -> &IndexTable {
        &self.table
    }

    /// Check that an amount and year pair can be converted
    ///
    /// Checks run in order: amount, then same year, then index data
    /// (source year first). `None` means the amount was missing or could
    /// not be parsed.
    pub fn validate(
        &self,
        amount: Option<f64>,
        source_year: i32,
        target_year: i32,
    ) -> KpiResult<()> {
        match amount {
            Some(a) if a.is_finite() && a > 0.0 && a < MAX_AMOUNT => {}
            _ => return Err(KpiError::InvalidAmount),
        }

        if source_year == target_year {
            return Err(KpiError::SameYear);
        }

        for year in [source_year, target_year] {
            if !self.table.contains(year) {
                return Err(KpiError::missing_year(year));
            }
        }

        Ok(())
    }

    /// Convert an amount from one year's prices to another's
    pub fn convert(
        &self,
        amount: f64,
        source_year: i32,
        target_year: i32,
    ) -> KpiResult<ConversionResult> {
        self.validate(Some(amount), source_year, target_year)?;

        let source_index = self
            .table
            .get(source_year)
            .ok_or_else(|| KpiError::missing_year(source_year))?;
        let target_index = self
            .table
            .get(target_year)
            .ok_or_else(|| KpiError::missing_year(target_year))?;

        let equivalent_amount = amount * target_index / source_index;
        let percentage_change = (target_index - source_index) / source_index * 100.0;

        debug!(
            amount,
            source_year, target_year, equivalent_amount, percentage_change, "converted amount"
        );

        Ok(ConversionResult {
            request: ConversionRequest::new(amount, source_year, target_year),
            equivalent_amount,
            source_index,
            target_index,
            percentage_change,
        })
    }

    /// Convert a prepared request
    pub fn convert_request(&self, request: &ConversionRequest) -> KpiResult<ConversionResult> {
        self.convert(request.amount, request.source_year, request.target_year)
    }

    /// Pick the default (source, target) years for a form or command
    ///
    /// The target is the newest year in the table. The source is
    /// `lookback` years before `current_year`, but never before the first
    /// table year; when that year is unavailable or equals the target, the
    /// year before the target is used instead.
    pub fn default_years(&self, current_year: i32, lookback: u32) -> (i32, i32) {
        let first = self.table.first_year();
        let target = self.table.last_year();

        let lookback = i32::try_from(lookback).unwrap_or(i32::MAX);
        let candidate = current_year.saturating_sub(lookback).max(first);
        let source = if self.table.contains(candidate) && candidate != target {
            candidate
        } else if target > first {
            target - 1
        } else {
            target
        };

        (source, target)
    }
}

/// Parse an amount typed by a user
///
/// Accepts `,` as decimal separator and ignores spaces used as thousands
/// separators. Returns `None` for empty or non-numeric input.
pub fn parse_amount(input: &str) -> Option<f64> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{a0}' | '\u{202f}'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() || cleaned.matches('.').count() > 1 {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
