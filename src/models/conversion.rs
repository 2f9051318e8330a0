//! Conversion request and result types

use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount to move from one year's prices to another's
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub amount: f64,
    pub source_year: i32,
    pub target_year: i32,
}

impl ConversionRequest {
    pub fn new(amount: f64, source_year: i32, target_year: i32) -> Self {
        Self {
            amount,
            source_year,
            target_year,
        }
    }
}

/// Direction of the price change between the two years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Increase,
    Decrease,
    Unchanged,
}

impl fmt::Display for ChangeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeDirection::Increase => write!(f, "increase"),
            ChangeDirection::Decrease => write!(f, "decrease"),
            ChangeDirection::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Outcome of a conversion
///
/// Values are unrounded; rounding happens in the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub request: ConversionRequest,
    pub equivalent_amount: f64,
    pub source_index: f64,
    pub target_index: f64,
    pub percentage_change: f64,
}

impl ConversionResult {
    pub fn direction(&self) -> ChangeDirection {
        if self.percentage_change > 0.0 {
            ChangeDirection::Increase
        } else if self.percentage_change < 0.0 {
            ChangeDirection::Decrease
        } else {
            ChangeDirection::Unchanged
        }
    }
}
