//! Consumer price index table
//!
//! An `IndexTable` maps years to index values. It can only be built through
//! `IndexTable::new`, which enforces the table invariants, so every table the
//! rest of the crate sees is safe to divide by.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::{KpiError, KpiResult};

/// Smallest year accepted as a table key
pub const MIN_YEAR: i32 = 1000;

/// Largest year accepted as a table key
pub const MAX_YEAR: i32 = 9999;

/// Yearly KPI values from Statistics Norway (SSB). The 2024 value is an estimate.
const SSB_KPI: [(i32, f64); 25] = [
    (2000, 52.0),
    (2001, 53.5),
    (2002, 55.1),
    (2003, 56.2),
    (2004, 57.4),
    (2005, 58.7),
    (2006, 60.3),
    (2007, 61.8),
    (2008, 64.1),
    (2009, 65.7),
    (2010, 66.9),
    (2011, 68.4),
    (2012, 69.8),
    (2013, 71.2),
    (2014, 72.8),
    (2015, 74.3),
    (2016, 75.9),
    (2017, 77.8),
    (2018, 80.1),
    (2019, 82.3),
    (2020, 84.2),
    (2021, 86.9),
    (2022, 92.7),
    (2023, 98.4),
    (2024, 103.1),
];

/// Immutable year → index mapping
///
/// Invariants:
/// - at least one entry
/// - every year is a 4-digit year
/// - years are contiguous
/// - every index value is positive and finite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<i32, f64>", into = "BTreeMap<i32, f64>")]
pub struct IndexTable {
    entries: BTreeMap<i32, f64>,
}

impl IndexTable {
    /// Build a table from year/index pairs, checking all invariants
    pub fn new<I>(entries: I) -> KpiResult<Self>
    where
        I: IntoIterator<Item = (i32, f64)>,
    {
        let mut map = BTreeMap::new();
        for (year, value) in entries {
            if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
                return Err(KpiError::InvalidIndexTable(format!(
                    "{} is not a 4-digit year",
                    year
                )));
            }
            if !value.is_finite() || value <= 0.0 {
                return Err(KpiError::InvalidIndexTable(format!(
                    "index for {} must be a positive number, got {}",
                    year, value
                )));
            }
            if map.insert(year, value).is_some() {
                return Err(KpiError::InvalidIndexTable(format!(
                    "year {} appears more than once",
                    year
                )));
            }
        }

        let (first, last) = match (map.keys().next(), map.keys().next_back()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return Err(KpiError::InvalidIndexTable("table is empty".into())),
        };

        let expected = (last - first + 1) as usize;
        if map.len() != expected {
            let missing = (first..=last).find(|y| !map.contains_key(y));
            return Err(KpiError::InvalidIndexTable(format!(
                "years must be contiguous, {} is missing",
                missing.unwrap_or(first)
            )));
        }

        Ok(Self { entries: map })
    }

    /// The built-in SSB table, 2000-2024
    pub fn ssb() -> Self {
        Self {
            entries: SSB_KPI.iter().copied().collect(),
        }
    }

    /// Index value for a year
    pub fn get(&self, year: i32) -> Option<f64> {
        self.entries.get(&year).copied()
    }

    /// Check whether a year has an index value
    pub fn contains(&self, year: i32) -> bool {
        self.entries.contains_key(&year)
    }

    /// All years, oldest first
    pub fn years(&self) -> Vec<i32> {
        self.entries.keys().copied().collect()
    }

    /// All years, newest first (the order used by year pickers)
    pub fn years_desc(&self) -> Vec<i32> {
        self.entries.keys().rev().copied().collect()
    }

    pub fn first_year(&self) -> i32 {
        // Non-empty by construction
        self.entries.keys().next().copied().unwrap_or(MIN_YEAR)
    }

    pub fn last_year(&self) -> i32 {
        self.entries.keys().next_back().copied().unwrap_or(MIN_YEAR)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (year, index) pairs, oldest first
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.entries.iter().map(|(&y, &v)| (y, v))
    }
}

impl Default for IndexTable {
    fn default() -> Self {
        Self::ssb()
    }
}

impl TryFrom<BTreeMap<i32, f64>> for IndexTable {
    type Error = KpiError;

    fn try_from(map: BTreeMap<i32, f64>) -> Result<Self, Self::Error> {
        Self::new(map)
    }
}

impl From<IndexTable> for BTreeMap<i32, f64> {
    fn from(table: IndexTable) -> Self {
        table.entries
    }
}

/// Where the active index table was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    BuiltIn,
    File(PathBuf),
}

impl std::fmt::Display for TableSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableSource::BuiltIn => write!(f, "built-in (SSB 2000-2024)"),
            TableSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
