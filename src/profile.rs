//! Column classification
//!
//! Classifies columns as numeric or date-like so the detectors and the
//! temporal sampler know where to look. The classification is per-call and
//! never persisted.

use crate::dataset::Record;
use serde::{Deserialize, Serialize};

/// Column classification for one dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Columns whose first value is a number or a numeric string
    pub numeric_columns: Vec<String>,
    /// Columns whose first value parses as a date
    pub date_columns: Vec<String>,
    pub n_rows: usize,
}

impl ColumnProfile {
    pub fn has_numeric(&self) -> bool {
        !self.numeric_columns.is_empty()
    }
}

/// Classifies columns by probing the first record.
#[derive(Debug, Clone, Default)]
pub struct ColumnProfiler;

impl ColumnProfiler {
    pub fn new() -> Self {
        ColumnProfiler
    }

    pub fn profile(&self, data: &[Record]) -> ColumnProfile {
        let mut profile = ColumnProfile {
            n_rows: data.len(),
            ..ColumnProfile::default()
        };
        let Some(first) = data.first() else {
            return profile;
        };

        // Sorted for a deterministic column order; HashMap iteration is not.
        let mut names: Vec<&String> = first.keys().collect();
        names.sort();

        for name in names {
            let value = &first[name];
            if value.as_datetime().is_some() {
                profile.date_columns.push(name.clone());
            } else if value.as_f64().is_some() {
                profile.numeric_columns.push(name.clone());
            }
        }
        profile
    }
}
