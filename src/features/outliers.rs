//! IQR outlier detection

use crate::dataset::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// IQR bounds and outlier count for one numeric column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlierBounds {
    pub column: String,
    pub lower: f64,
    pub upper: f64,
    pub n_outliers: usize,
}

/// Outlier detection output across all numeric columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutlierReport {
    /// Row indices flagged on at least one column, deduplicated, ascending
    pub indices: BTreeSet<usize>,
    /// Per-column bounds for columns that yielded usable values
    pub columns: Vec<OutlierBounds>,
}

/// Flags rows falling outside `[Q1 - k*IQR, Q3 + k*IQR]` per numeric column.
///
/// Quartiles use simple positional indexing into the sorted values, not
/// interpolation. A row flagged on several columns appears once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlierDetector {
    /// IQR multiplier for the bounds
    multiplier: f64,
}

impl OutlierDetector {
    pub fn new() -> Self {
        Self { multiplier: 1.5 }
    }

    /// Set the IQR multiplier
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier.max(0.0);
        self
    }

    pub fn detect(&self, data: &[Record], numeric_columns: &[String]) -> OutlierReport {
        let mut report = OutlierReport::default();

        for column in numeric_columns {
            let mut values: Vec<(usize, f64)> = data
                .iter()
                .enumerate()
                .filter_map(|(i, rec)| {
                    rec.get(column).and_then(|v| v.as_f64()).map(|n| (i, n))
                })
                .collect();
            if values.is_empty() {
                continue;
            }

            let mut sorted: Vec<f64> = values.iter().map(|&(_, n)| n).collect();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

            let q1 = sorted[(sorted.len() as f64 * 0.25) as usize];
            let q3 = sorted[(sorted.len() as f64 * 0.75) as usize];
            let iqr = q3 - q1;
            let lower = q1 - self.multiplier * iqr;
            let upper = q3 + self.multiplier * iqr;

            let mut n_outliers = 0;
            for (i, n) in values.drain(..) {
                if n < lower || n > upper {
                    report.indices.insert(i);
                    n_outliers += 1;
                }
            }

            report.columns.push(OutlierBounds {
                column: column.clone(),
                lower,
                upper,
                n_outliers,
            });
        }

        report
    }
}

impl Default for OutlierDetector {
    fn default() -> Self {
        Self::new()
    }
}
