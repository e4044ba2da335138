//! Trend inflection detection

use crate::dataset::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Direction of the change that flagged a trend point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Falling,
}

/// A row where a numeric column swings sharply against its neighbors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub index: usize,
    pub column: String,
    pub direction: TrendDirection,
}

/// Walks each numeric column with a 3-record window and flags the middle
/// record when the relative change on either side exceeds the threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendDetector {
    /// Relative change threshold (0.10 = 10%)
    threshold: f64,
}

impl TrendDetector {
    pub fn new() -> Self {
        Self { threshold: 0.10 }
    }

    /// Set the relative change threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.max(0.0);
        self
    }

    /// Detect trend points across all numeric columns, deduplicated by row
    /// index and returned in dataset order. A row flagged on several columns
    /// keeps the first flagging column.
    pub fn detect(&self, data: &[Record], numeric_columns: &[String]) -> Vec<TrendPoint> {
        let mut by_index: BTreeMap<usize, TrendPoint> = BTreeMap::new();

        for column in numeric_columns {
            let values: Vec<Option<f64>> = data
                .iter()
                .map(|rec| rec.get(column).and_then(|v| v.as_f64()))
                .collect();

            for i in 1..data.len().saturating_sub(1) {
                let (Some(prev), Some(curr), Some(next)) =
                    (values[i - 1], values[i], values[i + 1])
                else {
                    continue;
                };

                let change_in = relative_change(prev, curr);
                let change_out = relative_change(curr, next);
                if change_in.abs() > self.threshold || change_out.abs() > self.threshold {
                    let leading = if change_in.abs() > change_out.abs() {
                        change_in
                    } else {
                        change_out
                    };
                    let direction = if leading >= 0.0 {
                        TrendDirection::Rising
                    } else {
                        TrendDirection::Falling
                    };
                    by_index.entry(i).or_insert_with(|| TrendPoint {
                        index: i,
                        column: column.clone(),
                        direction,
                    });
                }
            }
        }

        by_index.into_values().collect()
    }
}

impl Default for TrendDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Signed relative change from `a` to `b`; a zero base counts as 1.
fn relative_change(a: f64, b: f64) -> f64 {
    let denom = if a == 0.0 { 1.0 } else { a.abs() };
    (b - a) / denom
}
