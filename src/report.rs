//! Result reporting
//!
//! Packages a selection of row indices into a [`SamplingResult`] with the
//! compression ratio, per-method confidence and quality scores, a display
//! message, and follow-up recommendations.

use crate::dataset::Record;
use crate::features::OutlierBounds;
use crate::strategy::SamplingMethod;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Self-reported quality of the sampled dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataQuality {
    Excellent,
    Good,
    Fair,
    Degraded,
}

/// Per-method confidence and quality constants.
///
/// These are rough self-reported scores for UI display, kept configurable
/// rather than re-derived.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreTable {
    pub statistical: (f64, DataQuality),
    pub temporal: (f64, DataQuality),
    pub cluster: (f64, DataQuality),
    pub importance: (f64, DataQuality),
    pub hybrid: (f64, DataQuality),
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            statistical: (0.95, DataQuality::Excellent),
            temporal: (0.92, DataQuality::Excellent),
            cluster: (0.88, DataQuality::Good),
            importance: (0.85, DataQuality::Good),
            hybrid: (0.90, DataQuality::Excellent),
        }
    }
}

impl ScoreTable {
    pub fn for_method(&self, method: SamplingMethod) -> (f64, DataQuality) {
        match method {
            SamplingMethod::Statistical => self.statistical,
            SamplingMethod::Temporal => self.temporal,
            SamplingMethod::Cluster => self.cluster,
            SamplingMethod::Importance => self.importance,
            SamplingMethod::Hybrid => self.hybrid,
        }
    }
}

/// Output of one sampling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingResult {
    /// Selected records, cloned unmodified from the input
    pub sampled_data: Vec<Record>,
    /// Row indices of the selected records in the original dataset
    pub sampled_indices: Vec<usize>,
    pub original_row_count: usize,
    pub sampled_row_count: usize,
    /// `sampled_row_count / original_row_count`
    pub compression_ratio: f64,
    pub preserved_features: BTreeSet<String>,
    /// Method that actually ran ("none" on the identity path)
    pub sampling_method: String,
    /// Set when the requested method was unsuitable and another ran instead
    pub fallback_from: Option<SamplingMethod>,
    pub confidence: f64,
    pub data_quality: DataQuality,
    pub user_message: String,
    pub recommendations: Vec<String>,
}

/// Assembles [`SamplingResult`]s. Pure string templating, no algorithms.
#[derive(Debug, Clone, Default)]
pub struct ResultReporter;

impl ResultReporter {
    pub fn new() -> Self {
        ResultReporter
    }

    /// Identity result: the dataset fit the budget, nothing was dropped.
    pub fn identity(&self, data: &[Record]) -> SamplingResult {
        let n = data.len();
        SamplingResult {
            sampled_data: data.to_vec(),
            sampled_indices: (0..n).collect(),
            original_row_count: n,
            sampled_row_count: n,
            compression_ratio: 1.0,
            preserved_features: BTreeSet::from(["all".to_string()]),
            sampling_method: "none".to_string(),
            fallback_from: None,
            confidence: 1.0,
            data_quality: DataQuality::Excellent,
            user_message: format!("Analyzed all {} rows; no sampling needed", n),
            recommendations: Vec::new(),
        }
    }

    /// Package a reduced selection.
    #[allow(clippy::too_many_arguments)]
    pub fn reduced(
        &self,
        data: &[Record],
        indices: Vec<usize>,
        method: SamplingMethod,
        fallback_from: Option<SamplingMethod>,
        scores: &ScoreTable,
        preserved_features: &[&str],
        outlier_columns: &[OutlierBounds],
    ) -> SamplingResult {
        let original = data.len();
        let sampled = indices.len();
        let ratio = if original == 0 {
            1.0
        } else {
            sampled as f64 / original as f64
        };
        let (confidence, data_quality) = scores.for_method(method);

        let mut user_message = format!(
            "Analyzed {} of {} rows ({:.1}%) using {} sampling",
            sampled,
            original,
            ratio * 100.0,
            method
        );
        if let Some(requested) = fallback_from {
            user_message.push_str(&format!(" (requested {} was unsuitable)", requested));
        }

        let mut recommendations = vec![
            "Sampled data preserves the statistical shape of the full dataset".to_string(),
            "Key metrics are representative within the stated confidence".to_string(),
        ];
        for bounds in outlier_columns {
            if original > 0 && bounds.n_outliers as f64 / original as f64 > 0.05 {
                recommendations.push(format!(
                    "Column '{}' has {} outliers; review before drawing conclusions",
                    bounds.column, bounds.n_outliers
                ));
            }
        }
        if original > 10_000 {
            recommendations.push(
                "Consider analyzing by segment (time period, region) for deeper insights"
                    .to_string(),
            );
            recommendations.push(
                "Full-dataset analysis is available on premium plans".to_string(),
            );
        }

        SamplingResult {
            sampled_data: indices.iter().map(|&i| data[i].clone()).collect(),
            sampled_indices: indices,
            original_row_count: original,
            sampled_row_count: sampled,
            compression_ratio: ratio,
            preserved_features: preserved_features.iter().map(|s| s.to_string()).collect(),
            sampling_method: method.as_str().to_string(),
            fallback_from,
            confidence,
            data_quality,
            user_message,
            recommendations,
        }
    }
}
