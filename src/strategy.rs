//! Strategy classification
//!
//! Maps a row count to a size bucket and a recommended sampling strategy.
//! Thresholds live in an immutable [`BucketThresholds`] config so tests and
//! callers can override them per call.

use serde::{Deserialize, Serialize};

/// Sampling method selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingMethod {
    Statistical,
    Temporal,
    Cluster,
    Importance,
    Hybrid,
}

impl SamplingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SamplingMethod::Statistical => "statistical",
            SamplingMethod::Temporal => "temporal",
            SamplingMethod::Cluster => "cluster",
            SamplingMethod::Importance => "importance",
            SamplingMethod::Hybrid => "hybrid",
        }
    }
}

impl std::fmt::Display for SamplingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row-count size classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeBucket {
    Optimal,
    Manageable,
    Large,
    VeryLarge,
    Massive,
    Extreme,
}

impl SizeBucket {
    /// Fraction of rows retained after sampling
    pub fn retention(&self) -> f64 {
        match self {
            SizeBucket::Optimal => 1.0,
            SizeBucket::Manageable => 0.8,
            SizeBucket::Large => 0.6,
            SizeBucket::VeryLarge => 0.4,
            SizeBucket::Massive => 0.25,
            SizeBucket::Extreme => 0.15,
        }
    }

    /// Default sampling method for the bucket
    pub fn default_method(&self) -> SamplingMethod {
        match self {
            SizeBucket::Optimal | SizeBucket::Manageable => SamplingMethod::Statistical,
            SizeBucket::Large | SizeBucket::VeryLarge => SamplingMethod::Hybrid,
            SizeBucket::Massive => SamplingMethod::Cluster,
            SizeBucket::Extreme => SamplingMethod::Importance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeBucket::Optimal => "optimal",
            SizeBucket::Manageable => "manageable",
            SizeBucket::Large => "large",
            SizeBucket::VeryLarge => "very_large",
            SizeBucket::Massive => "massive",
            SizeBucket::Extreme => "extreme",
        }
    }
}

/// Row-count upper bounds (inclusive) for each bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketThresholds {
    pub optimal: usize,
    pub manageable: usize,
    pub large: usize,
    pub very_large: usize,
    pub massive: usize,
}

impl Default for BucketThresholds {
    fn default() -> Self {
        Self {
            optimal: 500,
            manageable: 1_000,
            large: 2_000,
            very_large: 5_000,
            massive: 10_000,
        }
    }
}

impl BucketThresholds {
    pub fn bucket_for(&self, n_rows: usize) -> SizeBucket {
        if n_rows <= self.optimal {
            SizeBucket::Optimal
        } else if n_rows <= self.manageable {
            SizeBucket::Manageable
        } else if n_rows <= self.large {
            SizeBucket::Large
        } else if n_rows <= self.very_large {
            SizeBucket::VeryLarge
        } else if n_rows <= self.massive {
            SizeBucket::Massive
        } else {
            SizeBucket::Extreme
        }
    }
}

/// How to reduce a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingStrategy {
    /// Sample budget; reduction only happens when the dataset is larger
    pub max_rows: usize,
    pub method: SamplingMethod,
    pub preserve_outliers: bool,
    pub preserve_seasonality: bool,
    pub preserve_trends: bool,
}

impl SamplingStrategy {
    pub fn new(max_rows: usize, method: SamplingMethod) -> Self {
        Self {
            max_rows,
            method,
            preserve_outliers: true,
            preserve_seasonality: true,
            preserve_trends: true,
        }
    }
}

/// Classifier output: bucket, recommendation, and a display message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyRecommendation {
    pub bucket: SizeBucket,
    pub requires_sampling: bool,
    pub strategy: SamplingStrategy,
    pub user_message: String,
}

/// Pure, total classifier from row count to recommendation.
#[derive(Debug, Clone, Default)]
pub struct StrategyClassifier {
    thresholds: BucketThresholds,
}

impl StrategyClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: BucketThresholds) -> Self {
        Self { thresholds }
    }

    pub fn classify(&self, n_rows: usize) -> StrategyRecommendation {
        let bucket = self.thresholds.bucket_for(n_rows);
        let retention = bucket.retention();
        let max_rows = ((n_rows as f64) * retention) as usize;
        let requires_sampling = retention < 1.0;

        let user_message = if requires_sampling {
            format!(
                "Dataset is {} ({} rows); sampling down to {:.0}% ({} rows)",
                bucket.as_str(),
                n_rows,
                retention * 100.0,
                max_rows
            )
        } else {
            format!(
                "Dataset is {} ({} rows); no sampling needed",
                bucket.as_str(),
                n_rows
            )
        };

        StrategyRecommendation {
            bucket,
            requires_sampling,
            strategy: SamplingStrategy::new(max_rows.max(1), bucket.default_method()),
            user_message,
        }
    }
}
