//! Sampling engine
//!
//! Dispatches a dataset and strategy to one of five reduction algorithms:
//! - Statistical: systematic grid with a random start offset
//! - Temporal: date-sorted even spacing with first/last anchors
//! - Cluster: contiguous equal segments, even sub-interval per segment
//! - Importance: outliers + trend points + shuffled remainder
//! - Hybrid: statistical + outlier + temporal composition
//!
//! Datasets that fit the budget take the identity path. Methods that need
//! columns the data lacks fall back to statistical sampling; the fallback is
//! reported, not silent.

mod cluster;
mod hybrid;
mod importance;
mod statistical;
mod temporal;

use crate::error::{Result, SamplingError};
use crate::dataset::Record;
use crate::features::{OutlierDetector, OutlierReport, TrendDetector, TrendPoint};
use crate::profile::{ColumnProfile, ColumnProfiler};
use crate::report::{ResultReporter, SamplingResult, ScoreTable};
use crate::strategy::{BucketThresholds, SamplingMethod, SamplingStrategy, StrategyClassifier};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

/// Adaptive sampling engine.
///
/// Pure and synchronous: each call works on its own dataset reference with
/// no shared state, so concurrent callers are safe. Randomness comes from a
/// seedable generator; set a seed for reproducible runs.
#[derive(Debug, Clone)]
pub struct Sampler {
    thresholds: BucketThresholds,
    scores: ScoreTable,
    outlier_detector: OutlierDetector,
    trend_detector: TrendDetector,
    seed: Option<u64>,
}

impl Sampler {
    pub fn new() -> Self {
        Self {
            thresholds: BucketThresholds::default(),
            scores: ScoreTable::default(),
            outlier_detector: OutlierDetector::new(),
            trend_detector: TrendDetector::new(),
            seed: None,
        }
    }

    /// Set the random seed for reproducible sampling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the bucket thresholds
    pub fn with_thresholds(mut self, thresholds: BucketThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Override the per-method confidence/quality constants
    pub fn with_scores(mut self, scores: ScoreTable) -> Self {
        self.scores = scores;
        self
    }

    /// Sample with a strategy derived from the row count.
    pub fn sample(&self, data: &[Record]) -> Result<SamplingResult> {
        let recommendation = StrategyClassifier::with_thresholds(self.thresholds).classify(data.len());
        debug!(
            rows = data.len(),
            bucket = recommendation.bucket.as_str(),
            max_rows = recommendation.strategy.max_rows,
            "derived sampling strategy"
        );
        self.sample_with_strategy(data, &recommendation.strategy)
    }

    /// Sample with a caller-supplied strategy.
    pub fn sample_with_strategy(
        &self,
        data: &[Record],
        strategy: &SamplingStrategy,
    ) -> Result<SamplingResult> {
        if strategy.max_rows == 0 {
            return Err(SamplingError::InvalidStrategy {
                name: "max_rows".to_string(),
                value: "0".to_string(),
                reason: "must be positive".to_string(),
            });
        }

        let reporter = ResultReporter::new();
        if data.len() <= strategy.max_rows {
            return Ok(reporter.identity(data));
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let profile = ColumnProfiler::new().profile(data);
        let outliers = if profile.has_numeric() {
            self.outlier_detector.detect(data, &profile.numeric_columns)
        } else {
            OutlierReport::default()
        };

        let (indices, method, fallback_from) =
            self.dispatch(data, strategy, &profile, &outliers, &mut rng);

        debug!(
            method = method.as_str(),
            selected = indices.len(),
            "sampling complete"
        );

        Ok(reporter.reduced(
            data,
            indices,
            method,
            fallback_from,
            &self.scores,
            preserved_features(method),
            &outliers.columns,
        ))
    }

    fn dispatch(
        &self,
        data: &[Record],
        strategy: &SamplingStrategy,
        profile: &ColumnProfile,
        outliers: &OutlierReport,
        rng: &mut StdRng,
    ) -> (Vec<usize>, SamplingMethod, Option<SamplingMethod>) {
        let n = data.len();
        let max_rows = strategy.max_rows;

        match strategy.method {
            SamplingMethod::Statistical => {
                let picked = statistical::select(
                    n,
                    max_rows,
                    strategy.preserve_outliers,
                    &outliers.indices,
                    rng,
                );
                (picked, SamplingMethod::Statistical, None)
            }
            SamplingMethod::Temporal => match profile.date_columns.first() {
                Some(column) => {
                    let picked = temporal::select(data, column, max_rows);
                    (picked, SamplingMethod::Temporal, None)
                }
                None => fall_back(n, strategy, outliers, rng),
            },
            SamplingMethod::Cluster if profile.has_numeric() => {
                (cluster::select(n, max_rows), SamplingMethod::Cluster, None)
            }
            SamplingMethod::Importance if profile.has_numeric() => {
                let trends: Vec<TrendPoint> = if strategy.preserve_trends {
                    self.trend_detector.detect(data, &profile.numeric_columns)
                } else {
                    Vec::new()
                };
                let picked = importance::select(n, max_rows, &outliers.indices, &trends, rng);
                (picked, SamplingMethod::Importance, None)
            }
            SamplingMethod::Cluster | SamplingMethod::Importance => {
                fall_back(n, strategy, outliers, rng)
            }
            SamplingMethod::Hybrid => {
                let picked = hybrid::select(data, max_rows, profile, &outliers.indices, rng);
                (picked, SamplingMethod::Hybrid, None)
            }
        }
    }
}

/// Statistical sampling in place of a method whose column requirements the
/// data does not meet; the requested method is reported in the result.
fn fall_back(
    n: usize,
    strategy: &SamplingStrategy,
    outliers: &OutlierReport,
    rng: &mut StdRng,
) -> (Vec<usize>, SamplingMethod, Option<SamplingMethod>) {
    warn!(
        requested = strategy.method.as_str(),
        "column requirements unmet; falling back to statistical sampling"
    );
    let picked = statistical::select(
        n,
        strategy.max_rows,
        strategy.preserve_outliers,
        &outliers.indices,
        rng,
    );
    (picked, SamplingMethod::Statistical, Some(strategy.method))
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

fn preserved_features(method: SamplingMethod) -> &'static [&'static str] {
    match method {
        SamplingMethod::Statistical => &["statistical_distribution", "representative_sample"],
        SamplingMethod::Temporal => &["temporal_patterns", "seasonality"],
        SamplingMethod::Cluster => &["cluster_structure", "representative_sample"],
        SamplingMethod::Importance => &["outliers", "trends", "information_density"],
        SamplingMethod::Hybrid => &[
            "statistical_sample",
            "outliers",
            "trends",
            "clusters",
            "temporal_patterns",
        ],
    }
}
