//! Adaptive dataset sampling engine
//!
//! Reduces an in-memory tabular dataset to a bounded size for downstream
//! analysis while preserving its statistical shape: distribution, outliers,
//! trend inflection points, and temporal structure when a date column is
//! present.
//!
//! # Modules
//!
//! - [`dataset`] - Record and scalar value types
//! - [`profile`] - Numeric / date-like column classification
//! - [`features`] - IQR outlier and trend-point detectors
//! - [`strategy`] - Row-count buckets and strategy recommendation
//! - [`sampling`] - The five reduction algorithms and the engine
//! - [`report`] - Result packaging: ratio, confidence, quality, messages
//!
//! # Example
//!
//! ```
//! use adaptive_sampling::{Sampler, StrategyClassifier};
//! # use adaptive_sampling::dataset::{Record, Value};
//!
//! # let dataset: Vec<Record> = (0..1500).map(|i| {
//! #     let mut rec = Record::new();
//! #     rec.insert("x".to_string(), Value::Number(i as f64));
//! #     rec
//! # }).collect();
//! let recommendation = StrategyClassifier::new().classify(dataset.len());
//! let result = Sampler::new().with_seed(42).sample(&dataset).unwrap();
//! assert!(result.sampled_row_count <= recommendation.strategy.max_rows);
//! ```

pub mod error;

pub mod dataset;
pub mod features;
pub mod profile;
pub mod report;
pub mod sampling;
pub mod strategy;

pub use dataset::{Record, Value};
pub use error::{Result, SamplingError};
pub use features::{OutlierDetector, TrendDetector};
pub use profile::{ColumnProfile, ColumnProfiler};
pub use report::{DataQuality, SamplingResult, ScoreTable};
pub use sampling::Sampler;
pub use strategy::{
    BucketThresholds, SamplingMethod, SamplingStrategy, SizeBucket, StrategyClassifier,
    StrategyRecommendation,
};
