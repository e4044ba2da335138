//! Feature detectors
//!
//! Locate the rows worth keeping regardless of where they fall in the
//! sampling grid:
//! - IQR outliers per numeric column
//! - Trend points where a value swings sharply against its neighbors

mod outliers;
mod trends;

pub use outliers::{OutlierBounds, OutlierDetector, OutlierReport};
pub use trends::{TrendDetector, TrendDirection, TrendPoint};
