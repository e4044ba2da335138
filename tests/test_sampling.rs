//! Integration tests for the adaptive sampling engine: strategy
//! classification, the five reduction algorithms, and result reporting

use adaptive_sampling::dataset::{Record, Value};
use adaptive_sampling::{
    DataQuality, Sampler, SamplingMethod, SamplingStrategy, SizeBucket, StrategyClassifier,
};

// ============================================================================
// Test data builders
// ============================================================================

/// Sales-like dataset: one date column, three numeric columns, a few spikes.
fn sales_data(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let mut rec = Record::new();
            rec.insert(
                "date".to_string(),
                Value::from(
                    format!("2023-{:02}-{:02}", (i / 28) % 12 + 1, i % 28 + 1).as_str(),
                ),
            );
            let spike = if i % 500 == 250 { 5_000.0 } else { 0.0 };
            rec.insert("revenue".to_string(), Value::Number(100.0 + (i % 37) as f64 + spike));
            rec.insert("units".to_string(), Value::Number((i % 13) as f64));
            rec.insert("margin".to_string(), Value::Number(0.2 + (i % 5) as f64 * 0.01));
            rec.insert("region".to_string(), Value::from(["north", "south"][i % 2]));
            rec
        })
        .collect()
}

fn numeric_only(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let mut rec = Record::new();
            rec.insert("value".to_string(), Value::Number((i % 100) as f64));
            rec
        })
        .collect()
}

// ============================================================================
// Identity and budget properties
// ============================================================================

#[test]
fn test_small_dataset_identity() {
    let data = sales_data(300);
    let recommendation = StrategyClassifier::new().classify(data.len());
    assert_eq!(recommendation.bucket, SizeBucket::Optimal);
    assert!(!recommendation.requires_sampling);

    let result = Sampler::new().sample(&data).unwrap();
    assert_eq!(result.sampling_method, "none");
    assert_eq!(result.sampled_row_count, 300);
    assert_eq!(result.compression_ratio, 1.0);
    assert_eq!(result.confidence, 1.0);
    assert_eq!(result.data_quality, DataQuality::Excellent);
    assert!(result.preserved_features.contains("all"));
    assert_eq!(result.sampled_data, data);
}

#[test]
fn test_budget_property_across_methods() {
    let data = sales_data(3_000);
    let sampler = Sampler::new().with_seed(17);

    for method in [
        SamplingMethod::Statistical,
        SamplingMethod::Temporal,
        SamplingMethod::Cluster,
        SamplingMethod::Importance,
        SamplingMethod::Hybrid,
    ] {
        let strategy = SamplingStrategy::new(800, method);
        let result = sampler.sample_with_strategy(&data, &strategy).unwrap();
        assert!(
            result.sampled_row_count <= 800,
            "{} exceeded budget: {}",
            method,
            result.sampled_row_count
        );
        assert_eq!(result.sampled_row_count, result.sampled_data.len());
        assert!(result.compression_ratio <= 1.0);
    }
}

#[test]
fn test_sampled_data_is_subsequence_of_input() {
    let data = numeric_only(2_000);
    let strategy = SamplingStrategy::new(400, SamplingMethod::Statistical);
    let result = Sampler::new().with_seed(5).sample_with_strategy(&data, &strategy).unwrap();

    // ascending, unique indices pointing at unmodified records
    for pair in result.sampled_indices.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    for (pos, &idx) in result.sampled_indices.iter().enumerate() {
        assert_eq!(result.sampled_data[pos], data[idx]);
    }
}

// ============================================================================
// Worked scenarios
// ============================================================================

#[test]
fn test_very_large_dataset_hybrid_scenario() {
    // 2400 rows with a date column and numeric columns
    let data = sales_data(2_400);
    let recommendation = StrategyClassifier::new().classify(data.len());
    assert_eq!(recommendation.bucket, SizeBucket::VeryLarge);
    assert_eq!(recommendation.strategy.method, SamplingMethod::Hybrid);
    assert_eq!(recommendation.strategy.max_rows, 960);

    let result = Sampler::new().with_seed(21).sample(&data).unwrap();
    assert_eq!(result.sampling_method, "hybrid");
    assert_eq!(result.sampled_row_count, 960);
    assert!((result.compression_ratio - 0.4).abs() < 1e-9);
    assert_eq!(result.confidence, 0.90);
    assert_eq!(result.data_quality, DataQuality::Excellent);
    assert!(result.preserved_features.contains("outliers"));
    assert!(result.preserved_features.contains("temporal_patterns"));
}

#[test]
fn test_large_dataset_hybrid_scenario() {
    let data = sales_data(1_800);
    let recommendation = StrategyClassifier::new().classify(data.len());
    assert_eq!(recommendation.bucket, SizeBucket::Large);
    assert_eq!(recommendation.strategy.max_rows, 1_080);
    assert_eq!(recommendation.strategy.method, SamplingMethod::Hybrid);

    let result = Sampler::new().with_seed(21).sample(&data).unwrap();
    assert_eq!(result.sampled_row_count, 1_080);
    assert!((result.compression_ratio - 0.6).abs() < 1e-9);
}

#[test]
fn test_extreme_dataset_importance_scenario() {
    // 15000 rows, no date column
    let data = numeric_only(15_000);
    let recommendation = StrategyClassifier::new().classify(data.len());
    assert_eq!(recommendation.bucket, SizeBucket::Extreme);
    assert_eq!(recommendation.strategy.method, SamplingMethod::Importance);
    assert_eq!(recommendation.strategy.max_rows, 2_250);

    let result = Sampler::new().with_seed(8).sample(&data).unwrap();
    assert_eq!(result.sampling_method, "importance");
    assert_eq!(result.sampled_row_count, 2_250);
    assert!((result.compression_ratio - 0.15).abs() < 1e-9);
    assert_eq!(result.confidence, 0.85);
    assert_eq!(result.data_quality, DataQuality::Good);

    // large-dataset reporting kicks in past 10k rows
    assert!(result.recommendations.iter().any(|r| r.contains("segment")));
    assert!(result.recommendations.iter().any(|r| r.contains("premium")));
}

// ============================================================================
// Outlier inclusion
// ============================================================================

#[test]
fn test_outliers_preserved_by_statistical_importance_hybrid() {
    let data = sales_data(3_000); // spikes at 250, 750, 1250, ...
    let sampler = Sampler::new().with_seed(33);

    for method in [
        SamplingMethod::Statistical,
        SamplingMethod::Importance,
        SamplingMethod::Hybrid,
    ] {
        let strategy = SamplingStrategy::new(900, method);
        let result = sampler.sample_with_strategy(&data, &strategy).unwrap();
        for spike in (250..3_000).step_by(500) {
            assert!(
                result.sampled_indices.contains(&spike),
                "{} dropped outlier row {}",
                method,
                spike
            );
        }
    }
}

#[test]
fn test_outlier_heavy_data_keeps_every_outlier() {
    // 20% of rows are extreme, more than the nominal 30% outlier share of a
    // 500-row budget can hold alongside the other allocations
    let data: Vec<Record> = (0..1_000)
        .map(|i| {
            let mut rec = Record::new();
            let value = if i >= 800 { 1_000.0 } else { 10.0 };
            rec.insert("value".to_string(), Value::Number(value));
            rec
        })
        .collect();

    let sampler = Sampler::new().with_seed(42);
    for method in [SamplingMethod::Importance, SamplingMethod::Hybrid] {
        let strategy = SamplingStrategy::new(500, method);
        let result = sampler.sample_with_strategy(&data, &strategy).unwrap();
        assert_eq!(result.sampled_row_count, 500);
        for idx in 800..1_000 {
            assert!(
                result.sampled_indices.contains(&idx),
                "{} dropped outlier row {}",
                method,
                idx
            );
        }
    }
}

// ============================================================================
// Temporal ordering and fallback
// ============================================================================

#[test]
fn test_temporal_output_ordered_by_date() {
    let data = sales_data(2_000);
    let strategy = SamplingStrategy::new(400, SamplingMethod::Temporal);
    let result = Sampler::new().with_seed(3).sample_with_strategy(&data, &strategy).unwrap();

    assert_eq!(result.sampling_method, "temporal");
    assert_eq!(result.confidence, 0.92);
    assert!(result.fallback_from.is_none());

    let dates: Vec<_> = result
        .sampled_data
        .iter()
        .map(|rec| rec["date"].as_datetime().unwrap())
        .collect();
    for pair in dates.windows(2) {
        assert!(pair[0] <= pair[1], "temporal output not date-ordered");
    }
}

#[test]
fn test_temporal_fallback_equals_statistical() {
    let data = numeric_only(2_000);
    let sampler = Sampler::new().with_seed(12);

    let fallback = sampler
        .sample_with_strategy(&data, &SamplingStrategy::new(500, SamplingMethod::Temporal))
        .unwrap();
    let direct = sampler
        .sample_with_strategy(&data, &SamplingStrategy::new(500, SamplingMethod::Statistical))
        .unwrap();

    assert_eq!(fallback.fallback_from, Some(SamplingMethod::Temporal));
    assert_eq!(fallback.sampling_method, "statistical");
    assert_eq!(fallback.sampled_indices, direct.sampled_indices);
}

// ============================================================================
// Confidence constants and reporting
// ============================================================================

#[test]
fn test_confidence_fixed_per_method() {
    let data = sales_data(4_000);
    let sampler = Sampler::new().with_seed(1);

    let expect = [
        (SamplingMethod::Statistical, 0.95),
        (SamplingMethod::Temporal, 0.92),
        (SamplingMethod::Cluster, 0.88),
        (SamplingMethod::Importance, 0.85),
        (SamplingMethod::Hybrid, 0.90),
    ];
    for (method, confidence) in expect {
        let strategy = SamplingStrategy::new(1_000, method);
        let result = sampler.sample_with_strategy(&data, &strategy).unwrap();
        assert_eq!(result.confidence, confidence, "wrong confidence for {}", method);
    }
}

#[test]
fn test_user_message_reports_counts_and_method() {
    let data = numeric_only(1_000);
    let strategy = SamplingStrategy::new(250, SamplingMethod::Statistical);
    let result = Sampler::new().with_seed(4).sample_with_strategy(&data, &strategy).unwrap();

    assert!(result.user_message.contains("250 of 1000"));
    assert!(result.user_message.contains("25.0%"));
    assert!(result.user_message.contains("statistical"));
}

#[test]
fn test_result_serializes_to_json() {
    let data = numeric_only(1_000);
    let strategy = SamplingStrategy::new(200, SamplingMethod::Cluster);
    let result = Sampler::new().with_seed(4).sample_with_strategy(&data, &strategy).unwrap();

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"sampling_method\":\"cluster\""));
    assert!(json.contains("\"data_quality\":\"good\""));
}

// ============================================================================
// Degenerate datasets
// ============================================================================

#[test]
fn test_empty_dataset_takes_identity_path() {
    let data: Vec<Record> = Vec::new();
    let result = Sampler::new().sample(&data).unwrap();
    assert_eq!(result.sampled_row_count, 0);
    assert_eq!(result.sampling_method, "none");
}

#[test]
fn test_all_null_columns_degrade_gracefully() {
    let data: Vec<Record> = (0..1_500)
        .map(|_| {
            let mut rec = Record::new();
            rec.insert("a".to_string(), Value::Null);
            rec.insert("b".to_string(), Value::Null);
            rec
        })
        .collect();

    let result = Sampler::new().with_seed(2).sample(&data).unwrap();
    assert!(result.sampled_row_count <= 900);
    assert!(result.sampled_row_count > 0);
}
