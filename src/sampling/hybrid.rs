//! Hybrid sampling
//!
//! Composes three sub-budgets: 40% systematic, outliers (nominally 30%),
//! and the remainder spread temporally (or positionally when no date column
//! exists) over the rows not yet chosen.

use crate::dataset::Record;
use crate::profile::ColumnProfile;
use crate::sampling::statistical;
use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use std::collections::{BTreeSet, HashSet};

/// The outlier share is a floor, not a cap: systematic picks yield when
/// flagged rows would not otherwise fit the budget.
pub(crate) fn select(
    data: &[Record],
    max_rows: usize,
    profile: &ColumnProfile,
    outliers: &BTreeSet<usize>,
    rng: &mut StdRng,
) -> Vec<usize> {
    let n_rows = data.len();
    let stat_budget = ((max_rows as f64 * 0.4) as usize).max(1);

    let mut picked = statistical::select(n_rows, stat_budget, false, outliers, rng);
    let mut seen: HashSet<usize> = picked.iter().copied().collect();

    let missing: Vec<usize> = outliers
        .iter()
        .copied()
        .filter(|idx| !seen.contains(idx))
        .collect();
    let keep = max_rows.saturating_sub(missing.len()).min(picked.len());
    for idx in picked.drain(keep..) {
        seen.remove(&idx);
    }
    for idx in missing {
        if picked.len() >= max_rows {
            break;
        }
        seen.insert(idx);
        picked.push(idx);
    }

    let remaining = max_rows.saturating_sub(picked.len());
    if remaining > 0 {
        let rest: Vec<usize> = (0..n_rows).filter(|idx| !seen.contains(idx)).collect();
        picked.extend(spread_over(data, &rest, remaining, profile));
    }

    picked.truncate(max_rows);
    picked.sort_unstable();
    picked
}

/// Evenly spaced picks over the unchosen rows, ordered by date when a
/// date-like column exists and by position otherwise.
fn spread_over(
    data: &[Record],
    rest: &[usize],
    budget: usize,
    profile: &ColumnProfile,
) -> Vec<usize> {
    if rest.is_empty() || budget == 0 {
        return Vec::new();
    }

    let ordered: Vec<usize> = match profile.date_columns.first() {
        Some(column) => {
            let mut keyed: Vec<(usize, NaiveDateTime)> = rest
                .iter()
                .map(|&idx| {
                    let ts = data[idx]
                        .get(column)
                        .and_then(|v| v.as_datetime())
                        .unwrap_or(NaiveDateTime::MIN);
                    (idx, ts)
                })
                .collect();
            keyed.sort_by_key(|&(_, ts)| ts);
            keyed.into_iter().map(|(idx, _)| idx).collect()
        }
        None => rest.to_vec(),
    };

    let step = (ordered.len() / budget).max(1);
    let mut picked = Vec::with_capacity(budget);
    let mut i = 0;
    while picked.len() < budget && i < ordered.len() {
        picked.push(ordered[i]);
        i += step;
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Value;
    use crate::profile::ColumnProfiler;
    use rand::SeedableRng;

    fn dated_data(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| {
                let mut rec = Record::new();
                rec.insert(
                    "date".to_string(),
                    Value::from(format!("2024-{:02}-{:02}", (i / 28) % 12 + 1, i % 28 + 1).as_str()),
                );
                rec.insert("sales".to_string(), Value::Number((i % 97) as f64));
                rec
            })
            .collect()
    }

    #[test]
    fn test_outliers_beyond_nominal_share_still_included() {
        let data = dated_data(2_000);
        let profile = ColumnProfiler::new().profile(&data);
        // 300 outliers against an 800-row budget; a 30% cap would keep 240
        let outliers: BTreeSet<usize> = (0..300).collect();
        let mut rng = StdRng::seed_from_u64(42);

        let picked = select(&data, 800, &profile, &outliers, &mut rng);
        assert_eq!(picked.len(), 800);
        for idx in 0..300 {
            assert!(picked.contains(&idx), "outlier row {} missing", idx);
        }
    }

    #[test]
    fn test_works_without_date_column() {
        let data: Vec<Record> = (0..1_000)
            .map(|i| {
                let mut rec = Record::new();
                rec.insert("x".to_string(), Value::Number(i as f64));
                rec
            })
            .collect();
        let profile = ColumnProfiler::new().profile(&data);
        let mut rng = StdRng::seed_from_u64(5);

        let picked = select(&data, 400, &profile, &BTreeSet::new(), &mut rng);
        assert_eq!(picked.len(), 400);
    }
}
