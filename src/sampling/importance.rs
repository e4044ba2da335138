//! Importance-based sampling

use crate::features::TrendPoint;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::{BTreeSet, HashSet};

/// Prioritize information-dense rows: outliers first, then trend points up
/// to 40% of the budget, then a shuffled random sample of the rest. The
/// nominal 30% outlier share is a floor, not a cap: every flagged row is
/// kept while the budget allows. Output is ascending.
pub(crate) fn select(
    n_rows: usize,
    max_rows: usize,
    outliers: &BTreeSet<usize>,
    trends: &[TrendPoint],
    rng: &mut StdRng,
) -> Vec<usize> {
    let trend_budget = (max_rows as f64 * 0.4) as usize;

    let mut seen: HashSet<usize> = HashSet::with_capacity(max_rows);
    let mut picked: Vec<usize> = Vec::with_capacity(max_rows);

    for &idx in outliers {
        if picked.len() >= max_rows {
            break;
        }
        if seen.insert(idx) {
            picked.push(idx);
        }
    }

    let mut trend_taken = 0;
    for point in trends {
        if trend_taken >= trend_budget || picked.len() >= max_rows {
            break;
        }
        if seen.insert(point.index) {
            picked.push(point.index);
            trend_taken += 1;
        }
    }

    let mut rest: Vec<usize> = (0..n_rows).filter(|idx| !seen.contains(idx)).collect();
    rest.shuffle(rng);
    for idx in rest {
        if picked.len() >= max_rows {
            break;
        }
        picked.push(idx);
    }

    picked.truncate(max_rows);
    picked.sort_unstable();
    picked
}
