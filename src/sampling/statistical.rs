//! Systematic (statistical) sampling

use rand::rngs::StdRng;
use rand::Rng;
use std::collections::{BTreeSet, HashSet};

/// Systematic sampling with a random start offset: every `interval`-th row
/// starting at a uniform offset in `[0, interval)`.
///
/// When outliers must survive, tail grid picks yield to make room; outliers
/// beyond the budget are clipped. Output is ascending, so the sample is a
/// subsequence of the input.
pub(crate) fn select(
    n_rows: usize,
    max_rows: usize,
    preserve_outliers: bool,
    outliers: &BTreeSet<usize>,
    rng: &mut StdRng,
) -> Vec<usize> {
    let interval = (n_rows / max_rows).max(1);
    let start = rng.gen_range(0..interval);

    let mut picked: Vec<usize> = Vec::with_capacity(max_rows);
    let mut i = start;
    while picked.len() < max_rows && i < n_rows {
        picked.push(i);
        i += interval;
    }

    if preserve_outliers && !outliers.is_empty() {
        let on_grid: HashSet<usize> = picked.iter().copied().collect();
        let missing: Vec<usize> = outliers
            .iter()
            .copied()
            .filter(|idx| !on_grid.contains(idx))
            .collect();
        picked.truncate(max_rows.saturating_sub(missing.len()));
        picked.extend(missing);
        picked.truncate(max_rows);
        picked.sort_unstable();
    }

    picked
}
