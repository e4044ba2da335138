//! Cluster-based sampling
//!
//! Partitions rows into contiguous equal segments as a positional proxy for
//! clustering (no centroids) and samples an even sub-interval from each.

/// Select up to `max_rows` rows across `min(10, max_rows / 50)` contiguous
/// segments. Output is ascending. May come in slightly under budget when the
/// per-segment grid does not divide evenly; it never exceeds it.
pub(crate) fn select(n_rows: usize, max_rows: usize) -> Vec<usize> {
    let num_clusters = (max_rows / 50).clamp(1, 10);
    let per_cluster = (max_rows / num_clusters).max(1);
    let segment = (n_rows / num_clusters).max(1);

    let mut picked = Vec::with_capacity(max_rows);
    for c in 0..num_clusters {
        let start = c * segment;
        let end = if c == num_clusters - 1 {
            n_rows
        } else {
            ((c + 1) * segment).min(n_rows)
        };
        if start >= end {
            break;
        }

        let step = ((end - start) / per_cluster).max(1);
        let mut i = start;
        let mut taken = 0;
        while taken < per_cluster && i < end && picked.len() < max_rows {
            picked.push(i);
            i += step;
            taken += 1;
        }
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_all_segments() {
        let picked = select(10_000, 500);
        // 10 segments of 1000 rows; every segment contributes
        for c in 0..10 {
            let lo = c * 1_000;
            let hi = lo + 1_000;
            assert!(
                picked.iter().any(|&i| i >= lo && i < hi),
                "segment {} unsampled",
                c
            );
        }
    }

    #[test]
    fn test_small_budget_single_cluster() {
        let picked = select(1_000, 30);
        assert!(!picked.is_empty());
        assert!(picked.len() <= 30);
    }
}
