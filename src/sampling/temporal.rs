//! Temporal sampling

use crate::dataset::Record;
use chrono::NaiveDateTime;

/// Sort rows by the date column and take evenly spaced picks, always
/// anchoring the earliest and latest rows. Output order is non-decreasing
/// by the parsed date. Rows whose date fails to parse sort first.
pub(crate) fn select(data: &[Record], date_column: &str, max_rows: usize) -> Vec<usize> {
    let mut keyed: Vec<(usize, NaiveDateTime)> = data
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            let ts = rec
                .get(date_column)
                .and_then(|v| v.as_datetime())
                .unwrap_or(NaiveDateTime::MIN);
            (i, ts)
        })
        .collect();
    keyed.sort_by_key(|&(_, ts)| ts);

    if max_rows == 1 || keyed.len() == 1 {
        return vec![keyed[0].0];
    }

    let interval = (keyed.len() / max_rows).max(1);
    let mut picked = vec![keyed[0].0];
    let mut i = interval;
    while picked.len() < max_rows - 1 && i < keyed.len() - 1 {
        picked.push(keyed[i].0);
        i += interval;
    }
    picked.push(keyed[keyed.len() - 1].0);
    picked
}
