//! The rotation itself: flat per-case rows into one row per variant.

use crate::Result;
use crate::layout::{EXPECTED_ROWS, SizeClass, VARIANTS};
use crate::table::{MetricRow, RotatedRow};
use anyhow::bail;

/// Rotate the flat table. Output row i carries VARIANTS[i], the requests/sec
/// of its four size-class rows, then the transfer/sec of the same rows.
///
/// Pure function of the input rows. A short table is an error; rows past the
/// fixed table size are ignored with a stderr note.
pub fn rotate(rows: &[MetricRow]) -> Result<Vec<RotatedRow>> {
    if rows.len() < EXPECTED_ROWS {
        bail!(
            "input table too short: expected {} data rows ({} variants x {} size-classes), got {}",
            EXPECTED_ROWS,
            VARIANTS.len(),
            SizeClass::ALL.len(),
            rows.len()
        );
    }
    if rows.len() > EXPECTED_ROWS {
        eprintln!(
            "warning: ignoring {} data rows past the fixed {}-row table",
            rows.len() - EXPECTED_ROWS,
            EXPECTED_ROWS
        );
    }

    let group_len = SizeClass::ALL.len();
    let mut out = Vec::with_capacity(VARIANTS.len());
    for (v, variant) in VARIANTS.iter().enumerate() {
        let group = &rows[v * group_len..(v + 1) * group_len];
        out.push(RotatedRow {
            case: variant.to_string(),
            tiny_requests: group[0].requests_per_sec.clone(),
            small_requests: group[1].requests_per_sec.clone(),
            medium_requests: group[2].requests_per_sec.clone(),
            large_requests: group[3].requests_per_sec.clone(),
            tiny_transfer: group[0].transfer_per_sec.clone(),
            small_transfer: group[1].transfer_per_sec.clone(),
            medium_transfer: group[2].transfer_per_sec.clone(),
            large_transfer: group[3].transfer_per_sec.clone(),
        });
    }

    Ok(out)
}
