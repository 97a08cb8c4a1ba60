//! CSV I/O: the flat results table in, the rotated table out.

use crate::Result;
use anyhow::{Context, bail};
use serde::Serialize;
use std::fs::File;

/// Retained metrics of one input data row, case label already dropped.
///
/// Values stay verbatim strings; the tool never interprets them numerically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRow {
    pub requests_per_sec: String,
    pub transfer_per_sec: String,
}

/// Parse the flat results CSV into metric rows in line order.
///
/// The header row is skipped, column 0 of each data row (the case label) is
/// dropped, and the next two columns are retained. Any further columns
/// (server errors, timeouts) are discarded.
pub fn read_metric_rows(path: &str) -> Result<Vec<MetricRow>> {
    let file = File::open(path).with_context(|| format!("open input CSV {}", path))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut out = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let lno = i + 2; // 1-based line number, header is line 1
        let record = record.with_context(|| format!("read {}:{}", path, lno))?;
        match (record.get(1), record.get(2)) {
            (Some(requests), Some(transfer)) => out.push(MetricRow {
                requests_per_sec: requests.to_string(),
                transfer_per_sec: transfer.to_string(),
            }),
            _ => bail!(
                "short row at {}:{}: expected at least 3 fields, got {}",
                path,
                lno,
                record.len()
            ),
        }
    }

    Ok(out)
}

/// One output row: variant label plus the two metrics flattened across
/// size-classes. The field renames produce the output header verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RotatedRow {
    #[serde(rename = "Case")]
    pub case: String,

    #[serde(rename = "Tiny Requests/sec")]
    pub tiny_requests: String,
    #[serde(rename = "Small Requests/sec")]
    pub small_requests: String,
    #[serde(rename = "Medium Requests/sec")]
    pub medium_requests: String,
    #[serde(rename = "Large Requests/sec")]
    pub large_requests: String,

    #[serde(rename = "Tiny Transfer/sec")]
    pub tiny_transfer: String,
    #[serde(rename = "Small Transfer/sec")]
    pub small_transfer: String,
    #[serde(rename = "Medium Transfer/sec")]
    pub medium_transfer: String,
    #[serde(rename = "Large Transfer/sec")]
    pub large_transfer: String,
}

/// Write the rotated table, creating or overwriting `path`. The header row
/// comes from the `RotatedRow` field renames.
pub fn write_rotated(path: &str, rows: &[RotatedRow]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create output CSV {}", path))?;
    let mut writer = csv::Writer::from_writer(file);
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .flush()
        .with_context(|| format!("flush output CSV {}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reshape::rotate;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn flat_csv(rows: usize) -> String {
        let mut text =
            String::from("Case,Requests/sec,Transfer 10K/sec,Server Error,Timeout\n");
        for i in 0..rows {
            text.push_str(&format!("case-{},{},{}.5MB,0,0\n", i, (i + 1) * 100, i + 1));
        }
        text
    }

    #[test]
    fn read_drops_label_and_trailing_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.csv");
        fs::write(&path, flat_csv(2)).unwrap();

        let rows = read_metric_rows(path.to_str().unwrap()).unwrap();
        assert_eq!(
            rows,
            vec![
                MetricRow {
                    requests_per_sec: "100".to_string(),
                    transfer_per_sec: "1.5MB".to_string(),
                },
                MetricRow {
                    requests_per_sec: "200".to_string(),
                    transfer_per_sec: "2.5MB".to_string(),
                },
            ]
        );
    }

    #[test]
    fn read_rejects_rows_with_fewer_than_three_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.csv");
        fs::write(&path, "Case,Requests/sec,Transfer 10K/sec\ncase-0,100\n").unwrap();

        let err = read_metric_rows(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("short row"), "{}", err);
    }

    #[test]
    fn end_to_end_rotation_is_byte_identical_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("proxies-performance.csv");
        let output = dir.path().join("proxies-performance-rotated.csv");
        fs::write(&input, flat_csv(32)).unwrap();

        let rows = read_metric_rows(input.to_str().unwrap()).unwrap();
        let rotated = rotate(&rows).unwrap();
        write_rotated(output.to_str().unwrap(), &rotated).unwrap();
        let first = fs::read_to_string(&output).unwrap();

        let mut lines = first.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Case,Tiny Requests/sec,Small Requests/sec,Medium Requests/sec,\
             Large Requests/sec,Tiny Transfer/sec,Small Transfer/sec,\
             Medium Transfer/sec,Large Transfer/sec"
        );
        assert_eq!(
            lines.next().unwrap(),
            "http-monolake,100,200,300,400,1.5MB,2.5MB,3.5MB,4.5MB"
        );
        assert_eq!(first.lines().count(), 9);

        // Pure function of the input: a second run reproduces the file.
        let rotated_again = rotate(&read_metric_rows(input.to_str().unwrap()).unwrap()).unwrap();
        write_rotated(output.to_str().unwrap(), &rotated_again).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), first);
    }
}
