//! Append-only CSV tables keyed by report date.
//!
//! The inspector and the append gate together are the sole consistency
//! mechanism: at most one batch of rows exists per report date, enforced
//! by comparing the fetched date against the last persisted one. Tables
//! are never rewritten or compacted once created.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use tracing::warn;

use crate::shape::TableBatch;

const DATE_COLUMN: &str = "Date";

/// Outcome of one append-gate decision, with the affected row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Created(usize),
    Appended(usize),
    Skipped,
}

/// Report date of the table's last row.
///
/// A missing table is created as an empty placeholder. Zero data rows or
/// unreadable content count as empty; recovering from a corrupt table is
/// the next write's job, not the inspector's.
pub fn last_report_date(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating table directory {}", parent.display()))?;
        }
        fs::File::create(path)
            .with_context(|| format!("creating table {}", path.display()))?;
        return Ok(None);
    }

    let mut reader = match csv::ReaderBuilder::new().flexible(true).from_path(path) {
        Ok(reader) => reader,
        Err(err) => {
            warn!(table = %path.display(), error = %err, "unreadable table, treating as empty");
            return Ok(None);
        }
    };

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(err) => {
            warn!(table = %path.display(), error = %err, "unreadable header, treating as empty");
            return Ok(None);
        }
    };
    let Some(date_idx) = headers.iter().position(|h| h == DATE_COLUMN) else {
        if !headers.is_empty() {
            warn!(table = %path.display(), "header has no Date column, treating as empty");
        }
        return Ok(None);
    };

    let mut last = None;
    for record in reader.records() {
        match record {
            Ok(record) => {
                if let Some(date) = record.get(date_idx) {
                    last = Some(date.to_string());
                }
            }
            Err(err) => {
                warn!(table = %path.display(), error = %err, "corrupt table content, treating as empty");
                return Ok(None);
            }
        }
    }
    Ok(last)
}

/// The gate: idempotent per report date.
///
/// Same date as the last persisted row → no-op. No persisted date →
/// write header plus rows (replacing the empty placeholder, or whatever
/// corrupt content the inspector gave up on). Otherwise append the rows
/// without a header.
pub fn append_batch(
    path: &Path,
    last_date: Option<&str>,
    batch: &TableBatch,
) -> Result<AppendOutcome> {
    match last_date {
        Some(last) if last == batch.date => Ok(AppendOutcome::Skipped),
        None => {
            let mut writer = csv::Writer::from_path(path)
                .with_context(|| format!("creating table {}", path.display()))?;
            writer
                .write_record(&batch.columns)
                .context("writing header")?;
            for row in &batch.rows {
                writer.write_record(row).context("writing row")?;
            }
            writer
                .flush()
                .with_context(|| format!("flushing table {}", path.display()))?;
            Ok(AppendOutcome::Created(batch.rows.len()))
        }
        Some(_) => {
            let file = OpenOptions::new()
                .append(true)
                .open(path)
                .with_context(|| format!("opening table {} for append", path.display()))?;
            let mut writer = csv::Writer::from_writer(file);
            for row in &batch.rows {
                writer.write_record(row).context("appending row")?;
            }
            writer
                .flush()
                .with_context(|| format!("flushing table {}", path.display()))?;
            Ok(AppendOutcome::Appended(batch.rows.len()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn batch(date: &str, rows: Vec<Vec<&str>>) -> TableBatch {
        TableBatch {
            date: date.to_string(),
            columns: vec!["Date".to_string(), "Total".to_string()],
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect())
                .collect(),
        }
    }

    fn table_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("Ridership").join("daily.csv")
    }

    #[test]
    fn absent_table_is_empty_and_gets_a_placeholder() {
        let dir = tempdir().unwrap();
        let path = table_path(&dir);
        assert_eq!(last_report_date(&path).unwrap(), None);
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn zero_row_table_is_empty() {
        let dir = tempdir().unwrap();
        let path = table_path(&dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "Date,Total\n").unwrap();
        assert_eq!(last_report_date(&path).unwrap(), None);
    }

    #[test]
    fn corrupt_table_is_empty() {
        let dir = tempdir().unwrap();
        let path = table_path(&dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"Date,Total\n\xff\xfe,broken\n").unwrap();
        assert_eq!(last_report_date(&path).unwrap(), None);
    }

    #[test]
    fn foreign_header_is_empty() {
        let dir = tempdir().unwrap();
        let path = table_path(&dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "When,Total\n2024-01-15,5\n").unwrap();
        assert_eq!(last_report_date(&path).unwrap(), None);
    }

    #[test]
    fn create_then_skip_then_append() {
        let dir = tempdir().unwrap();
        let path = table_path(&dir);

        // first run: store absent → created with header
        let last = last_report_date(&path).unwrap();
        let first = batch("2024-01-15", vec![vec!["2024-01-15", "1000"]]);
        assert_eq!(
            append_batch(&path, last.as_deref(), &first).unwrap(),
            AppendOutcome::Created(1)
        );
        assert_eq!(
            last_report_date(&path).unwrap().as_deref(),
            Some("2024-01-15")
        );

        // same date again → no-op, file unchanged
        let before = fs::read_to_string(&path).unwrap();
        let last = last_report_date(&path).unwrap();
        assert_eq!(
            append_batch(&path, last.as_deref(), &first).unwrap(),
            AppendOutcome::Skipped
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), before);

        // next date → appended without a second header
        let last = last_report_date(&path).unwrap();
        let second = batch("2024-01-16", vec![vec!["2024-01-16", "1200"]]);
        assert_eq!(
            append_batch(&path, last.as_deref(), &second).unwrap(),
            AppendOutcome::Appended(1)
        );

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            ["Date,Total", "2024-01-15,1000", "2024-01-16,1200"]
        );
    }

    #[test]
    fn multi_row_batches_append_as_a_whole() {
        let dir = tempdir().unwrap();
        let path = table_path(&dir);

        let last = last_report_date(&path).unwrap();
        let first = batch(
            "2024-01-15",
            vec![vec!["2024-01-15", "10"], vec!["2024-01-15", "20"]],
        );
        assert_eq!(
            append_batch(&path, last.as_deref(), &first).unwrap(),
            AppendOutcome::Created(2)
        );

        let last = last_report_date(&path).unwrap();
        let second = batch(
            "2024-01-16",
            vec![vec!["2024-01-16", "30"], vec!["2024-01-16", "40"]],
        );
        assert_eq!(
            append_batch(&path, last.as_deref(), &second).unwrap(),
            AppendOutcome::Appended(2)
        );

        // one header, batches in date order
        let content = fs::read_to_string(&path).unwrap();
        let headers = content.lines().filter(|l| *l == "Date,Total").count();
        assert_eq!(headers, 1);
        assert_eq!(
            last_report_date(&path).unwrap().as_deref(),
            Some("2024-01-16")
        );
    }
}
