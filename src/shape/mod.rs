//! Flatten normalized batches into append-ready row sets.
//!
//! Column order is recomputed on every run: identity columns in a fixed
//! domain order, then the distinguished total, then the remaining metric
//! names in case-sensitive lexicographic order. The API grows new metric
//! names over time; sorting keeps the header reproducible no matter
//! where a name first appears in the payload.

use anyhow::{anyhow, Result};
use serde_json::Number;
use std::collections::BTreeSet;
use tracing::warn;

use crate::fetch::types::{LineSeries, PhpdtWindow, ScalarBatch, TimeSeriesBatch};

/// One shaped batch: a header plus the rows for a single report date.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBatch {
    pub date: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn cell(value: &Number) -> String {
    if value.as_f64().map_or(false, |v| v < 0.0) {
        warn!(%value, "negative count in series");
    }
    value.to_string()
}

/// Single-row batch: `Date`, the total, then each metric alphabetically.
pub fn scalar_rows(date: &str, total_label: &str, batch: &ScalarBatch) -> TableBatch {
    let mut columns = vec!["Date".to_string(), total_label.to_string()];
    columns.extend(batch.metrics.keys().cloned());

    let mut row = vec![date.to_string(), cell(&batch.total)];
    row.extend(batch.metrics.values().map(cell));

    TableBatch {
        date: date.to_string(),
        columns,
        rows: vec![row],
    }
}

/// One row per hour label, index-aligned with every series. A row whose
/// value is missing for any declared column is dropped individually;
/// a payload without the total series fails outright.
pub fn hourly_rows(date: &str, total_name: &str, batch: &TimeSeriesBatch) -> Result<TableBatch> {
    let total = batch
        .series
        .get(total_name)
        .ok_or_else(|| anyhow!("hourly payload has no `{total_name}` series"))?;
    let metric_names: Vec<&String> = batch.series.keys().filter(|k| *k != total_name).collect();

    let mut columns = vec![
        "Date".to_string(),
        "Hour".to_string(),
        total_name.to_string(),
    ];
    columns.extend(metric_names.iter().map(|name| name.to_string()));

    let mut rows = Vec::with_capacity(batch.hours.len());
    'hours: for (i, hour) in batch.hours.iter().enumerate() {
        let mut row = vec![date.to_string(), hour.clone()];
        let Some(value) = total.get(i) else {
            warn!(hour = %hour, series = %total_name, "series shorter than hour labels, dropping row");
            continue;
        };
        row.push(cell(value));
        for name in &metric_names {
            match batch.series[*name].get(i) {
                Some(value) => row.push(cell(value)),
                None => {
                    warn!(hour = %hour, series = %name, "series shorter than hour labels, dropping row");
                    continue 'hours;
                }
            }
        }
        rows.push(row);
    }

    Ok(TableBatch {
        date: date.to_string(),
        columns,
        rows,
    })
}

/// One row per (line, station). The variable-column set is the union of
/// metric names across lines; a line lacking a declared metric fails
/// only its own rows.
pub fn station_rows(date: &str, total_name: &str, groups: &[LineSeries]) -> TableBatch {
    let metric_names: BTreeSet<&String> = groups
        .iter()
        .flat_map(|group| group.series.keys())
        .filter(|name| *name != total_name)
        .collect();

    let mut columns = vec![
        "Date".to_string(),
        "Line".to_string(),
        "Station".to_string(),
        total_name.to_string(),
    ];
    columns.extend(metric_names.iter().map(|name| name.to_string()));

    let mut rows = Vec::new();
    for group in groups {
        let Some(total) = group.series.get(total_name) else {
            warn!(line = %group.line, series = %total_name, "line has no total series, dropping its rows");
            continue;
        };
        'stations: for (i, station) in group.stations.iter().enumerate() {
            let mut row = vec![date.to_string(), group.line.clone(), station.clone()];
            let Some(value) = total.get(i) else {
                warn!(line = %group.line, station = %station, series = %total_name, "series shorter than station list, dropping row");
                continue;
            };
            row.push(cell(value));
            for name in &metric_names {
                match group.series.get(*name).and_then(|data| data.get(i)) {
                    Some(value) => row.push(cell(value)),
                    None => {
                        warn!(line = %group.line, station = %station, series = %name, "missing value for declared column, dropping row");
                        continue 'stations;
                    }
                }
            }
            rows.push(row);
        }
    }

    TableBatch {
        date: date.to_string(),
        columns,
        rows,
    }
}

const PHPDT_COLUMNS: [&str; 8] = [
    "Date",
    "Line",
    "Direction",
    "Start Hour",
    "End Hour",
    "Start Station",
    "End Station",
    "PHPDT",
];

/// Fixed-schema corridor rows, one per (window, corridor). `None` when
/// the report carried no usable data.
pub fn phpdt_rows(windows: &[PhpdtWindow]) -> Option<TableBatch> {
    let mut rows = Vec::new();
    for w in windows {
        for (origin, destination, value) in &w.corridors {
            rows.push(vec![
                w.date.clone(),
                w.line.to_string(),
                w.direction.to_string(),
                w.start_hour.clone(),
                w.end_hour.clone(),
                origin.clone(),
                destination.clone(),
                cell(value),
            ]);
        }
    }

    let date = rows.first()?[0].clone();
    Some(TableBatch {
        date,
        columns: PHPDT_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows,
    })
}
