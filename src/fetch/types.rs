//! Wire formats and the normalized shapes the fetchers produce.

use serde::Deserialize;
use serde_json::Number;
use std::collections::BTreeMap;

/// One named series of the `{categories, series}` wire shape.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesWire {
    pub name: String,
    pub data: Vec<Number>,
}

/// Wire shape of the hourly endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyWire {
    pub categories: Vec<String>,
    pub series: Vec<SeriesWire>,
}

/// Wire shape of one line group of the station endpoints. `line` arrives
/// as a bare number or a string depending on the endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LineWire {
    pub line: serde_json::Value,
    pub categories: Vec<String>,
    pub series: Vec<SeriesWire>,
}

/// Flat mapping of metric name → value plus the distinguished total.
#[derive(Debug, Clone)]
pub struct ScalarBatch {
    pub total: Number,
    pub metrics: BTreeMap<String, Number>,
}

/// Hour labels paired with index-aligned named series. The report date
/// travels separately: not every endpoint carries one.
#[derive(Debug, Clone)]
pub struct TimeSeriesBatch {
    pub hours: Vec<String>,
    pub series: BTreeMap<String, Vec<Number>>,
}

/// Per-line station list with index-aligned named series. Station names
/// have already been through the code lookup.
#[derive(Debug, Clone)]
pub struct LineSeries {
    pub line: String,
    pub stations: Vec<String>,
    pub series: BTreeMap<String, Vec<Number>>,
}

/// One PHPDT time window flattened to corridor observations.
#[derive(Debug, Clone)]
pub struct PhpdtWindow {
    pub date: String,
    pub line: &'static str,
    pub direction: &'static str,
    pub start_hour: String,
    pub end_hour: String,
    /// (origin code, destination code, flow count)
    pub corridors: Vec<(String, String, Number)>,
}

/// Render a JSON scalar as a bare label, without quoting strings.
pub(crate) fn scalar_label(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
