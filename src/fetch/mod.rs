//! Blocking HTTP plumbing and payload reshaping shared by the
//! endpoint-specific fetchers.

pub mod parking;
pub mod phpdt;
pub mod ridership;
pub mod types;

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::timestamp;
use types::{scalar_label, HourlyWire, LineSeries, LineWire, ScalarBatch, TimeSeriesBatch};

/// API day selector: the previous day's complete window vs today's
/// still-running one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayOffset {
    /// `/1` — the previous day. The default: its data is complete.
    PreviousDay,
    /// `/0` — the current day; risks an incomplete batch.
    CurrentDay,
}

impl DayOffset {
    pub fn path_segment(self) -> &'static str {
        match self {
            DayOffset::PreviousDay => "1",
            DayOffset::CurrentDay => "0",
        }
    }
}

/// Build the blocking client every fetcher shares.
pub fn client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .context("building HTTP client")
}

/// `<base>/<report>/<day>` → parsed URL.
pub(crate) fn day_endpoint(base: &str, report: &str, day: DayOffset) -> Result<Url> {
    let raw = format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        report,
        day.path_segment()
    );
    Url::parse(&raw).with_context(|| format!("parsing endpoint URL {raw}"))
}

/// `<base>/<report>/` → parsed URL, for reports without a day segment.
pub(crate) fn endpoint(base: &str, report: &str) -> Result<Url> {
    let raw = format!("{}/{}/", base.trim_end_matches('/'), report);
    Url::parse(&raw).with_context(|| format!("parsing endpoint URL {raw}"))
}

/// One GET, decoded straight from the JSON body.
pub(crate) fn get_json<T: DeserializeOwned>(client: &Client, url: &Url) -> Result<T> {
    debug!("fetching {}", url);
    client
        .get(url.clone())
        .send()
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("non-success status from {}", url))?
        .json()
        .with_context(|| format!("decoding JSON from {}", url))
}

fn as_number(v: &Value) -> Option<&Number> {
    match v {
        Value::Number(n) => Some(n),
        _ => None,
    }
}

/// Reshape a flat JSON object into a scalar batch: the `total_field`
/// plus every other key accepted by `keep`. Non-numeric metric values
/// cost only themselves; a missing or non-numeric total fails the batch.
pub(crate) fn scalar_batch(
    raw: &Map<String, Value>,
    total_field: &str,
    keep: impl Fn(&str) -> bool,
) -> Result<ScalarBatch> {
    let total = raw
        .get(total_field)
        .and_then(as_number)
        .cloned()
        .ok_or_else(|| anyhow!("payload has no numeric `{total_field}` field"))?;

    let mut metrics = BTreeMap::new();
    for (key, value) in raw {
        if key == total_field || !keep(key) {
            continue;
        }
        match as_number(value) {
            Some(n) => {
                metrics.insert(key.clone(), n.clone());
            }
            None => warn!(key = %key, "non-numeric metric value, skipping"),
        }
    }
    Ok(ScalarBatch { total, metrics })
}

/// Reshape `{categories, series}` into hour labels plus named series.
pub(crate) fn time_series_batch(raw: HourlyWire) -> Result<TimeSeriesBatch> {
    let hours = raw
        .categories
        .iter()
        .map(|c| timestamp::hour_label(c).ok_or_else(|| anyhow!("unparseable hour label `{c}`")))
        .collect::<Result<Vec<_>>>()?;
    let series = raw.series.into_iter().map(|s| (s.name, s.data)).collect();
    Ok(TimeSeriesBatch { hours, series })
}

/// Reshape the per-line wire groups, mapping station names to codes.
pub(crate) fn grouped_batch(raw: Vec<LineWire>, code: impl Fn(&str) -> String) -> Vec<LineSeries> {
    raw.into_iter()
        .map(|group| LineSeries {
            line: scalar_label(&group.line),
            stations: group.categories.iter().map(|name| code(name)).collect(),
            series: group.series.into_iter().map(|s| (s.name, s.data)).collect(),
        })
        .collect()
}
