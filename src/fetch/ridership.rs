//! Passenger flow endpoints: daily ticket counts, hourly series,
//! per-station flows.

use anyhow::{anyhow, Result};
use reqwest::blocking::Client;
use serde_json::{Map, Value};

use super::types::{HourlyWire, LineSeries, LineWire, ScalarBatch, TimeSeriesBatch};
use super::{day_endpoint, get_json, grouped_batch, scalar_batch, time_series_batch};
use crate::config::Config;
use crate::stations;
use crate::timestamp;

const DAILY_REPORT: &str = "allTicketCount";
const HOURLY_REPORT: &str = "hourlybaseddata";
const STATION_REPORT: &str = "stationData";

/// Distinguished total field of the daily ticket count payload.
const TOTAL_FIELD: &str = "totalTickets";

/// Daily ticket counts: `totalTickets` plus the `noOf*` payment methods.
pub fn daily(client: &Client, cfg: &Config) -> Result<ScalarBatch> {
    let url = day_endpoint(&cfg.passenger_flow_base_url, DAILY_REPORT, cfg.day_offset)?;
    let raw: Map<String, Value> = get_json(client, &url)?;
    scalar_batch(&raw, TOTAL_FIELD, |key| key.starts_with("noOf"))
}

/// Hourly passenger series. The categories here are full timestamps, so
/// this endpoint is also the source of truth for the report date.
pub fn hourly(client: &Client, cfg: &Config) -> Result<(String, TimeSeriesBatch)> {
    let url = day_endpoint(&cfg.passenger_flow_base_url, HOURLY_REPORT, cfg.day_offset)?;
    let raw: HourlyWire = get_json(client, &url)?;
    let date = batch_date(&raw)?;
    Ok((date, time_series_batch(raw)?))
}

/// Report date alone, for collectors whose own payloads don't carry one.
pub fn report_date(client: &Client, cfg: &Config) -> Result<String> {
    let url = day_endpoint(&cfg.passenger_flow_base_url, HOURLY_REPORT, cfg.day_offset)?;
    let raw: HourlyWire = get_json(client, &url)?;
    batch_date(&raw)
}

/// Per-station passenger flows grouped by line.
pub fn station_flows(client: &Client, cfg: &Config) -> Result<Vec<LineSeries>> {
    let url = day_endpoint(&cfg.passenger_flow_base_url, STATION_REPORT, cfg.day_offset)?;
    let raw: Vec<LineWire> = get_json(client, &url)?;
    Ok(grouped_batch(raw, stations::flow_station_code))
}

fn batch_date(wire: &HourlyWire) -> Result<String> {
    let first = wire
        .categories
        .first()
        .ok_or_else(|| anyhow!("hourly payload has no categories"))?;
    timestamp::report_date(first).ok_or_else(|| anyhow!("unparseable report date `{first}`"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn report_date_comes_from_the_first_category() {
        let wire: HourlyWire = serde_json::from_value(json!({
            "categories": ["2024-01-15T05:00:00", "2024-01-15T06:00:00"],
            "series": [{ "name": "Total", "data": [12, 34] }],
        }))
        .unwrap();
        assert_eq!(batch_date(&wire).unwrap(), "2024-01-15");
    }

    #[test]
    fn empty_categories_fail_the_batch() {
        let wire: HourlyWire = serde_json::from_value(json!({
            "categories": [],
            "series": [],
        }))
        .unwrap();
        assert!(batch_date(&wire).is_err());
    }
}
