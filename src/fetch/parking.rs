//! Parking dashboard endpoints: daily vehicle counts, hourly series,
//! per-station occupancy.

use anyhow::Result;
use reqwest::blocking::Client;
use serde_json::{Map, Value};

use super::types::{HourlyWire, LineSeries, LineWire, ScalarBatch, TimeSeriesBatch};
use super::{day_endpoint, get_json, grouped_batch, scalar_batch, time_series_batch};
use crate::config::Config;
use crate::stations;

const DAILY_REPORT: &str = "allTicketCount";
const HOURLY_REPORT: &str = "hourlybaseddata";
const STATION_REPORT: &str = "stationData";

/// Distinguished total field of the daily parking payload.
const TOTAL_FIELD: &str = "totalVehicles";

/// Daily vehicle counts: `totalVehicles` plus one field per vehicle type.
pub fn daily(client: &Client, cfg: &Config) -> Result<ScalarBatch> {
    let url = day_endpoint(&cfg.parking_base_url, DAILY_REPORT, cfg.day_offset)?;
    let raw: Map<String, Value> = get_json(client, &url)?;
    scalar_batch(&raw, TOTAL_FIELD, |_| true)
}

/// Hourly parking series. The categories are plain time-of-day labels;
/// the report date comes from the passenger flow API instead.
pub fn hourly(client: &Client, cfg: &Config) -> Result<TimeSeriesBatch> {
    let url = day_endpoint(&cfg.parking_base_url, HOURLY_REPORT, cfg.day_offset)?;
    let raw: HourlyWire = get_json(client, &url)?;
    time_series_batch(raw)
}

/// Per-station parking counts grouped by line.
pub fn station_counts(client: &Client, cfg: &Config) -> Result<Vec<LineSeries>> {
    let url = day_endpoint(&cfg.parking_base_url, STATION_REPORT, cfg.day_offset)?;
    let raw: Vec<LineWire> = get_json(client, &url)?;
    Ok(grouped_batch(raw, stations::parking_station_code))
}
