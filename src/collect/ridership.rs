//! Ridership collector: daily ticket counts, hourly passenger series,
//! and per-station flows, one table each.

use anyhow::Result;
use reqwest::blocking::Client;

use super::report_outcome;
use crate::config::Config;
use crate::fetch::ridership;
use crate::{shape, store};

const DAILY_FILE: &str = "ChennaiMetro_Daily_Ridership.csv";
const HOURLY_FILE: &str = "ChennaiMetro_Hourly_Ridership.csv";
const STATION_FILE: &str = "ChennaiMetro_Station_Ridership.csv";

/// Name of the distinguished total series in passenger flow payloads.
const TOTAL: &str = "Total";

pub fn run(client: &Client, cfg: &Config) -> Result<()> {
    let dir = cfg.data_dir.join("Ridership");
    let daily_path = dir.join(DAILY_FILE);
    let hourly_path = dir.join(HOURLY_FILE);
    let station_path = dir.join(STATION_FILE);

    let last_daily = store::last_report_date(&daily_path)?;
    let last_hourly = store::last_report_date(&hourly_path)?;
    let last_station = store::last_report_date(&station_path)?;

    let daily = ridership::daily(client, cfg)?;
    let (date, hourly) = ridership::hourly(client, cfg)?;
    let station_flows = ridership::station_flows(client, cfg)?;

    let batch = shape::scalar_rows(&date, TOTAL, &daily);
    report_outcome(
        &daily_path,
        &date,
        store::append_batch(&daily_path, last_daily.as_deref(), &batch)?,
    );

    let batch = shape::hourly_rows(&date, TOTAL, &hourly)?;
    report_outcome(
        &hourly_path,
        &date,
        store::append_batch(&hourly_path, last_hourly.as_deref(), &batch)?,
    );

    let batch = shape::station_rows(&date, TOTAL, &station_flows);
    report_outcome(
        &station_path,
        &date,
        store::append_batch(&station_path, last_station.as_deref(), &batch)?,
    );

    Ok(())
}
