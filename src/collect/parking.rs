//! Parking collector: daily, hourly, and per-station vehicle counts.
//!
//! The parking dashboard's own payloads never state which day they
//! describe, so the report date comes from the passenger flow API.

use anyhow::Result;
use reqwest::blocking::Client;

use super::report_outcome;
use crate::config::Config;
use crate::fetch::{parking, ridership};
use crate::{shape, store};

const DAILY_FILE: &str = "ChennaiMetro_Daily_Parking.csv";
const HOURLY_FILE: &str = "ChennaiMetro_Hourly_Parking.csv";
const STATION_FILE: &str = "ChennaiMetro_Station_Parking.csv";

/// Name of the distinguished total series in parking payloads.
const TOTAL: &str = "Total Vehicles";

pub fn run(client: &Client, cfg: &Config) -> Result<()> {
    let dir = cfg.data_dir.join("Parking");
    let daily_path = dir.join(DAILY_FILE);
    let hourly_path = dir.join(HOURLY_FILE);
    let station_path = dir.join(STATION_FILE);

    let last_daily = store::last_report_date(&daily_path)?;
    let last_hourly = store::last_report_date(&hourly_path)?;
    let last_station = store::last_report_date(&station_path)?;

    let daily = parking::daily(client, cfg)?;
    let hourly = parking::hourly(client, cfg)?;
    let station_counts = parking::station_counts(client, cfg)?;
    let date = ridership::report_date(client, cfg)?;

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

    let batch = shape::station_rows(&date, TOTAL, &station_counts);
    report_outcome(
        &station_path,
        &date,
        store::append_batch(&station_path, last_station.as_deref(), &batch)?,
    );

    Ok(())
}
