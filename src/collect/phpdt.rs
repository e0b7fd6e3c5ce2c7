//! PHPDT collector: one corridor-flow table, date taken from the first
//! usable time window.

use anyhow::Result;
use reqwest::blocking::Client;
use tracing::info;

use super::report_outcome;
use crate::config::Config;
use crate::fetch::phpdt;
use crate::{shape, store};

const DAILY_FILE: &str = "ChennaiMetro_Daily_PHPDT.csv";

pub fn run(client: &Client, cfg: &Config) -> Result<()> {
    let path = cfg.data_dir.join("PHPDT").join(DAILY_FILE);
    let last = store::last_report_date(&path)?;

    let windows = phpdt::report(client, cfg)?;
    let Some(batch) = shape::phpdt_rows(&windows) else {
        info!("no PHPDT data available to process");
        return Ok(());
    };

    let date = batch.date.clone();
    report_outcome(&path, &date, store::append_batch(&path, last.as_deref(), &batch)?);
    Ok(())
}
