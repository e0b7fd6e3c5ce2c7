//! Runtime configuration, passed explicitly into every collector so
//! tests can point the fetchers at a mock endpoint and the tables at a
//! temporary directory.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::fetch::DayOffset;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the parking dashboard API.
    pub parking_base_url: String,
    /// Base URL of the passenger flow API, which also serves PHPDT.
    pub passenger_flow_base_url: String,
    /// Which day's completeness window to request.
    pub day_offset: DayOffset,
    /// Directory the per-domain table directories live under.
    pub data_dir: PathBuf,
    /// Timeout applied to every HTTP request, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parking_base_url: "https://commuters-dataapi.chennaimetrorail.org/api/parkingdashboard"
                .to_string(),
            passenger_flow_base_url:
                "https://commuters-dataapi.chennaimetrorail.org/api/PassengerFlow".to_string(),
            day_offset: DayOffset::PreviousDay,
            data_dir: PathBuf::from("data"),
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Load from a YAML file, or fall back to the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_yaml::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_production_api() {
        let cfg = Config::default();
        assert!(cfg.parking_base_url.contains("parkingdashboard"));
        assert!(cfg.passenger_flow_base_url.contains("PassengerFlow"));
        assert_eq!(cfg.day_offset, DayOffset::PreviousDay);
    }

    #[test]
    fn partial_yaml_overrides_keep_the_other_defaults() {
        let cfg: Config = serde_yaml::from_str(
            "data_dir: /var/lib/metro\nday_offset: current-day\n",
        )
        .unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("/var/lib/metro"));
        assert_eq!(cfg.day_offset, DayOffset::CurrentDay);
        assert_eq!(cfg.request_timeout_secs, 30);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(serde_yaml::from_str::<Config>("dat_dir: typo\n").is_err());
    }
}
