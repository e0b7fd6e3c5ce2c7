//! Peak-hour passenger density trend report: route view-models flattened
//! into time windows of corridor flow counts.

use anyhow::Result;
use reqwest::blocking::Client;
use serde_json::{Map, Value};
use tracing::warn;

use super::types::PhpdtWindow;
use super::{endpoint, get_json};
use crate::config::Config;
use crate::timestamp;

const PHPDT_REPORT: &str = "PHPDTreport";

/// The four route view-models the report carries: two physical lines,
/// each in both directions.
const ROUTES: &[(&str, &str, &str)] = &[
    // (view-model key, line, direction)
    ("saPtoSWDViewModel", "1", "UP"),
    ("swDtoSAPViewModel", "1", "DOWN"),
    ("smMtoSCCViewModel", "2", "UP"),
    ("scCtoSMMViewModel", "2", "DOWN"),
];

/// Fetch and flatten the PHPDT report.
pub fn report(client: &Client, cfg: &Config) -> Result<Vec<PhpdtWindow>> {
    let url = endpoint(&cfg.passenger_flow_base_url, PHPDT_REPORT)?;
    let raw: Map<String, Value> = get_json(client, &url)?;
    Ok(windows(&raw))
}

/// Flatten the report payload. Routes absent from the response or with
/// an empty/non-array payload are skipped; a malformed corridor key or
/// window costs only itself.
pub(crate) fn windows(raw: &Map<String, Value>) -> Vec<PhpdtWindow> {
    let mut out = Vec::new();
    for &(key, line, direction) in ROUTES {
        let entries = match raw.get(key) {
            Some(Value::Array(entries)) if !entries.is_empty() => entries,
            _ => continue,
        };
        for entry in entries {
            match window(entry, line, direction) {
                Some(w) => out.push(w),
                None => warn!(route = %key, "time window missing its timestamps, skipping"),
            }
        }
    }
    out
}

fn window(entry: &Value, line: &'static str, direction: &'static str) -> Option<PhpdtWindow> {
    let obj = entry.as_object()?;
    let from = obj.get("transfromdate").and_then(Value::as_str)?;
    let to = obj.get("transtodate").and_then(Value::as_str)?;
    let from_dt = timestamp::parse_datetime(from)?;
    let to_dt = timestamp::parse_datetime(to)?;

    let mut corridors = Vec::new();
    for (key, value) in obj {
        if !key.contains('_') {
            continue;
        }
        let Some((origin, destination)) = extract_station_code(key) else {
            warn!(key = %key, "could not extract stations from corridor key");
            continue;
        };
        match value {
            Value::Number(n) => corridors.push((origin, destination, n.clone())),
            _ => warn!(key = %key, "non-numeric corridor value, skipping"),
        }
    }

    Some(PhpdtWindow {
        date: from_dt.format("%Y-%m-%d").to_string(),
        line,
        direction,
        start_hour: from_dt.format("%H:%M").to_string(),
        end_hour: to_dt.format("%H:%M").to_string(),
        corridors,
    })
}

/// `"seG_SCC2"` → `("SEG", "SCC")`: non-alphabetic noise is stripped,
/// then the remainder must split into exactly two alphabetic segments.
pub fn extract_station_code(corridor: &str) -> Option<(String, String)> {
    let cleaned: String = corridor
        .chars()
        .filter(|c| c.is_alphabetic() || *c == '_')
        .collect();
    let mut parts = cleaned.split('_');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(origin), Some(destination), None) if !origin.is_empty() && !destination.is_empty() => {
            Some((origin.to_uppercase(), destination.to_uppercase()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn corridor_keys_are_cleaned_and_split() {
        assert_eq!(
            extract_station_code("seG_SCC2"),
            Some(("SEG".to_string(), "SCC".to_string()))
        );
        assert_eq!(
            extract_station_code("swd_swn"),
            Some(("SWD".to_string(), "SWN".to_string()))
        );
    }

    #[test]
    fn malformed_corridor_keys_are_rejected() {
        assert_eq!(extract_station_code("nounderscore"), None);
        assert_eq!(extract_station_code("a_b_c"), None);
        assert_eq!(extract_station_code("_scc"), None);
        assert_eq!(extract_station_code("123_456"), None);
    }

    #[test]
    fn windows_skip_absent_and_empty_routes() {
        let raw = json!({
            "saPtoSWDViewModel": [
                {
                    "transfromdate": "2024-01-15T08:00:00",
                    "transtodate": "2024-01-15T09:00:00",
                    "saP_SME1": 120,
                    "badkey": 5,
                    "a_b_c": 7,
                }
            ],
            "swDtoSAPViewModel": [],
            "smMtoSCCViewModel": "not a list",
        });
        let windows = windows(raw.as_object().unwrap());
        assert_eq!(windows.len(), 1);

        let w = &windows[0];
        assert_eq!(w.date, "2024-01-15");
        assert_eq!((w.line, w.direction), ("1", "UP"));
        assert_eq!((w.start_hour.as_str(), w.end_hour.as_str()), ("08:00", "09:00"));
        // the malformed `a_b_c` key cost only itself
        assert_eq!(w.corridors.len(), 1);
        assert_eq!(w.corridors[0].0, "SAP");
        assert_eq!(w.corridors[0].1, "SME");
    }
}
