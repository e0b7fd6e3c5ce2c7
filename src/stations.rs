//! Static station name → code dictionaries.
//!
//! The parking dashboard and the passenger flow API spell the same
//! stations differently, so each carries its own table. Lookups are
//! get-or-same: a name missing from the table passes through unchanged.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static PARKING_STATION_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Blue Line
        ("Wimco Nagar Depot Metro", "SWD"),
        ("Wimco Nagar Metro", "SWN"),
        ("Thiruvotriyur Metro", "STV"),
        ("Thiruvotriyur Theradi Metro", "STT"),
        ("Kaladipet Metro", "SKP"),
        ("Tollgate Metro", "STG"),
        ("New Washermenpet Metro", "SNW"),
        ("Tondiarpet Metro", "STR"),
        ("Thiagaraya College Metro", "STC"),
        ("Washermanpet", "SWA"),
        ("Mannadi", "SMA"),
        ("High Court", "SHC"),
        ("Government Estate", "SGE"),
        ("LIC", "SLI"),
        ("Thousand Lights", "STL"),
        ("AG-DMS", "SGM"),
        ("Teynampet", "STE"),
        ("Nandanam", "SCR"),
        ("Saidapet", "SSA"),
        ("Little Mount", "SLM"),
        ("Guindy", "SGU"),
        ("OTA - Nanganallur Road", "SOT"),
        ("Meenambakkam", "SME"),
        ("Chennai International Airport", "SAP"),
        // Green Line
        ("Puratchi Thalaivar Dr. M.G. Ramachandran Central", "SCC"),
        ("Egmore", "SEG"),
        ("Nehru Park", "SNP"),
        ("Kilpauk", "SKM"),
        ("Pachaiyappas College", "SPC"),
        ("Shenoy Nagar", "SSN"),
        ("Anna Nagar East", "SAE"),
        ("Anna Nagar Tower", "SAT"),
        ("Thirumangalam", "STI"),
        ("Koyambedu", "SKO"),
        ("Arumbakkam", "SAR"),
        ("Vadapalani", "SVA"),
        ("Ashok Nagar", "SAN"),
        ("Ekkattuthangal", "SSI"),
        // trailing space is how the API spells it
        ("Arignar Anna Alandur ", "SAL"),
        ("St. Thomas Mount", "SMM"),
    ])
});

static FLOW_STATION_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Blue Line
        ("WIMCO NAGAR DEPOT", "SWD"),
        ("WIMCO NAGAR METRO", "SWN"),
        ("THIRUVOTRIYUR METRO", "STV"),
        ("THIRUVOTRIYUR THERADI METRO", "STT"),
        ("KALADIPET METRO", "SKP"),
        ("TOLLGATE METRO", "STG"),
        ("NEW WASHERMENPET METRO", "SNW"),
        ("TONDIARPET METRO", "STR"),
        ("THIYAGARAYA COLLEGE METRO", "STC"),
        ("WASHERMANPET", "SWA"),
        ("MANNADI", "SMA"),
        ("HIGH COURT", "SHC"),
        ("GOVERNMENT ESTATE", "SGE"),
        ("LIC", "SLI"),
        ("THOUSAND LIGHT", "STL"),
        ("AG-DMS", "SGM"),
        ("TEYNAMPET", "STE"),
        ("NANDANAM", "SCR"),
        ("SAIDAPET", "SSA"),
        ("LITTLE MOUNT", "SLM"),
        ("GUINDY", "SGU"),
        ("OTA - NANGANALLUR ROAD", "SOT"),
        ("MEENAMBAKKAM", "SME"),
        ("CHENNAI AIRPORT", "SAP"),
        // Green Line
        ("EGMORE", "SEG"),
        ("NEHRU PARK", "SNP"),
        ("KILPAUK", "SKM"),
        ("PACHAIAPPA S COLLEGE", "SPC"),
        ("SHENOY NAGAR", "SSN"),
        ("ANNA NAGAR EAST", "SAE"),
        ("ANNA NAGAR TOWER", "SAT"),
        ("THIRUMANGALAM", "STI"),
        ("KOYAMBEDU", "SKO"),
        ("CMBT", "SCM"),
        ("ARUMBAKKAM", "SAR"),
        ("VADAPALANI", "SVA"),
        ("ASHOK NAGAR", "SAN"),
        ("EKKATTUTHANGAL", "SSI"),
        ("St. THOMAS MOUNT", "SMM"),
        // Interchange stations
        ("CENTRAL  METRO", "SCC"),
        ("ALANDUR", "SAL"),
    ])
});

/// Code for a parking dashboard station name, or the name itself.
pub fn parking_station_code(name: &str) -> String {
    PARKING_STATION_CODES
        .get(name)
        .map_or_else(|| name.to_string(), |code| code.to_string())
}

/// Code for a passenger flow station name, or the name itself.
pub fn flow_station_code(name: &str) -> String {
    FLOW_STATION_CODES
        .get(name)
        .map_or_else(|| name.to_string(), |code| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_map_to_codes() {
        assert_eq!(parking_station_code("Guindy"), "SGU");
        assert_eq!(flow_station_code("CENTRAL  METRO"), "SCC");
    }

    #[test]
    fn unknown_names_pass_through() {
        assert_eq!(parking_station_code("New Depot"), "New Depot");
        assert_eq!(flow_station_code("NEW DEPOT"), "NEW DEPOT");
    }
}
