//! Embedded outlet dataset
//!
//! Replaces a CSV import: the sample catalog ships in the binary so a fresh
//! checkout can be ingested without external data files.

use crate::error::Result;
use crate::outlets::{Outlet, OutletStore};

use tracing::info;

/// Outcome of an ingest run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    pub inserted: usize,
    pub updated: usize,
}

fn outlet(
    id: &str, name: &str, address: &str, city: &str, state: &str, postcode: &str, phone: &str, hours: &str,
    drive_thru: bool, wifi: bool, seats: i64,
) -> Outlet {
    Outlet {
        outlet_id: id.to_string(),
        outlet_name: name.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        postcode: postcode.to_string(),
        latitude: None,
        longitude: None,
        phone: Some(phone.to_string()),
        operating_hours: Some(hours.to_string()),
        has_drive_thru: drive_thru,
        has_wifi: wifi,
        seating_capacity: Some(seats),
        opening_date: None,
    }
}

/// The embedded sample outlets
///
/// Cities and states line up with the Text2SQL whitelist so every seeded
/// row is reachable through the natural-language search.
pub fn sample_outlets() -> Vec<Outlet> {
    vec![
        outlet(
            "BC-PJ-001",
            "Brew & Co SS2",
            "17, Jalan SS2/61",
            "Petaling Jaya",
            "Selangor",
            "47300",
            "+60 3-7876 1001",
            "7:30 AM - 10:00 PM",
            false,
            true,
            45,
        ),
        outlet(
            "BC-PJ-002",
            "Brew & Co Damansara Uptown",
            "62, Jalan SS21/35",
            "Petaling Jaya",
            "Selangor",
            "47400",
            "+60 3-7728 1002",
            "8:00 AM - 11:00 PM",
            true,
            true,
            60,
        ),
        outlet(
            "BC-KL-001",
            "Brew & Co Suria KLCC",
            "Lot 239, Level 2, Suria KLCC",
            "Kuala Lumpur",
            "Kuala Lumpur",
            "50088",
            "+60 3-2382 1003",
            "10:00 AM - 10:00 PM",
            false,
            true,
            30,
        ),
        outlet(
            "BC-KL-002",
            "Brew & Co Bangsar South",
            "The Sphere, 1, Avenue 1",
            "Kuala Lumpur",
            "Kuala Lumpur",
            "59200",
            "+60 3-2242 1004",
            "7:00 AM - 9:00 PM",
            false,
            false,
            25,
        ),
        outlet(
            "BC-SA-001",
            "Brew & Co Shah Alam Seksyen 9",
            "9, Jalan Tengku Ampuan Zabedah",
            "Shah Alam",
            "Selangor",
            "40100",
            "+60 3-5510 1005",
            "8:00 AM - 10:00 PM",
            true,
            true,
            55,
        ),
        outlet(
            "BC-SJ-001",
            "Brew & Co SS15 Courtyard",
            "G-01, SS15 Courtyard, Jalan SS15/4G",
            "Subang Jaya",
            "Selangor",
            "47500",
            "+60 3-5611 1006",
            "8:00 AM - 11:00 PM",
            false,
            true,
            40,
        ),
        outlet(
            "BC-PU-001",
            "Brew & Co Presint 3",
            "Ayer@8, Presint 8",
            "Putrajaya",
            "Putrajaya",
            "62250",
            "+60 3-8888 1007",
            "7:30 AM - 9:30 PM",
            true,
            true,
            50,
        ),
        outlet(
            "BC-CJ-001",
            "Brew & Co Shaftsbury Square",
            "Shaftsbury Square, Persiaran Multimedia",
            "Cyberjaya",
            "Selangor",
            "63000",
            "+60 3-8320 1008",
            "8:00 AM - 10:00 PM",
            false,
            true,
            35,
        ),
        outlet(
            "BC-JB-001",
            "Brew & Co City Square",
            "Level 3, Johor Bahru City Square",
            "Johor Bahru",
            "Johor",
            "80000",
            "+60 7-222 1009",
            "10:00 AM - 10:00 PM",
            false,
            false,
            28,
        ),
        outlet(
            "BC-PG-001",
            "Brew & Co Beach Street",
            "35, Beach Street",
            "George Town",
            "Penang",
            "10300",
            "+60 4-261 1010",
            "8:00 AM - 9:00 PM",
            false,
            true,
            32,
        ),
    ]
}

/// Initialize the schema and upsert the embedded dataset
pub fn ingest(store: &OutletStore) -> Result<IngestReport> {
    store.init_schema()?;

    let mut report = IngestReport { inserted: 0, updated: 0 };
    for outlet in sample_outlets() {
        if store.exists(&outlet.outlet_id)? {
            report.updated += 1;
        } else {
            report.inserted += 1;
        }
        store.upsert(&outlet)?;
    }

    info!(inserted = report.inserted, updated = report.updated, "outlet ingest complete");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_outlets_have_unique_ids() {
        let outlets = sample_outlets();
        let mut ids = std::collections::HashSet::new();
        for outlet in &outlets {
            assert!(ids.insert(outlet.outlet_id.clone()), "duplicate id {}", outlet.outlet_id);
        }
    }

    #[test]
    fn test_sample_outlets_include_drive_thru_and_wifi() {
        let outlets = sample_outlets();
        assert!(outlets.iter().any(|o| o.has_drive_thru));
        assert!(outlets.iter().any(|o| o.has_wifi));
        assert!(outlets.iter().any(|o| !o.has_wifi));
    }
}
