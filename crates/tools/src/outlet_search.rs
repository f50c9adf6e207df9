//! Outlet search tool: natural language in, outlet listings out
//!
//! Wires the Text2SQL generator to the outlet database and formats the
//! rows into chat replies.

use tracing::error;

use brewchat_store::{HoursRow, OutletRow, OutletStore};

use crate::Tool;
use crate::text2sql::{OutletQueryGenerator, QueryKind, QueryPlan};

/// Maximum outlets listed in a single reply
const MAX_LISTED: usize = 10;

/// Searches retail outlets via natural-language queries
#[derive(Debug)]
pub struct OutletSearchTool {
    store: OutletStore,
    generator: OutletQueryGenerator,
}

impl OutletSearchTool {
    pub fn new(store: OutletStore) -> Self {
        Self { store, generator: OutletQueryGenerator::new() }
    }

    fn search(&self, query: &str) -> Result<String, brewchat_store::Error> {
        let plan = self.generator.generate(query);

        if !plan.valid {
            let location = plan.location.as_deref().unwrap_or("that location");
            return Ok(format!(
                "I couldn't find '{}' in our database. Please try cities like Kuala Lumpur, \
                 Petaling Jaya, Selangor, or Putrajaya.",
                location
            ));
        }

        match plan.kind {
            QueryKind::Count => {
                let count = self.store.select_count(&plan.sql, &plan.params)?;
                let location = plan.location.as_deref().unwrap_or_default();
                Ok(format!("There are **{} outlets** in {}.", count, location))
            }
            QueryKind::OperatingHours => {
                let rows = self.store.select_hours(&plan.sql, &plan.params)?;
                if rows.is_empty() {
                    return Ok(Self::format_no_results(&plan));
                }
                Ok(Self::format_hours(&rows))
            }
            _ => {
                let rows = self.store.select_outlets(&plan.sql, &plan.params)?;
                if rows.is_empty() {
                    return Ok(Self::format_no_results(&plan));
                }
                Ok(Self::format_outlets(&rows, &plan))
            }
        }
    }

    fn format_no_results(plan: &QueryPlan) -> String {
        match plan.kind {
            QueryKind::Location | QueryKind::LocationDriveThru | QueryKind::LocationWifi => {
                let location = plan.location.as_deref().unwrap_or("that location");
                format!(
                    "I couldn't find any outlets in {}. Try searching in Kuala Lumpur, \
                     Petaling Jaya, or Selangor.",
                    location
                )
            }
            QueryKind::DriveThru => "I couldn't find any outlets with drive-through service.".to_string(),
            QueryKind::Wifi => "I couldn't find any outlets with WiFi.".to_string(),
            QueryKind::OperatingHours => {
                let outlet = plan.outlet_name.as_deref().unwrap_or("that outlet");
                format!(
                    "I couldn't find operating hours for '{}'. Try using the full outlet name \
                     or address.",
                    outlet
                )
            }
            _ => "I couldn't find any outlets matching your query.".to_string(),
        }
    }

    fn format_hours(rows: &[HoursRow]) -> String {
        let mut parts = vec!["Here are the operating hours:\n".to_string()];

        for row in rows.iter().take(3) {
            parts.push(format!("\n**{}** ({})", row.outlet_name, row.city));
            parts.push(format!("Hours: {}", row.operating_hours.as_deref().unwrap_or("not available")));
        }

        parts.join("\n")
    }

    fn format_outlets(rows: &[OutletRow], plan: &QueryPlan) -> String {
        let location_info = match &plan.location {
            Some(location) => format!(" in {}", location),
            None => String::new(),
        };

        let count = rows.len();
        let plural = if count != 1 { "s" } else { "" };
        let mut parts = vec![format!("I found **{} outlet{}**{}:\n", count, plural, location_info)];

        for (idx, row) in rows.iter().take(MAX_LISTED).enumerate() {
            parts.push(format!("\n{}. **{}**", idx + 1, row.outlet_name));
            parts.push(format!("   Address: {}, {}", row.address, row.city));

            if let Some(phone) = &row.phone {
                parts.push(format!("   Phone: {}", phone));
            }

            if let Some(hours) = &row.operating_hours {
                parts.push(format!("   Hours: {}", hours));
            }

            let mut features = Vec::new();
            if row.has_drive_thru {
                features.push("Drive-Through");
            }
            if row.has_wifi {
                features.push("WiFi");
            }
            if !features.is_empty() {
                parts.push(format!("   Features: {}", features.join(", ")));
            }
        }

        if count > MAX_LISTED {
            parts.push(format!("\n... and {} more outlets.", count - MAX_LISTED));
        }

        parts.join("\n")
    }
}

impl Tool for OutletSearchTool {
    fn name(&self) -> &str {
        "outlet_search"
    }

    fn description(&self) -> &str {
        "Useful for finding outlet locations, operating hours, and amenities. Use this when \
         users ask about outlet locations, cities, states, drive-through availability, WiFi, \
         or operating hours."
    }

    fn run(&self, query: &str) -> String {
        match self.search(query) {
            Ok(reply) => reply,
            Err(e) => {
                error!("outlet search failed: {}", e);
                format!("I encountered an error while searching for outlets: {}", e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewchat_store::seed;

    fn tool() -> (tempfile::TempDir, OutletSearchTool) {
        let dir = tempfile::tempdir().unwrap();
        let store = OutletStore::new(dir.path().join("outlets.db")).unwrap();
        seed::ingest(&store).unwrap();
        (dir, OutletSearchTool::new(store))
    }

    #[test]
    fn test_tool_properties() {
        let (_dir, tool) = tool();
        assert_eq!(tool.name(), "outlet_search");
        assert!(tool.description().contains("outlet"));
    }

    #[test]
    fn test_search_by_city() {
        let (_dir, tool) = tool();
        let reply = tool.run("Find outlets in Petaling Jaya");

        assert!(reply.contains("outlet"));
        assert!(reply.contains("SS2") || reply.contains("Damansara"));
        assert!(reply.contains("Address:"));
    }

    #[test]
    fn test_search_drive_through() {
        let (_dir, tool) = tool();
        let reply = tool.run("Which outlets have drive-through?");

        assert!(reply.contains("Drive-Through"));
    }

    #[test]
    fn test_search_invalid_location() {
        let (_dir, tool) = tool();
        let reply = tool.run("outlets in faketown");

        assert!(reply.contains("couldn't find 'Faketown'"));
    }

    #[test]
    fn test_count_query() {
        let (_dir, tool) = tool();
        let reply = tool.run("How many outlets are there in KL");

        assert!(reply.contains("**2 outlets**"));
        assert!(reply.contains("Kuala Lumpur"));
    }

    #[test]
    fn test_operating_hours_query() {
        let (_dir, tool) = tool();
        let reply = tool.run("operating hours for SS2");

        assert!(reply.contains("operating hours"));
        assert!(reply.contains("SS2"));
    }

    #[test]
    fn test_city_alias() {
        let (_dir, tool) = tool();
        let reply = tool.run("outlets in pj");

        assert!(reply.contains("Petaling Jaya"));
    }

    #[test]
    fn test_no_results_for_valid_location() {
        let dir = tempfile::tempdir().unwrap();
        let store = OutletStore::new(dir.path().join("outlets.db")).unwrap();
        store.init_schema().unwrap();
        let tool = OutletSearchTool::new(store);

        let reply = tool.run("outlets in cyberjaya");
        assert!(reply.contains("couldn't find any outlets in Cyberjaya"));
    }

    #[test]
    fn test_missing_schema_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = OutletStore::new(dir.path().join("empty.db")).unwrap();
        let tool = OutletSearchTool::new(store);

        let reply = tool.run("Find outlets in Petaling Jaya");
        assert!(reply.contains("error"));
    }
}
