//! Pattern-based natural-language → SQL generator for outlet queries
//!
//! Converts chat questions into parameterized SQL against the outlets
//! table. Pattern matching keeps the surface predictable; a location
//! whitelist keeps unvalidated text out of the queries entirely.

use regex::Regex;

/// Cities accepted by the location filter
const ALLOWED_CITIES: &[&str] = &[
    "kuala lumpur",
    "kl",
    "petaling jaya",
    "pj",
    "subang jaya",
    "shah alam",
    "putrajaya",
    "cyberjaya",
    "george town",
    "penang",
    "johor bahru",
    "jb",
];

/// States accepted by the location filter
const ALLOWED_STATES: &[&str] = &["selangor", "kuala lumpur", "kl", "putrajaya", "penang", "johor"];

/// Shorthand city names expanded before querying
const CITY_ALIASES: &[(&str, &str)] = &[("kl", "Kuala Lumpur"), ("pj", "Petaling Jaya"), ("jb", "Johor Bahru")];

const LISTING_COLUMNS: &str = "outlet_id, outlet_name, address, city, state, phone, \
                               operating_hours, has_drive_thru, has_wifi";

/// The shape of a generated outlet query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Location,
    LocationDriveThru,
    LocationWifi,
    DriveThru,
    Wifi,
    OperatingHours,
    Count,
    All,
}

/// A generated, parameterized SQL query plus routing metadata
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    pub sql: String,
    pub params: Vec<String>,
    pub kind: QueryKind,
    /// Normalized location for location-scoped kinds
    pub location: Option<String>,
    /// Search term for operating-hours lookups
    pub outlet_name: Option<String>,
    /// False when the requested location failed whitelist validation
    pub valid: bool,
}

#[derive(Debug, Clone, Copy)]
enum Handler {
    LocationDriveThru,
    LocationWifi,
    Location,
    DriveThru,
    Wifi,
    OperatingHours,
    Count,
    All,
}

/// Converts natural language queries to SQL for the outlets database
#[derive(Debug)]
pub struct OutletQueryGenerator {
    patterns: Vec<(Regex, Handler)>,
}

impl OutletQueryGenerator {
    pub fn new() -> Self {
        // Combined queries must come before plain location queries.
        let table: &[(&str, Handler)] = &[
            (
                r"outlets?\s+in\s+([a-z0-9\s'\-;]+?)\s+with\s+drive[\s-]?thro?u?gh?",
                Handler::LocationDriveThru,
            ),
            (
                r"outlets?\s+in\s+([a-z0-9\s'\-;]+?)\s+(?:that\s+)?(?:have|has)\s+wifi",
                Handler::LocationWifi,
            ),
            (r"outlets?\s+in\s+([a-z0-9\s'\-;]+?)\s*$", Handler::Location),
            (
                r"(?:find|show|list|get)\s+(?:me\s+)?(?:all\s+)?outlets?\s+in\s+([a-z0-9\s'\-;]+)",
                Handler::Location,
            ),
            (
                r"where\s+(?:are|is)\s+(?:the\s+)?outlets?\s+in\s+([a-z0-9\s'\-;]+)",
                Handler::Location,
            ),
            (r"(?:which|what)\s+outlets?\s+(?:have|has)\s+drive[\s-]?thro?u?gh?", Handler::DriveThru),
            (r"outlets?\s+with\s+drive[\s-]?thro?u?gh?", Handler::DriveThru),
            (r"drive[\s-]?thro?u?gh?\s+outlets?", Handler::DriveThru),
            (r"(?:which|what)\s+outlets?\s+(?:have|has)\s+wifi", Handler::Wifi),
            (r"outlets?\s+with\s+wifi", Handler::Wifi),
            (r"outlets?\s+(?:that\s+)?(?:have|has)\s+wifi", Handler::Wifi),
            (r"wifi\s+outlets?", Handler::Wifi),
            (
                r"(?:opening|operating)\s+hours?\s+(?:for|of)\s+(.+?)(?:\s+outlet)?$",
                Handler::OperatingHours,
            ),
            (r"when\s+(?:does|is)\s+(.+?)\s+(?:outlet\s+)?open", Handler::OperatingHours),
            (r"how\s+many\s+outlets?\s+(?:are\s+)?(?:there\s+)?in\s+([a-z\s]+)", Handler::Count),
            (r"count\s+outlets?\s+in\s+([a-z\s]+)", Handler::Count),
            (r"^(?:show|list|get)\s+(?:me\s+)?(?:all\s+)?outlets?$", Handler::All),
            (r"^all\s+outlets?$", Handler::All),
        ];

        let patterns = table
            .iter()
            .map(|(pattern, handler)| (Regex::new(pattern).expect("static pattern"), *handler))
            .collect();

        Self { patterns }
    }

    /// Convert a natural language query into a [QueryPlan]
    ///
    /// Falls back to the all-outlets listing when no pattern matches.
    pub fn generate(&self, natural_query: &str) -> QueryPlan {
        let query = natural_query.to_lowercase();
        let query = query.trim();

        for (pattern, handler) in &self.patterns {
            if let Some(captures) = pattern.captures(query) {
                let capture = captures.get(1).map(|m| m.as_str());
                return match handler {
                    Handler::LocationDriveThru => {
                        Self::location_plan(capture.unwrap_or_default(), QueryKind::LocationDriveThru)
                    }
                    Handler::LocationWifi => {
                        Self::location_plan(capture.unwrap_or_default(), QueryKind::LocationWifi)
                    }
                    Handler::Location => Self::location_plan(capture.unwrap_or_default(), QueryKind::Location),
                    Handler::DriveThru => Self::feature_plan(QueryKind::DriveThru),
                    Handler::Wifi => Self::feature_plan(QueryKind::Wifi),
                    Handler::OperatingHours => Self::hours_plan(capture.unwrap_or_default()),
                    Handler::Count => Self::count_plan(capture.unwrap_or_default()),
                    Handler::All => Self::all_plan(),
                };
            }
        }

        Self::all_plan()
    }

    fn normalize_location(location: &str) -> String {
        let location = location.trim().to_lowercase();

        for (alias, full) in CITY_ALIASES {
            if location == *alias {
                return (*full).to_string();
            }
        }

        title_case(&location)
    }

    fn validate_location(location: &str) -> bool {
        let location = location.to_lowercase();
        let location = location.trim();
        ALLOWED_CITIES.contains(&location) || ALLOWED_STATES.contains(&location)
    }

    fn location_plan(raw_location: &str, kind: QueryKind) -> QueryPlan {
        let location = Self::normalize_location(raw_location);

        if !Self::validate_location(&location) {
            return QueryPlan {
                sql: "SELECT * FROM outlets WHERE 1=0".to_string(),
                params: vec![],
                kind,
                location: Some(location),
                outlet_name: None,
                valid: false,
            };
        }

        let feature_clause = match kind {
            QueryKind::LocationDriveThru => "\n              AND has_drive_thru = TRUE",
            QueryKind::LocationWifi => "\n              AND has_wifi = TRUE",
            _ => "",
        };

        let sql = format!(
            "SELECT {}\n            FROM outlets\n            WHERE (LOWER(city) = LOWER(?) OR LOWER(state) = LOWER(?)){}\n            ORDER BY outlet_name",
            LISTING_COLUMNS, feature_clause
        );

        QueryPlan {
            sql,
            params: vec![location.clone(), location.clone()],
            kind,
            location: Some(location),
            outlet_name: None,
            valid: true,
        }
    }

    fn feature_plan(kind: QueryKind) -> QueryPlan {
        let feature_column = match kind {
            QueryKind::DriveThru => "has_drive_thru",
            _ => "has_wifi",
        };

        let sql = format!(
            "SELECT {}\n            FROM outlets\n            WHERE {} = TRUE\n            ORDER BY city, outlet_name",
            LISTING_COLUMNS, feature_column
        );

        QueryPlan { sql, params: vec![], kind, location: None, outlet_name: None, valid: true }
    }

    fn hours_plan(raw_name: &str) -> QueryPlan {
        let outlet_name = raw_name.trim().to_string();
        let search_pattern = format!("%{}%", outlet_name);

        let sql = "SELECT outlet_id, outlet_name, address, city, operating_hours\n            FROM outlets\n            WHERE LOWER(outlet_name) LIKE LOWER(?)\n               OR LOWER(address) LIKE LOWER(?)\n            ORDER BY outlet_name\n            LIMIT 5"
            .to_string();

        QueryPlan {
            sql,
            params: vec![search_pattern.clone(), search_pattern],
            kind: QueryKind::OperatingHours,
            location: None,
            outlet_name: Some(outlet_name),
            valid: true,
        }
    }

    fn count_plan(raw_location: &str) -> QueryPlan {
        let location = Self::normalize_location(raw_location);

        if !Self::validate_location(&location) {
            return QueryPlan {
                sql: "SELECT 0 as count".to_string(),
                params: vec![],
                kind: QueryKind::Count,
                location: Some(location),
                outlet_name: None,
                valid: false,
            };
        }

        let sql = "SELECT COUNT(*) as count\n            FROM outlets\n            WHERE LOWER(city) = LOWER(?) OR LOWER(state) = LOWER(?)"
            .to_string();

        QueryPlan {
            sql,
            params: vec![location.clone(), location.clone()],
            kind: QueryKind::Count,
            location: Some(location),
            outlet_name: None,
            valid: true,
        }
    }

    fn all_plan() -> QueryPlan {
        let sql = format!(
            "SELECT {}\n            FROM outlets\n            ORDER BY state, city, outlet_name",
            LISTING_COLUMNS
        );

        QueryPlan { sql, params: vec![], kind: QueryKind::All, location: None, outlet_name: None, valid: true }
    }
}

impl Default for OutletQueryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Uppercase the first letter of each whitespace-separated word
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_by_city() {
        let generator = OutletQueryGenerator::new();
        let plan = generator.generate("Find outlets in Petaling Jaya");

        assert!(plan.sql.contains("SELECT"));
        assert!(plan.sql.contains("FROM outlets"));
        assert!(plan.sql.contains("LOWER(city)"));
        assert_eq!(plan.params, vec!["Petaling Jaya".to_string(), "Petaling Jaya".to_string()]);
        assert_eq!(plan.kind, QueryKind::Location);
        assert_eq!(plan.location.as_deref(), Some("Petaling Jaya"));
        assert!(plan.valid);
    }

    #[test]
    fn test_query_by_state() {
        let generator = OutletQueryGenerator::new();
        let plan = generator.generate("Show me outlets in Selangor");

        assert_eq!(plan.params, vec!["Selangor".to_string(), "Selangor".to_string()]);
        assert_eq!(plan.kind, QueryKind::Location);
        assert_eq!(plan.location.as_deref(), Some("Selangor"));
    }

    #[test]
    fn test_city_alias_expansion() {
        let generator = OutletQueryGenerator::new();
        let plan = generator.generate("outlets in kl");

        assert_eq!(plan.location.as_deref(), Some("Kuala Lumpur"));
        assert!(plan.valid);
    }

    #[test]
    fn test_invalid_location_flagged() {
        let generator = OutletQueryGenerator::new();
        let plan = generator.generate("outlets in faketown");

        assert!(!plan.valid);
        assert_eq!(plan.kind, QueryKind::Location);
        assert_eq!(plan.location.as_deref(), Some("Faketown"));
        assert!(plan.sql.contains("1=0"));
        assert!(plan.params.is_empty());
    }

    #[test]
    fn test_drive_thru_query() {
        let generator = OutletQueryGenerator::new();
        let plan = generator.generate("Which outlets have drive-through?");

        assert!(plan.sql.contains("has_drive_thru"));
        assert!(plan.sql.contains("TRUE"));
        assert!(plan.params.is_empty());
        assert_eq!(plan.kind, QueryKind::DriveThru);
    }

    #[test]
    fn test_wifi_query() {
        let generator = OutletQueryGenerator::new();
        let plan = generator.generate("outlets with WiFi");

        assert!(plan.sql.contains("has_wifi"));
        assert_eq!(plan.kind, QueryKind::Wifi);
    }

    #[test]
    fn test_combined_location_and_drive_thru() {
        let generator = OutletQueryGenerator::new();
        let plan = generator.generate("outlets in Selangor with drive-through");

        assert_eq!(plan.kind, QueryKind::LocationDriveThru);
        assert!(plan.sql.contains("has_drive_thru"));
        assert!(plan.sql.contains("LOWER(city)"));
        assert_eq!(plan.params, vec!["Selangor".to_string(), "Selangor".to_string()]);
    }

    #[test]
    fn test_combined_location_and_wifi() {
        let generator = OutletQueryGenerator::new();
        let plan = generator.generate("outlets in Selangor that have wifi");

        assert_eq!(plan.kind, QueryKind::LocationWifi);
        assert!(plan.sql.contains("has_wifi"));
    }

    #[test]
    fn test_operating_hours_query() {
        let generator = OutletQueryGenerator::new();
        let plan = generator.generate("operating hours for SS2");

        assert_eq!(plan.kind, QueryKind::OperatingHours);
        assert_eq!(plan.outlet_name.as_deref(), Some("ss2"));
        assert_eq!(plan.params, vec!["%ss2%".to_string(), "%ss2%".to_string()]);
        assert!(plan.sql.contains("LIKE"));
    }

    #[test]
    fn test_count_query() {
        let generator = OutletQueryGenerator::new();
        let plan = generator.generate("How many outlets are there in KL");

        assert_eq!(plan.kind, QueryKind::Count);
        assert!(plan.sql.contains("COUNT(*)"));
        assert_eq!(plan.location.as_deref(), Some("Kuala Lumpur"));
        assert!(plan.valid);
    }

    #[test]
    fn test_count_invalid_location() {
        let generator = OutletQueryGenerator::new();
        let plan = generator.generate("how many outlets in atlantis");

        assert_eq!(plan.kind, QueryKind::Count);
        assert!(!plan.valid);
        assert_eq!(plan.sql, "SELECT 0 as count");
    }

    #[test]
    fn test_all_outlets_query() {
        let generator = OutletQueryGenerator::new();
        let plan = generator.generate("show me all outlets");

        assert_eq!(plan.kind, QueryKind::All);
        assert!(plan.params.is_empty());
        assert!(plan.valid);
    }

    #[test]
    fn test_unmatched_query_falls_back_to_all() {
        let generator = OutletQueryGenerator::new();
        let plan = generator.generate("tell me something nice");

        assert_eq!(plan.kind, QueryKind::All);
        assert!(plan.valid);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("petaling jaya"), "Petaling Jaya");
        assert_eq!(title_case("kl"), "Kl");
        assert_eq!(title_case(""), "");
    }
}
