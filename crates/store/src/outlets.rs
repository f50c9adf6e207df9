//! SQLite-backed outlet database
//!
//! Holds the retail outlet catalog queried by the Text2SQL search. The
//! store keeps only the database path and opens a short-lived connection
//! per operation, committing on success.

use crate::error::Result;

use rusqlite::{Connection, params, params_from_iter};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// A retail outlet record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outlet {
    pub outlet_id: String,
    pub outlet_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub phone: Option<String>,
    pub operating_hours: Option<String>,
    pub has_drive_thru: bool,
    pub has_wifi: bool,
    pub seating_capacity: Option<i64>,
    pub opening_date: Option<String>,
}

/// A row returned by outlet listing queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutletRow {
    pub outlet_id: String,
    pub outlet_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub operating_hours: Option<String>,
    pub has_drive_thru: bool,
    pub has_wifi: bool,
}

/// A row returned by operating-hours queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoursRow {
    pub outlet_name: String,
    pub city: String,
    pub operating_hours: Option<String>,
}

/// Handle to the outlet database
///
/// Cheap to clone; connections are opened per call so the handle stays
/// `Send + Sync` and usable from concurrent tool invocations.
#[derive(Debug, Clone)]
pub struct OutletStore {
    db_path: PathBuf,
}

impl OutletStore {
    /// Create a store handle for the given database file
    ///
    /// The parent directory is created if missing; the schema is not.
    /// Call [OutletStore::init_schema] (or the ingest command) first.
    pub fn new(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self { db_path })
    }

    /// Path of the underlying database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn connection(&self) -> Result<Connection> {
        Ok(Connection::open(&self.db_path)?)
    }

    /// Create the outlets table and its indexes if they do not exist
    #[instrument(skip(self), fields(db_path = %self.db_path.display()))]
    pub fn init_schema(&self) -> Result<()> {
        let conn = self.connection()?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS outlets (
                outlet_id TEXT PRIMARY KEY,
                outlet_name TEXT NOT NULL,
                address TEXT NOT NULL,
                city TEXT NOT NULL,
                state TEXT NOT NULL,
                postcode TEXT NOT NULL,
                latitude REAL,
                longitude REAL,
                phone TEXT,
                operating_hours TEXT,
                has_drive_thru BOOLEAN DEFAULT FALSE,
                has_wifi BOOLEAN DEFAULT FALSE,
                seating_capacity INTEGER,
                opening_date DATE,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
            [],
        )?;

        conn.execute("CREATE INDEX IF NOT EXISTS idx_outlets_city ON outlets(city)", [])?;
        conn.execute("CREATE INDEX IF NOT EXISTS idx_outlets_state ON outlets(state)", [])?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_outlets_drive_thru ON outlets(has_drive_thru)",
            [],
        )?;

        tracing::debug!("outlet schema initialized");
        Ok(())
    }

    /// Insert an outlet, updating the record when the id already exists
    pub fn upsert(&self, outlet: &Outlet) -> Result<()> {
        let conn = self.connection()?;

        conn.execute(
            r#"
            INSERT INTO outlets (
                outlet_id, outlet_name, address, city, state, postcode,
                latitude, longitude, phone, operating_hours,
                has_drive_thru, has_wifi, seating_capacity, opening_date
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
            ON CONFLICT (outlet_id) DO UPDATE SET
                outlet_name = excluded.outlet_name,
                address = excluded.address,
                city = excluded.city,
                state = excluded.state,
                postcode = excluded.postcode,
                latitude = excluded.latitude,
                longitude = excluded.longitude,
                phone = excluded.phone,
                operating_hours = excluded.operating_hours,
                has_drive_thru = excluded.has_drive_thru,
                has_wifi = excluded.has_wifi,
                seating_capacity = excluded.seating_capacity,
                opening_date = excluded.opening_date,
                updated_at = CURRENT_TIMESTAMP
            "#,
            params![
                outlet.outlet_id,
                outlet.outlet_name,
                outlet.address,
                outlet.city,
                outlet.state,
                outlet.postcode,
                outlet.latitude,
                outlet.longitude,
                outlet.phone,
                outlet.operating_hours,
                outlet.has_drive_thru,
                outlet.has_wifi,
                outlet.seating_capacity,
                outlet.opening_date,
            ],
        )?;

        Ok(())
    }

    /// Number of outlets in the database
    pub fn count(&self) -> Result<i64> {
        let conn = self.connection()?;
        let count = conn.query_row("SELECT COUNT(*) FROM outlets", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Whether an outlet with the given id exists
    pub fn exists(&self, outlet_id: &str) -> Result<bool> {
        let conn = self.connection()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM outlets WHERE outlet_id = ?1",
            params![outlet_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Execute a listing query produced by the Text2SQL generator
    ///
    /// The SQL must select the standard listing columns: outlet_id,
    /// outlet_name, address, city, state, phone, operating_hours,
    /// has_drive_thru, has_wifi.
    pub fn select_outlets(&self, sql: &str, query_params: &[String]) -> Result<Vec<OutletRow>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(sql)?;

        let rows = stmt
            .query_map(params_from_iter(query_params.iter()), |row| {
                Ok(OutletRow {
                    outlet_id: row.get(0)?,
                    outlet_name: row.get(1)?,
                    address: row.get(2)?,
                    city: row.get(3)?,
                    state: row.get(4)?,
                    phone: row.get(5)?,
                    operating_hours: row.get(6)?,
                    has_drive_thru: row.get(7)?,
                    has_wifi: row.get(8)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    /// Execute a count query produced by the Text2SQL generator
    pub fn select_count(&self, sql: &str, query_params: &[String]) -> Result<i64> {
        let conn = self.connection()?;
        let count = conn.query_row(sql, params_from_iter(query_params.iter()), |row| row.get(0))?;
        Ok(count)
    }

    /// Execute an operating-hours query produced by the Text2SQL generator
    ///
    /// The SQL must select outlet_id, outlet_name, address, city,
    /// operating_hours.
    pub fn select_hours(&self, sql: &str, query_params: &[String]) -> Result<Vec<HoursRow>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(sql)?;

        let rows = stmt
            .query_map(params_from_iter(query_params.iter()), |row| {
                Ok(HoursRow { outlet_name: row.get(1)?, city: row.get(3)?, operating_hours: row.get(4)? })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    /// Drop the outlets table (development and tests only)
    pub fn drop_all_tables(&self) -> Result<()> {
        let conn = self.connection()?;
        conn.execute("DROP TABLE IF EXISTS outlets", [])?;
        tracing::warn!("all outlet tables dropped");
        Ok(())
    }
}
