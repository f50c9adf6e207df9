//! Outlet database for the retail chatbot
//!
//! SQLite-backed storage for the outlet catalog, plus an embedded sample
//! dataset for development setups.
//!
//! # Example
//!
//! ```ignore
//! use brewchat_store::{OutletStore, seed};
//!
//! let store = OutletStore::new("data/outlets.db")?;
//! seed::ingest(&store)?;
//!
//! let rows = store.select_outlets(
//!     "SELECT outlet_id, outlet_name, address, city, state, phone, operating_hours, \
//!      has_drive_thru, has_wifi FROM outlets WHERE LOWER(city) = LOWER(?1)",
//!     &["Petaling Jaya".to_string()],
//! )?;
//! ```

mod error;
mod outlets;
pub mod seed;

pub use error::{Error, Result};
pub use outlets::{HoursRow, Outlet, OutletRow, OutletStore};
pub use seed::IngestReport;
