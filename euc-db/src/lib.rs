//! In-memory SQLite store for the EU supply-chain sample dataset.
//!
//! The hosted database is the primary source of locations and routes. When
//! it cannot be reached the globe falls back to this store, which holds a
//! small embedded dataset and answers the same four collection queries.
//!
//! # Usage
//!
//! ```rust
//! use euc_db::Database;
//!
//! let db = Database::with_sample_data().unwrap();
//! let routes = db.query_supply_routes().unwrap();
//! assert_eq!(routes.len(), 3);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod schema;
mod loader;
mod queries;

use euc_core::records::{FacilityRecord, LocationRecord, RouteRecord};
use euc_core::store::SupplyChainStore;
use euc_core::EucError;
use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// Embedded CSV fixtures for the sample dataset.
pub static MATERIALS_CSV: &str = include_str!("../../fixtures/materials.csv");
pub static LOCATIONS_CSV: &str = include_str!("../../fixtures/locations.csv");
pub static FACILITIES_CSV: &str = include_str!("../../fixtures/manufacturing_facilities.csv");
pub static ROUTES_CSV: &str = include_str!("../../fixtures/supply_routes.csv");

/// In-memory SQLite database of materials, locations, facilities and routes.
///
/// Cheaply cloneable (via `Rc`); clones share one connection.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it with CSV data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Create a database populated with the embedded sample dataset.
    pub fn with_sample_data() -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.load_materials(MATERIALS_CSV)?;
        db.load_locations(LOCATIONS_CSV)?;
        db.load_facilities(FACILITIES_CSV)?;
        db.load_routes(ROUTES_CSV)?;
        Ok(db)
    }
}

fn store_error(collection: &'static str, e: anyhow::Error) -> EucError {
    EucError::Store {
        collection,
        reason: e.to_string(),
    }
}

impl SupplyChainStore for Database {
    async fn material_sources(&self) -> euc_core::Result<Vec<LocationRecord>> {
        self.query_material_sources()
            .map_err(|e| store_error("locations", e))
    }

    async fn manufacturing_facilities(&self) -> euc_core::Result<Vec<FacilityRecord>> {
        self.query_manufacturing_facilities()
            .map_err(|e| store_error("manufacturing_facilities", e))
    }

    async fn ports(&self) -> euc_core::Result<Vec<LocationRecord>> {
        self.query_ports().map_err(|e| store_error("locations", e))
    }

    async fn supply_routes(&self) -> euc_core::Result<Vec<RouteRecord>> {
        self.query_supply_routes()
            .map_err(|e| store_error("supply_routes", e))
    }
}
