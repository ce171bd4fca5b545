//! Joint fetch of the four collections with all-or-nothing fallback.

use chrono::{DateTime, Utc};
use euc_core::model::{Location, Route};
use euc_core::normalize::{normalize_locations, normalize_routes};
use euc_core::store::SupplyChainStore;
use euc_db::Database;
use log::{error, info, warn};
use serde::Serialize;

/// Where a snapshot's rows came from.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    Live,
    Sample,
}

/// Normalized locations and routes as of one load.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub locations: Vec<Location>,
    pub routes: Vec<Route>,
    pub origin: DataOrigin,
    pub loaded_at: DateTime<Utc>,
}

impl Snapshot {
    fn empty(origin: DataOrigin) -> Self {
        Self {
            locations: Vec::new(),
            routes: Vec::new(),
            origin,
            loaded_at: Utc::now(),
        }
    }
}

/// Fetch all four collections concurrently and normalize them.
///
/// Fails if any single fetch fails.
pub async fn fetch_snapshot<S: SupplyChainStore>(
    store: &S,
    origin: DataOrigin,
) -> euc_core::Result<Snapshot> {
    let (sources, facilities, ports, routes) = futures::try_join!(
        store.material_sources(),
        store.manufacturing_facilities(),
        store.ports(),
        store.supply_routes(),
    )?;
    let locations = normalize_locations(&sources, &facilities, &ports);
    let routes = normalize_routes(&routes);
    info!(
        "Loaded {} locations and {} routes ({:?})",
        locations.len(),
        routes.len(),
        origin
    );
    Ok(Snapshot {
        locations,
        routes,
        origin,
        loaded_at: Utc::now(),
    })
}

/// The embedded sample dataset, normalized the same way as live data.
pub async fn sample_snapshot() -> Snapshot {
    let db = match Database::with_sample_data() {
        Ok(db) => db,
        Err(e) => {
            error!("Embedded sample data failed to load: {}", e);
            return Snapshot::empty(DataOrigin::Sample);
        }
    };
    match fetch_snapshot(&db, DataOrigin::Sample).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Embedded sample data failed to query: {}", e);
            Snapshot::empty(DataOrigin::Sample)
        }
    }
}

/// Live data when every fetch succeeds, otherwise the sample dataset.
pub async fn load_snapshot<S: SupplyChainStore>(store: &S) -> Snapshot {
    match fetch_snapshot(store, DataOrigin::Live).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("Error loading data, falling back to sample data: {}", e);
            sample_snapshot().await
        }
    }
}
