//! The four read-only collections the globe is built from.

use crate::error::Result;
use crate::records::{FacilityRecord, LocationRecord, RouteRecord};

/// A source of supply-chain rows: the hosted database or the embedded sample.
///
/// Every method returns an empty vec when the collection has no rows and an
/// error when the store could not be queried.
#[allow(async_fn_in_trait)]
pub trait SupplyChainStore {
    /// Non-EU extraction sites.
    async fn material_sources(&self) -> Result<Vec<LocationRecord>>;

    /// EU manufacturing facilities.
    async fn manufacturing_facilities(&self) -> Result<Vec<FacilityRecord>>;

    /// EU strategic ports.
    async fn ports(&self) -> Result<Vec<LocationRecord>>;

    /// Supply routes with origin, destination and material joined in.
    async fn supply_routes(&self) -> Result<Vec<RouteRecord>>;
}

/// Name check used to pick ports out of the EU locations collection.
pub fn looks_like_port(name: Option<&str>) -> bool {
    name.map(|n| n.to_lowercase().contains("port"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_names() {
        assert!(looks_like_port(Some("Port of Rotterdam")));
        assert!(looks_like_port(Some("Antwerp-Bruges PORT")));
        assert!(!looks_like_port(Some("Northvolt Ett")));
        assert!(!looks_like_port(None));
    }
}
