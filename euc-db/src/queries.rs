//! Collection queries answering the same questions as the hosted store.
//!
//! Rows come back in the raw [`euc_core::records`] shapes so that the
//! sample dataset goes through exactly the same normalization as live data.

use crate::Database;
use euc_core::records::{
    EndpointRecord, FacilityRecord, LocationRecord, MaterialRecord, RouteRecord,
};
use euc_core::store::looks_like_port;
use rusqlite::Row;

const LOCATION_COLUMNS: &str = "name, type, lat, lng, country, region, capacity,
     eu_strategic_importance, is_eu_facility";

fn location_row(row: &Row<'_>) -> rusqlite::Result<LocationRecord> {
    Ok(LocationRecord {
        name: row.get(0)?,
        kind: row.get(1)?,
        lat: row.get(2)?,
        lng: row.get(3)?,
        country: row.get(4)?,
        region: row.get(5)?,
        capacity: row.get(6)?,
        eu_strategic_importance: row.get(7)?,
        strategic_importance: None,
        is_eu_facility: row.get(8)?,
    })
}

impl Database {
    /// Non-EU locations, northernmost first.
    pub fn query_material_sources(&self) -> anyhow::Result<Vec<LocationRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM locations WHERE is_eu_facility = 0 ORDER BY lat DESC",
            LOCATION_COLUMNS
        ))?;
        let rows = stmt
            .query_map([], location_row)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_material_sources returned {} records", rows.len());
        Ok(rows)
    }

    /// EU manufacturing facilities, largest output first.
    pub fn query_manufacturing_facilities(&self) -> anyhow::Result<Vec<FacilityRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT name, facility_type, lat, lng, country, region,
                    output_capacity, eu_strategic_importance
             FROM manufacturing_facilities
             ORDER BY output_capacity DESC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(FacilityRecord {
                    name: row.get(0)?,
                    facility_type: row.get(1)?,
                    lat: row.get(2)?,
                    lng: row.get(3)?,
                    country: row.get(4)?,
                    region: row.get(5)?,
                    output_capacity: row.get(6)?,
                    eu_strategic_importance: row.get(7)?,
                    is_eu_facility: None,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_manufacturing_facilities returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// EU locations whose name marks them as a port.
    pub fn query_ports(&self) -> anyhow::Result<Vec<LocationRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM locations WHERE is_eu_facility = 1 ORDER BY capacity DESC",
            LOCATION_COLUMNS
        ))?;
        let rows = stmt
            .query_map([], location_row)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|l| looks_like_port(l.name.as_deref()))
            .collect::<Vec<_>>();
        log::info!("query: query_ports returned {} records", rows.len());
        Ok(rows)
    }

    /// Supply routes joined with their endpoints and material, in fixture
    /// order rather than the hosted store's risk ordering.
    ///
    /// Dangling references produce `None` joins rather than dropping the route.
    pub fn query_supply_routes(&self) -> anyhow::Result<Vec<RouteRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT r.volume, r.transit_time, r.risk_level, r.alternative_available,
                    o.id, o.name, o.lat, o.lng, o.country,
                    d.id, d.name, d.lat, d.lng, d.country,
                    m.id, m.name, m.type, m.criticality_level
             FROM supply_routes r
             LEFT JOIN locations o ON r.origin_id = o.id
             LEFT JOIN locations d ON r.destination_id = d.id
             LEFT JOIN materials m ON r.material_id = m.id
             ORDER BY r.id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                let endpoint = |base: usize| -> rusqlite::Result<Option<EndpointRecord>> {
                    let id: Option<i64> = row.get(base)?;
                    Ok(match id {
                        Some(_) => Some(EndpointRecord {
                            name: row.get(base + 1)?,
                            lat: row.get(base + 2)?,
                            lng: row.get(base + 3)?,
                            country: row.get(base + 4)?,
                        }),
                        None => None,
                    })
                };
                let material_id: Option<i64> = row.get(14)?;
                let material = match material_id {
                    Some(_) => Some(MaterialRecord {
                        name: row.get(15)?,
                        kind: row.get(16)?,
                        criticality_level: row.get(17)?,
                    }),
                    None => None,
                };
                Ok(RouteRecord {
                    name: None,
                    volume: row.get(0)?,
                    transit_time: row.get(1)?,
                    risk_level: row.get(2)?,
                    alternative_available: row.get(3)?,
                    origin: endpoint(4)?,
                    destination: endpoint(9)?,
                    material,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_supply_routes returned {} records", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    #[test]
    fn sources_exclude_eu_facilities_and_sort_north_first() {
        let db = Database::with_sample_data().unwrap();
        let sources = db.query_material_sources().unwrap();
        assert_eq!(sources.len(), 5);
        assert_eq!(sources[0].name.as_deref(), Some("Keliber Lithium Finland"));
        let lats: Vec<f64> = sources.iter().filter_map(|s| s.lat).collect();
        assert!(lats.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn ports_are_named_eu_locations() {
        let db = Database::with_sample_data().unwrap();
        let names: Vec<String> = db
            .query_ports()
            .unwrap()
            .into_iter()
            .filter_map(|p| p.name)
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Port of Rotterdam".to_string()));
        assert!(names.contains(&"Port of Hamburg".to_string()));
    }

    #[test]
    fn facilities_sorted_by_output() {
        let db = Database::with_sample_data().unwrap();
        let facilities = db.query_manufacturing_facilities().unwrap();
        assert_eq!(facilities[0].name.as_deref(), Some("Tesla Gigafactory Berlin"));
        assert_eq!(facilities[0].output_capacity, Some(500000));
    }

    #[test]
    fn routes_join_endpoints_and_material() {
        let db = Database::with_sample_data().unwrap();
        let routes = db.query_supply_routes().unwrap();
        let china = &routes[2];
        let origin = china.origin.as_ref().unwrap();
        assert_eq!(origin.name.as_deref(), Some("Bayan Obo China"));
        assert_eq!(origin.country.as_deref(), Some("China"));
        assert_eq!(
            china.destination.as_ref().and_then(|d| d.name.as_deref()),
            Some("Port of Hamburg")
        );
        assert_eq!(
            china.material.as_ref().and_then(|m| m.name.as_deref()),
            Some("Rare Earth Elements")
        );
        assert_eq!(china.risk_level.as_deref(), Some("very_high"));
        assert_eq!(routes[0].alternative_available, Some(true));
    }

    #[test]
    fn routes_keep_fixture_order() {
        let db = Database::with_sample_data().unwrap();
        let risks: Vec<String> = db
            .query_supply_routes()
            .unwrap()
            .into_iter()
            .filter_map(|r| r.risk_level)
            .collect();
        assert_eq!(risks, vec!["medium", "high", "very_high"]);
    }

    #[test]
    fn dangling_route_reference_yields_empty_join() {
        let db = Database::new().unwrap();
        db.load_routes(
            "ID,ORIGIN_ID,DESTINATION_ID,MATERIAL_ID,VOLUME,TRANSIT_TIME,RISK_LEVEL,ALTERNATIVE_AVAILABLE\n1,99,98,97,100,,low,false\n",
        )
        .unwrap();
        let routes = db.query_supply_routes().unwrap();
        assert_eq!(routes.len(), 1);
        assert!(routes[0].origin.is_none());
        assert!(routes[0].material.is_none());
        assert_eq!(routes[0].transit_time, None);
    }
}
