//! Fold the heterogeneous store rows into the canonical [`Location`] and [`Route`].
//!
//! Default resolution, one rule per field:
//!
//! | field | rule |
//! |---|---|
//! | kind | `type`, else `facility_type`, else none |
//! | capacity | `capacity`, else `output_capacity`, else none |
//! | strategic importance | `eu_strategic_importance`, else `strategic_importance`, else 1 |
//! | is_eu_facility | explicit flag, else `region == "EU"` |
//! | country, region | value, else empty |
//! | endpoint name / material name | value, else `"Unknown"` / `"Material"` |
//! | coordinates of route endpoints | value, else 0.0 |
//! | volume | value floored at 0, else 0 |
//!
//! A stored zero (or negative) capacity or importance counts as missing and
//! falls through to the next rule.

use crate::model::{Endpoint, Location, LocationType, MaterialRef, RiskLevel, Route};
use crate::records::{EndpointRecord, FacilityRecord, LocationRecord, MaterialRecord, RouteRecord};
use log::warn;

pub const DEFAULT_IMPORTANCE: u8 = 1;
const EU_REGION: &str = "EU";
const UNKNOWN_ENDPOINT: &str = "Unknown";
const UNKNOWN_MATERIAL: &str = "Material";

fn positive(v: Option<i64>) -> Option<i64> {
    v.filter(|&v| v > 0)
}

fn importance(primary: Option<i64>, secondary: Option<i64>) -> u8 {
    positive(primary)
        .or(positive(secondary))
        .map(|v| v.min(u8::MAX as i64) as u8)
        .unwrap_or(DEFAULT_IMPORTANCE)
}

fn positive_capacity(v: Option<i64>) -> Option<u64> {
    positive(v).map(|v| v as u64)
}

fn is_eu(flag: Option<bool>, region: &str) -> bool {
    flag.unwrap_or(region == EU_REGION)
}

/// Returns `None` when the row has no usable coordinates.
pub fn location_from_record(record: &LocationRecord) -> Option<Location> {
    let region = record.region.clone().unwrap_or_default();
    let location = Location {
        name: record.name.clone().unwrap_or_default(),
        lat: record.lat?,
        lng: record.lng?,
        kind: record.kind.as_deref().and_then(LocationType::parse),
        country: record.country.clone().unwrap_or_default(),
        is_eu_facility: is_eu(record.is_eu_facility, &region),
        region,
        capacity: positive_capacity(record.capacity),
        strategic_importance: importance(
            record.eu_strategic_importance,
            record.strategic_importance,
        ),
    };
    Some(location)
}

/// Returns `None` when the row has no usable coordinates.
pub fn location_from_facility(record: &FacilityRecord) -> Option<Location> {
    let region = record.region.clone().unwrap_or_default();
    let location = Location {
        name: record.name.clone().unwrap_or_default(),
        lat: record.lat?,
        lng: record.lng?,
        kind: record.facility_type.as_deref().and_then(LocationType::parse),
        country: record.country.clone().unwrap_or_default(),
        is_eu_facility: is_eu(record.is_eu_facility, &region),
        region,
        capacity: positive_capacity(record.output_capacity),
        strategic_importance: importance(record.eu_strategic_importance, None),
    };
    Some(location)
}

fn endpoint(record: Option<&EndpointRecord>) -> Endpoint {
    match record {
        Some(r) => Endpoint {
            name: r.name.clone().unwrap_or_else(|| UNKNOWN_ENDPOINT.to_string()),
            lat: r.lat.unwrap_or(0.0),
            lng: r.lng.unwrap_or(0.0),
            country: r.country.clone(),
        },
        None => Endpoint {
            name: UNKNOWN_ENDPOINT.to_string(),
            lat: 0.0,
            lng: 0.0,
            country: None,
        },
    }
}

fn material(record: Option<&MaterialRecord>) -> MaterialRef {
    MaterialRef {
        name: record
            .and_then(|m| m.name.clone())
            .unwrap_or_else(|| UNKNOWN_MATERIAL.to_string()),
        kind: record.and_then(|m| m.kind.clone()),
    }
}

pub fn route_from_record(record: &RouteRecord) -> Route {
    let mut route = Route::new(
        endpoint(record.origin.as_ref()),
        endpoint(record.destination.as_ref()),
        material(record.material.as_ref()),
        record.volume.map(|v| v.max(0) as u64).unwrap_or(0),
        record.risk_level.as_deref().and_then(RiskLevel::parse),
    );
    if let Some(name) = record.name.as_ref().filter(|n| !n.trim().is_empty()) {
        route.label = name.clone();
    }
    route.transit_days = record.transit_time.map(|t| t.clamp(0, u32::MAX as i64) as u32);
    route.alternative_available = record.alternative_available.unwrap_or(false);
    route
}

/// Merge the three location collections into one list, dropping rows
/// without coordinates or with coordinates off the globe.
pub fn normalize_locations(
    sources: &[LocationRecord],
    facilities: &[FacilityRecord],
    ports: &[LocationRecord],
) -> Vec<Location> {
    let candidates = sources
        .iter()
        .map(|r| (r.name.as_deref(), location_from_record(r)))
        .chain(
            facilities
                .iter()
                .map(|r| (r.name.as_deref(), location_from_facility(r))),
        )
        .chain(ports.iter().map(|r| (r.name.as_deref(), location_from_record(r))));

    let mut locations = Vec::new();
    for (name, location) in candidates {
        match location {
            Some(l) if l.has_valid_coordinates() => locations.push(l),
            Some(l) => warn!(
                "Dropping {} with coordinates off the globe ({}, {})",
                l.name, l.lat, l.lng
            ),
            None => warn!(
                "Dropping {} without coordinates",
                name.unwrap_or(UNKNOWN_ENDPOINT)
            ),
        }
    }
    locations
}

pub fn normalize_routes(routes: &[RouteRecord]) -> Vec<Route> {
    routes.iter().map(route_from_record).collect()
}
