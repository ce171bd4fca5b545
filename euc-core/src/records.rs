//! Raw row shapes as returned by the hosted store (and the embedded sample store).
//!
//! Field names follow the relational schema. Almost everything is optional
//! because the tables disagree on which columns exist; see [`crate::normalize`]
//! for how each field is resolved.

use serde::{Deserialize, Deserializer, Serialize};

/// Row of the `locations` table (material sources and ports).
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "coordinate")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "coordinate")]
    pub lng: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub capacity: Option<i64>,
    pub eu_strategic_importance: Option<i64>,
    pub strategic_importance: Option<i64>,
    pub is_eu_facility: Option<bool>,
}

/// Row of the `manufacturing_facilities` table.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct FacilityRecord {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "coordinate")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "coordinate")]
    pub lng: Option<f64>,
    pub facility_type: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub output_capacity: Option<i64>,
    pub eu_strategic_importance: Option<i64>,
    pub is_eu_facility: Option<bool>,
}

/// Joined origin/destination of a `supply_routes` row.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct EndpointRecord {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "coordinate")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "coordinate")]
    pub lng: Option<f64>,
    pub country: Option<String>,
}

/// Joined material of a `supply_routes` row.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub criticality_level: Option<i64>,
}

/// Row of `supply_routes` with origin, destination and material embedded.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct RouteRecord {
    pub name: Option<String>,
    pub origin: Option<EndpointRecord>,
    pub destination: Option<EndpointRecord>,
    pub material: Option<MaterialRecord>,
    pub volume: Option<i64>,
    pub transit_time: Option<i64>,
    pub risk_level: Option<String>,
    pub alternative_available: Option<bool>,
}

/// DECIMAL columns arrive either as JSON numbers or as numeric strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<NumberOrText> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    })
}
