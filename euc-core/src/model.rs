//! Canonical location, route and selection types.
//!
//! Everything downstream of the loader works on these types only; the raw
//! store shapes live in [`crate::records`] and are folded into these by
//! [`crate::normalize`].

use crate::error::{EucError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of site shown on the globe.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Source,
    Port,
    BatteryPlant,
    SolarFacility,
    WindFacility,
    ProcessingPlant,
}

impl LocationType {
    /// Parse the snake_case form used by the store. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "source" => Some(LocationType::Source),
            "port" => Some(LocationType::Port),
            "battery_plant" => Some(LocationType::BatteryPlant),
            "solar_facility" => Some(LocationType::SolarFacility),
            "wind_facility" => Some(LocationType::WindFacility),
            "processing_plant" => Some(LocationType::ProcessingPlant),
            _ => None,
        }
    }

    /// EU manufacturing sites (everything that is neither a mine nor a port).
    pub fn is_manufacturing(&self) -> bool {
        matches!(
            self,
            LocationType::BatteryPlant
                | LocationType::SolarFacility
                | LocationType::WindFacility
                | LocationType::ProcessingPlant
        )
    }
}

/// A mine, port or EU facility.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// `None` when the store carried an unrecognized type string
    pub kind: Option<LocationType>,
    pub country: String,
    pub region: String,
    /// Annual capacity; units depend on the site kind
    pub capacity: Option<u64>,
    /// EU strategic importance, nominally 1-5
    pub strategic_importance: u8,
    pub is_eu_facility: bool,
}

impl Location {
    pub fn has_valid_coordinates(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    pub fn is_port(&self) -> bool {
        self.kind == Some(LocationType::Port)
    }
}

/// Ordinal route-risk category.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
    Blocked,
}

impl RiskLevel {
    /// `medium` is accepted as an alias of `moderate`; the relational schema
    /// uses the former and the dashboard the latter.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "moderate" | "medium" => Some(RiskLevel::Moderate),
            "high" => Some(RiskLevel::High),
            "very_high" => Some(RiskLevel::VeryHigh),
            "blocked" => Some(RiskLevel::Blocked),
            _ => None,
        }
    }
}

/// How the disruption projector touched a route.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    #[default]
    Normal,
    /// Duplicate shown on the detour around Africa
    Rerouted,
    /// Destination moved to another port
    Redirected,
    /// Flow stopped by an export ban
    Blocked,
}

/// One end of a supply route.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub country: Option<String>,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MaterialRef {
    pub name: String,
    pub kind: Option<String>,
}

/// A shipping lane carrying one material from a source to an EU site.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Route {
    /// Display name, `"<origin> → <destination> (<material>)"` unless rewritten by a disruption
    pub label: String,
    pub origin: Endpoint,
    pub destination: Endpoint,
    pub material: MaterialRef,
    /// Tons per year
    pub volume: u64,
    pub risk_level: Option<RiskLevel>,
    pub transit_days: Option<u32>,
    pub alternative_available: bool,
    pub status: RouteStatus,
}

impl Route {
    pub fn new(
        origin: Endpoint,
        destination: Endpoint,
        material: MaterialRef,
        volume: u64,
        risk_level: Option<RiskLevel>,
    ) -> Self {
        let label = Route::display_name(&origin, &destination, &material);
        Self {
            label,
            origin,
            destination,
            material,
            volume,
            risk_level,
            transit_days: None,
            alternative_available: false,
            status: RouteStatus::Normal,
        }
    }

    pub fn display_name(origin: &Endpoint, destination: &Endpoint, material: &MaterialRef) -> String {
        format!("{} → {} ({})", origin.name, destination.name, material.name)
    }

    /// Whether the display name contains any of `needles`.
    pub fn mentions(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.label.contains(n))
    }
}

/// Named what-if scenario selected in the control panel.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Disruption {
    #[default]
    None,
    Suez,
    Rotterdam,
    ChinaBan,
}

impl Disruption {
    pub const ALL: [Disruption; 4] = [
        Disruption::None,
        Disruption::Suez,
        Disruption::Rotterdam,
        Disruption::ChinaBan,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Disruption::None => "none",
            Disruption::Suez => "suez",
            Disruption::Rotterdam => "rotterdam",
            Disruption::ChinaBan => "china-ban",
        }
    }

    /// Control panel caption.
    pub fn title(&self) -> &'static str {
        match self {
            Disruption::None => "No disruption",
            Disruption::Suez => "Block Suez Canal",
            Disruption::Rotterdam => "Close Rotterdam Port",
            Disruption::ChinaBan => "China Export Ban",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Disruption::None => "Baseline supply routes",
            Disruption::Suez => "Reroute via Africa (+21 days)",
            Disruption::Rotterdam => "Redirect to Hamburg",
            Disruption::ChinaBan => "Critical supply disruption",
        }
    }
}

impl fmt::Display for Disruption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Disruption {
    type Err = EucError;

    fn from_str(s: &str) -> Result<Self> {
        Disruption::ALL
            .into_iter()
            .find(|d| d.id() == s.trim())
            .ok_or_else(|| EucError::UnknownDisruption(s.to_string()))
    }
}

/// Material selector in the control panel.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialFilter {
    #[default]
    All,
    Lithium,
    Cobalt,
    RareEarth,
    Nickel,
    Polysilicon,
}

impl MaterialFilter {
    pub const ALL: [MaterialFilter; 6] = [
        MaterialFilter::All,
        MaterialFilter::Lithium,
        MaterialFilter::Cobalt,
        MaterialFilter::RareEarth,
        MaterialFilter::Nickel,
        MaterialFilter::Polysilicon,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            MaterialFilter::All => "all",
            MaterialFilter::Lithium => "lithium",
            MaterialFilter::Cobalt => "cobalt",
            MaterialFilter::RareEarth => "rare-earth",
            MaterialFilter::Nickel => "nickel",
            MaterialFilter::Polysilicon => "polysilicon",
        }
    }

    fn keyword(&self) -> Option<&'static str> {
        match self {
            MaterialFilter::All => None,
            MaterialFilter::Lithium => Some("lithium"),
            MaterialFilter::Cobalt => Some("cobalt"),
            MaterialFilter::RareEarth => Some("rare earth"),
            MaterialFilter::Nickel => Some("nickel"),
            MaterialFilter::Polysilicon => Some("polysilicon"),
        }
    }

    /// Case-insensitive match on the material name.
    pub fn matches(&self, material_name: &str) -> bool {
        match self.keyword() {
            None => true,
            Some(k) => material_name.to_lowercase().contains(k),
        }
    }
}

impl FromStr for MaterialFilter {
    type Err = EucError;

    fn from_str(s: &str) -> Result<Self> {
        MaterialFilter::ALL
            .into_iter()
            .find(|m| m.id() == s.trim())
            .ok_or_else(|| EucError::UnknownMaterial(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(name: &str) -> Endpoint {
        Endpoint {
            name: name.to_string(),
            lat: 0.0,
            lng: 0.0,
            country: None,
        }
    }

    #[test]
    fn route_label_joins_endpoints_and_material() {
        let route = Route::new(
            endpoint("China"),
            endpoint("Hamburg"),
            MaterialRef {
                name: "Rare Earths".to_string(),
                kind: None,
            },
            30000,
            Some(RiskLevel::VeryHigh),
        );
        assert_eq!(route.label, "China → Hamburg (Rare Earths)");
        assert!(route.mentions(&["China", "Asia"]));
        assert!(!route.mentions(&["DRC"]));
    }

    #[test]
    fn risk_level_accepts_medium_alias() {
        assert_eq!(RiskLevel::parse("medium"), Some(RiskLevel::Moderate));
        assert_eq!(RiskLevel::parse("VERY_HIGH"), Some(RiskLevel::VeryHigh));
        assert_eq!(RiskLevel::parse("severe"), None);
    }

    #[test]
    fn location_type_parse() {
        assert_eq!(LocationType::parse("battery_plant"), Some(LocationType::BatteryPlant));
        assert_eq!(LocationType::parse("warehouse"), None);
        assert!(LocationType::WindFacility.is_manufacturing());
        assert!(!LocationType::Port.is_manufacturing());
    }

    #[test]
    fn disruption_ids_parse() {
        assert_eq!("china-ban".parse::<Disruption>().unwrap(), Disruption::ChinaBan);
        assert_eq!("none".parse::<Disruption>().unwrap(), Disruption::None);
        assert!("panama".parse::<Disruption>().is_err());
        for d in Disruption::ALL {
            assert_eq!(d.id().parse::<Disruption>().unwrap(), d);
        }
    }

    #[test]
    fn material_filter_matches_names() {
        assert!(MaterialFilter::All.matches("anything"));
        assert!(MaterialFilter::RareEarth.matches("Rare Earth Elements"));
        assert!(MaterialFilter::Lithium.matches("lithium carbonate"));
        assert!(!MaterialFilter::Cobalt.matches("Nickel"));
        assert_eq!("rare-earth".parse::<MaterialFilter>().unwrap(), MaterialFilter::RareEarth);
    }

    #[test]
    fn coordinate_bounds() {
        let mut loc = Location {
            name: "x".to_string(),
            lat: 91.0,
            lng: 0.0,
            kind: None,
            country: String::new(),
            region: String::new(),
            capacity: None,
            strategic_importance: 1,
            is_eu_facility: false,
        };
        assert!(!loc.has_valid_coordinates());
        loc.lat = -90.0;
        loc.lng = 180.0;
        assert!(loc.has_valid_coordinates());
    }
}
