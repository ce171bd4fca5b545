//! Risk/bottleneck classification and color lookup for locations.

use crate::model::{Location, LocationType};
use serde::Serialize;

/// Countries whose supply concentration makes every site there a bottleneck.
pub const HIGH_RISK_COUNTRIES: [&str; 2] = ["China", "DRC"];

/// Allied producers shown in the "allied" color.
pub const ALLIED_COUNTRIES: [&str; 2] = ["Australia", "Canada"];

/// Importance at or above which an EU facility counts as critical.
///
/// Importance is rated 1-5, so this never fires on conforming data. It is
/// kept at 9 until the intended scale is confirmed.
pub const CRITICAL_IMPORTANCE: u8 = 9;

pub mod colors {
    pub const PORT_BOTTLENECK: &str = "#ef4444";
    pub const HIGH_RISK_BOTTLENECK: &str = "#dc2626";
    pub const CRITICAL_FACILITY: &str = "#f97316";
    pub const EU_MANUFACTURING: &str = "#22c55e";
    pub const EU_PORT: &str = "#60a5fa";
    pub const EU_SOURCE: &str = "#10b981";
    pub const ALLIED_SOURCE: &str = "#f59e0b";
    pub const HIGH_RISK_SOURCE: &str = "#ef4444";
    pub const OTHER_SOURCE: &str = "#fb923c";
    pub const UNKNOWN: &str = "#94a3b8";
}

/// Why a location is a bottleneck. A location may satisfy several rules;
/// [`classify`] reports the first in rule order.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bottleneck {
    EuPort,
    HighRiskCountry,
    CriticalEuFacility,
}

fn is_high_risk_country(country: &str) -> bool {
    HIGH_RISK_COUNTRIES.contains(&country)
}

/// Returns the first matching bottleneck rule, if any.
pub fn classify(location: &Location) -> Option<Bottleneck> {
    if location.is_port() && location.is_eu_facility {
        Some(Bottleneck::EuPort)
    } else if is_high_risk_country(&location.country) {
        Some(Bottleneck::HighRiskCountry)
    } else if location.is_eu_facility && location.strategic_importance >= CRITICAL_IMPORTANCE {
        Some(Bottleneck::CriticalEuFacility)
    } else {
        None
    }
}

pub fn is_bottleneck(location: &Location) -> bool {
    classify(location).is_some()
}

/// Globe color for a location; bottlenecks override the type palette.
pub fn color_for(location: &Location) -> &'static str {
    if let Some(rule) = classify(location) {
        // a high-risk-country port is still colored as a port
        if location.is_port() {
            return colors::PORT_BOTTLENECK;
        }
        return match rule {
            Bottleneck::EuPort => colors::PORT_BOTTLENECK,
            Bottleneck::HighRiskCountry => colors::HIGH_RISK_BOTTLENECK,
            Bottleneck::CriticalEuFacility => colors::CRITICAL_FACILITY,
        };
    }

    match location.kind {
        Some(kind) if kind.is_manufacturing() => colors::EU_MANUFACTURING,
        Some(LocationType::Port) => colors::EU_PORT,
        Some(LocationType::Source) => {
            if location.is_eu_facility || location.region == "EU" {
                colors::EU_SOURCE
            } else if ALLIED_COUNTRIES.contains(&location.country.as_str()) {
                colors::ALLIED_SOURCE
            } else if location.country == "China" {
                colors::HIGH_RISK_SOURCE
            } else {
                colors::OTHER_SOURCE
            }
        }
        _ => colors::UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(kind: LocationType, country: &str, region: &str, eu: bool) -> Location {
        Location {
            name: "test".to_string(),
            lat: 0.0,
            lng: 0.0,
            kind: Some(kind),
            country: country.to_string(),
            region: region.to_string(),
            capacity: None,
            strategic_importance: 3,
            is_eu_facility: eu,
        }
    }

    #[test]
    fn every_eu_port_is_a_bottleneck() {
        for country in ["Netherlands", "Germany", "Belgium", "China"] {
            let port = location(LocationType::Port, country, "EU", true);
            assert!(is_bottleneck(&port), "{} port", country);
            assert_eq!(classify(&port), Some(Bottleneck::EuPort));
        }
    }

    #[test]
    fn non_eu_port_is_not_a_bottleneck() {
        let port = location(LocationType::Port, "Singapore", "Asia", false);
        assert!(!is_bottleneck(&port));
        assert_eq!(color_for(&port), colors::EU_PORT);
    }

    #[test]
    fn china_and_drc_are_always_bottlenecks() {
        let kinds = [
            LocationType::Source,
            LocationType::Port,
            LocationType::BatteryPlant,
            LocationType::ProcessingPlant,
        ];
        for country in HIGH_RISK_COUNTRIES {
            for kind in kinds {
                for eu in [true, false] {
                    let loc = location(kind, country, "Asia", eu);
                    assert!(is_bottleneck(&loc), "{} {:?} eu={}", country, kind, eu);
                }
            }
        }
    }

    #[test]
    fn importance_rule_needs_nine() {
        let mut plant = location(LocationType::BatteryPlant, "Germany", "EU", true);
        plant.strategic_importance = 5;
        assert!(!is_bottleneck(&plant));
        plant.strategic_importance = 9;
        assert_eq!(classify(&plant), Some(Bottleneck::CriticalEuFacility));
        assert_eq!(color_for(&plant), colors::CRITICAL_FACILITY);

        plant.is_eu_facility = false;
        assert!(!is_bottleneck(&plant));
    }

    #[test]
    fn bottleneck_colors() {
        let port = location(LocationType::Port, "Netherlands", "EU", true);
        assert_eq!(color_for(&port), colors::PORT_BOTTLENECK);
        let mine = location(LocationType::Source, "DRC", "Africa", false);
        assert_eq!(color_for(&mine), colors::HIGH_RISK_BOTTLENECK);
    }

    #[test]
    fn standard_palette() {
        let plant = location(LocationType::WindFacility, "Denmark", "EU", true);
        assert_eq!(color_for(&plant), colors::EU_MANUFACTURING);
        let domestic = location(LocationType::Source, "Finland", "EU", false);
        assert_eq!(color_for(&domestic), colors::EU_SOURCE);
        let allied = location(LocationType::Source, "Australia", "Oceania", false);
        assert_eq!(color_for(&allied), colors::ALLIED_SOURCE);
        let other = location(LocationType::Source, "Chile", "South America", false);
        assert_eq!(color_for(&other), colors::OTHER_SOURCE);

        let mut unknown = location(LocationType::Source, "Chile", "South America", false);
        unknown.kind = None;
        assert_eq!(color_for(&unknown), colors::UNKNOWN);
    }
}
