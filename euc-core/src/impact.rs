//! Static impact estimates per disruption scenario.
//!
//! These are configured figures, not derived from the loaded routes.

use crate::model::Disruption;
use serde::Serialize;

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactMetrics {
    /// Added transit days; `None` when shipping stops outright
    pub transit_delta_days: Option<u32>,
    pub affected_ships: u32,
    pub cost_increase_pct: u32,
    pub affected_volume_tons: u64,
    pub eu_capacity_reduction_pct: u32,
    pub affected_facilities: Vec<&'static str>,
    pub economic_impact: &'static str,
    pub resolution_time: &'static str,
    pub alternative_route: &'static str,
    pub strategic_reserve_days: u32,
}

impl ImpactMetrics {
    /// Dashboard text for the transit delta.
    pub fn transit_time_label(&self) -> String {
        match self.transit_delta_days {
            Some(days) => format!("+{} days", days),
            None => "N/A".to_string(),
        }
    }

    pub fn cost_increase_label(&self) -> String {
        format!("+{}%", self.cost_increase_pct)
    }
}

/// Impact table row for `disruption`; `None` for the baseline.
pub fn impact_metrics(disruption: Disruption) -> Option<ImpactMetrics> {
    match disruption {
        Disruption::None => None,
        Disruption::Suez => Some(ImpactMetrics {
            transit_delta_days: Some(21),
            affected_ships: 12,
            cost_increase_pct: 35,
            affected_volume_tons: 30_000,
            eu_capacity_reduction_pct: 25,
            affected_facilities: vec!["Ørsted Wind Farm Production", "Tesla Gigafactory Berlin"],
            economic_impact: "€2.1B",
            resolution_time: "2-4 weeks",
            alternative_route: "Cape of Good Hope",
            strategic_reserve_days: 45,
        }),
        Disruption::Rotterdam => Some(ImpactMetrics {
            transit_delta_days: Some(7),
            affected_ships: 8,
            cost_increase_pct: 15,
            affected_volume_tons: 70_000,
            eu_capacity_reduction_pct: 15,
            affected_facilities: vec!["Tesla Gigafactory Berlin", "Northvolt Ett"],
            economic_impact: "€850M",
            resolution_time: "1-2 weeks",
            alternative_route: "Port of Hamburg",
            strategic_reserve_days: 32,
        }),
        Disruption::ChinaBan => Some(ImpactMetrics {
            transit_delta_days: None,
            affected_ships: 15,
            cost_increase_pct: 120,
            affected_volume_tons: 30_000,
            eu_capacity_reduction_pct: 60,
            affected_facilities: vec!["Ørsted Wind Farm Production", "Tesla Gigafactory Berlin"],
            economic_impact: "€12.5B",
            resolution_time: "6-18 months",
            alternative_route: "Australian and Canadian rare earth sources",
            strategic_reserve_days: 28,
        }),
    }
}
