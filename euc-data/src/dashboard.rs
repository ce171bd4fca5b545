//! Side-panel figures: supply runway, port congestion and scenario impact.

use crate::view::ViewState;
use euc_core::impact::{impact_metrics, ImpactMetrics};
use euc_core::timeline::{baseline_supply, is_critical, supply_fill_pct, MaterialSupply};
use serde::Serialize;

/// Shipments currently tracked in transit.
pub const ACTIVE_SHIPMENTS: u32 = 24;

/// Monitored EU ports and their congestion, in percent.
pub const PORT_CONGESTION: [(&str, u32); 3] = [
    ("Rotterdam", 75),
    ("Hamburg", 45),
    ("Antwerp", 60),
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CongestionLevel {
    Normal,
    Elevated,
    Critical,
}

impl CongestionLevel {
    pub fn from_pct(pct: u32) -> Self {
        if pct > 70 {
            CongestionLevel::Critical
        } else if pct > 50 {
            CongestionLevel::Elevated
        } else {
            CongestionLevel::Normal
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyRow {
    pub material: &'static str,
    pub base_days: u32,
    pub projected_days: u32,
    pub fill_pct: f64,
    pub is_critical: bool,
    pub dependency_risk_pct: u32,
}

impl SupplyRow {
    fn project(supply: &MaterialSupply, months_ahead: u32) -> Self {
        let projected_days = supply.projected_days(months_ahead);
        Self {
            material: supply.material,
            base_days: supply.base_days_supply,
            projected_days,
            fill_pct: supply_fill_pct(projected_days),
            is_critical: is_critical(projected_days),
            dependency_risk_pct: supply.dependency_risk_pct,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortRow {
    pub port: &'static str,
    pub congestion_pct: u32,
    pub level: CongestionLevel,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactPanel {
    pub transit_time: String,
    pub cost_increase: String,
    #[serde(flatten)]
    pub metrics: ImpactMetrics,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFrame {
    pub active_shipments: u32,
    pub timeline_months: u32,
    pub supplies: Vec<SupplyRow>,
    pub ports: Vec<PortRow>,
    pub impact: Option<ImpactPanel>,
}

impl DashboardFrame {
    pub fn derive(view: &ViewState) -> Self {
        let supplies = baseline_supply()
            .iter()
            .map(|s| SupplyRow::project(s, view.timeline_months))
            .collect();
        let ports = PORT_CONGESTION
            .iter()
            .map(|&(port, congestion_pct)| PortRow {
                port,
                congestion_pct,
                level: CongestionLevel::from_pct(congestion_pct),
            })
            .collect();
        let impact = impact_metrics(view.disruption).map(|metrics| ImpactPanel {
            transit_time: metrics.transit_time_label(),
            cost_increase: metrics.cost_increase_label(),
            metrics,
        });
        Self {
            active_shipments: ACTIVE_SHIPMENTS,
            timeline_months: view.timeline_months,
            supplies,
            ports,
            impact,
        }
    }

    pub fn critical_materials(&self) -> impl Iterator<Item = &SupplyRow> {
        self.supplies.iter().filter(|s| s.is_critical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use euc_core::model::Disruption;

    #[test]
    fn baseline_has_no_impact_panel() {
        let frame = DashboardFrame::derive(&ViewState::new());
        assert_eq!(frame.active_shipments, 24);
        assert!(frame.impact.is_none());
        assert_eq!(frame.critical_materials().count(), 0);
    }

    #[test]
    fn twelve_months_ahead() {
        let frame = DashboardFrame::derive(&ViewState::new().with_timeline(12));
        let days: Vec<(&str, u32, bool)> = frame
            .supplies
            .iter()
            .map(|s| (s.material, s.projected_days, s.is_critical))
            .collect();
        assert_eq!(
            days,
            vec![
                ("Lithium", 21, false),
                ("Cobalt", 8, true),
                ("Rare Earths", 4, true),
            ]
        );
        assert!((frame.supplies[0].fill_pct - 35.0).abs() < 1e-9);
    }

    #[test]
    fn horizon_end_floors_at_zero() {
        let frame = DashboardFrame::derive(&ViewState::new().with_timeline(24));
        assert!(frame.supplies.iter().all(|s| s.projected_days == 0 && s.is_critical));
        assert_eq!(frame.supplies[1].fill_pct, 0.0);
    }

    #[test]
    fn congestion_levels() {
        let frame = DashboardFrame::derive(&ViewState::new());
        let levels: Vec<CongestionLevel> = frame.ports.iter().map(|p| p.level).collect();
        assert_eq!(
            levels,
            vec![
                CongestionLevel::Critical,
                CongestionLevel::Normal,
                CongestionLevel::Elevated,
            ]
        );
        assert_eq!(CongestionLevel::from_pct(70), CongestionLevel::Elevated);
        assert_eq!(CongestionLevel::from_pct(50), CongestionLevel::Normal);
    }

    #[test]
    fn china_ban_impact_labels() {
        let view = ViewState::new().with_disruption(Disruption::ChinaBan);
        let panel = DashboardFrame::derive(&view).impact.unwrap();
        assert_eq!(panel.transit_time, "N/A");
        assert_eq!(panel.cost_increase, "+120%");

        let json = serde_json::to_value(&panel).unwrap();
        assert_eq!(json["costIncreasePct"], 120);
        assert_eq!(json["transitTime"], "N/A");
    }
}
