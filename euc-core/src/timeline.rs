//! Timeline projector: days of supply remaining some months ahead.

use serde::Serialize;

pub const MAX_TIMELINE_MONTHS: u32 = 24;
/// Days of supply lost per projected month.
pub const DAYS_LOST_PER_MONTH: u32 = 2;
/// Below this many projected days a material is flagged critical.
pub const CRITICAL_DAYS: u32 = 15;
/// Days of supply that fill a dashboard bar.
pub const FULL_BAR_DAYS: u32 = 60;

/// Current supply position of one material.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialSupply {
    pub material: &'static str,
    pub base_days_supply: u32,
    /// EU demand, tons per year
    pub demand: u64,
    /// EU production, tons per year
    pub production: u64,
    /// Share of demand met by imports from concentrated suppliers
    pub dependency_risk_pct: u32,
}

impl MaterialSupply {
    pub fn projected_days(&self, months_ahead: u32) -> u32 {
        projected_supply(self.base_days_supply, months_ahead)
    }
}

/// `max(base_days - 2 * months_ahead, 0)`.
pub fn projected_supply(base_days: u32, months_ahead: u32) -> u32 {
    base_days.saturating_sub(months_ahead.saturating_mul(DAYS_LOST_PER_MONTH))
}

pub fn is_critical(projected_days: u32) -> bool {
    projected_days < CRITICAL_DAYS
}

/// Width of a supply bar in percent, capped at 100.
pub fn supply_fill_pct(projected_days: u32) -> f64 {
    (projected_days as f64 / FULL_BAR_DAYS as f64 * 100.0).min(100.0)
}

pub fn clamp_months(months: u32) -> u32 {
    months.min(MAX_TIMELINE_MONTHS)
}

/// Tracked battery and wind materials.
pub fn baseline_supply() -> Vec<MaterialSupply> {
    vec![
        MaterialSupply {
            material: "Lithium",
            base_days_supply: 45,
            demand: 100_000,
            production: 15_000,
            dependency_risk_pct: 79,
        },
        MaterialSupply {
            material: "Cobalt",
            base_days_supply: 32,
            demand: 50_000,
            production: 7_000,
            dependency_risk_pct: 86,
        },
        MaterialSupply {
            material: "Rare Earths",
            base_days_supply: 28,
            demand: 80_000,
            production: 1_600,
            dependency_risk_pct: 98,
        },
    ]
}
