//! Visual scale functions: bounded sizes, thicknesses, speeds and colors.
//!
//! All functions are total over their inputs; logarithms of small or zero
//! magnitudes are floored by the clamps rather than propagated.

use crate::classifier::{self, HIGH_RISK_COUNTRIES};
use crate::model::{Location, RiskLevel, Route, RouteStatus};

pub const MIN_POINT_SIZE: f64 = 0.3;
pub const MAX_POINT_SIZE: f64 = 1.2;
const POINT_BASE: f64 = 0.3;
const IMPORTANCE_STEP: f64 = 0.1;
const CAPACITY_LOG_FACTOR: f64 = 0.1;
const MAX_CAPACITY_TERM: f64 = 0.6;
const NO_CAPACITY_TERM: f64 = 0.2;
const BOTTLENECK_EMPHASIS: f64 = 1.2;

pub const MIN_ARC_THICKNESS: f64 = 0.5;
pub const MAX_ARC_THICKNESS: f64 = 2.5;
const ARC_BASE: f64 = 0.8;
const VOLUME_LOG_FACTOR: f64 = 0.3;
const MIN_VOLUME_MULT: f64 = 1.0;
const MAX_VOLUME_MULT: f64 = 2.0;
const MAJOR_ROUTE_EMPHASIS: f64 = 1.1;

pub const BASE_ANIMATION_MS: u32 = 1500;

pub mod colors {
    pub const LOW: &str = "#22c55e";
    pub const MODERATE: &str = "#f59e0b";
    pub const HIGH: &str = "#fb923c";
    pub const VERY_HIGH: &str = "#ef4444";
    /// Rerouted or redirected by an active disruption
    pub const ALERT: &str = "#ef4444";
    pub const BLOCKED: &str = "#7f1d1d";
    pub const UNKNOWN: &str = "#94a3b8";
}

/// Logarithmic capacity contribution, `ln(capacity / 1000) * 0.1` in `[0, 0.6]`.
///
/// Zero capacity is treated like an unknown one.
fn capacity_term(capacity: Option<u64>) -> f64 {
    match capacity {
        Some(c) if c > 0 => {
            ((c as f64 / 1000.0).ln() * CAPACITY_LOG_FACTOR).clamp(0.0, MAX_CAPACITY_TERM)
        }
        _ => NO_CAPACITY_TERM,
    }
}

/// Point radius in `[0.3, 1.2]`.
pub fn size_for(location: &Location) -> f64 {
    let factor = if classifier::is_bottleneck(location) {
        BOTTLENECK_EMPHASIS
    } else {
        1.0
    };
    let raw = (POINT_BASE
        + IMPORTANCE_STEP * location.strategic_importance as f64
        + capacity_term(location.capacity))
        * factor;
    raw.clamp(MIN_POINT_SIZE, MAX_POINT_SIZE)
}

fn volume_multiplier(volume: u64) -> f64 {
    if volume == 0 {
        return MIN_VOLUME_MULT;
    }
    ((volume as f64 / 1000.0).ln() * VOLUME_LOG_FACTOR).clamp(MIN_VOLUME_MULT, MAX_VOLUME_MULT)
}

fn criticality_multiplier(risk: Option<RiskLevel>) -> f64 {
    match risk {
        Some(RiskLevel::VeryHigh) => 1.3,
        Some(RiskLevel::High) => 1.2,
        _ => 1.0,
    }
}

/// Arc stroke in `[0.5, 2.5]`.
pub fn thickness_for(route: &Route) -> f64 {
    let major = if route.mentions(&HIGH_RISK_COUNTRIES) {
        MAJOR_ROUTE_EMPHASIS
    } else {
        1.0
    };
    let raw = ARC_BASE
        * volume_multiplier(route.volume)
        * criticality_multiplier(route.risk_level)
        * major;
    raw.clamp(MIN_ARC_THICKNESS, MAX_ARC_THICKNESS)
}

/// Dash animation period; riskier routes pulse faster.
pub fn animation_speed_for(route: &Route) -> u32 {
    match route.risk_level {
        Some(RiskLevel::VeryHigh) => BASE_ANIMATION_MS - 400,
        Some(RiskLevel::High) => BASE_ANIMATION_MS - 200,
        _ => BASE_ANIMATION_MS,
    }
}

pub fn risk_color(risk: Option<RiskLevel>) -> &'static str {
    match risk {
        Some(RiskLevel::Low) => colors::LOW,
        Some(RiskLevel::Moderate) => colors::MODERATE,
        Some(RiskLevel::High) => colors::HIGH,
        Some(RiskLevel::VeryHigh) => colors::VERY_HIGH,
        Some(RiskLevel::Blocked) | None => colors::UNKNOWN,
    }
}

/// Arc color: disruption status first, then the risk palette.
pub fn route_color(route: &Route) -> &'static str {
    match route.status {
        RouteStatus::Rerouted | RouteStatus::Redirected => colors::ALERT,
        RouteStatus::Blocked => colors::BLOCKED,
        RouteStatus::Normal => risk_color(route.risk_level),
    }
}
