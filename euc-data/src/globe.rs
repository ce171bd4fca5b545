//! Points and arcs handed to the WebGL globe.

use crate::loader::Snapshot;
use crate::view::ViewState;
use euc_core::classifier::{self, Bottleneck};
use euc_core::disruption::project;
use euc_core::model::{Location, LocationType, RiskLevel, Route, RouteStatus};
use euc_core::scale;
use serde::Serialize;

/// Points sit just above the surface, all at the same height.
pub const POINT_ALTITUDE: f64 = 0.01;
pub const POINT_RESOLUTION: u32 = 8;
pub const ARC_DASH_LENGTH: f64 = 0.4;
pub const ARC_DASH_GAP: f64 = 0.2;
pub const AUTO_ROTATE_SPEED: f64 = 0.5;

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobePoint {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub size: f64,
    pub color: &'static str,
    pub kind: Option<LocationType>,
    pub country: String,
    pub region: String,
    pub capacity: Option<u64>,
    pub importance: u8,
    pub is_bottleneck: bool,
    pub bottleneck: Option<Bottleneck>,
}

impl GlobePoint {
    pub fn from_location(location: &Location) -> Self {
        let bottleneck = classifier::classify(location);
        Self {
            name: location.name.clone(),
            lat: location.lat,
            lng: location.lng,
            size: scale::size_for(location),
            color: classifier::color_for(location),
            kind: location.kind,
            country: location.country.clone(),
            region: location.region.clone(),
            capacity: location.capacity,
            importance: location.strategic_importance,
            is_bottleneck: bottleneck.is_some(),
            bottleneck,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobeArc {
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
    pub name: String,
    pub material: String,
    pub color: &'static str,
    pub volume: u64,
    pub risk_level: Option<RiskLevel>,
    pub status: RouteStatus,
    pub thickness: f64,
    pub animation_speed_ms: u32,
}

impl GlobeArc {
    pub fn from_route(route: &Route) -> Self {
        Self {
            start_lat: route.origin.lat,
            start_lng: route.origin.lng,
            end_lat: route.destination.lat,
            end_lng: route.destination.lng,
            name: route.label.clone(),
            material: route.material.name.clone(),
            color: scale::route_color(route),
            volume: route.volume,
            risk_level: route.risk_level,
            status: route.status,
            thickness: scale::thickness_for(route),
            animation_speed_ms: scale::animation_speed_for(route),
        }
    }
}

/// Everything the globe needs for one render pass.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobeFrame {
    pub points: Vec<GlobePoint>,
    pub arcs: Vec<GlobeArc>,
    pub point_altitude: f64,
    pub point_resolution: u32,
    pub arc_dash_length: f64,
    pub arc_dash_gap: f64,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f64,
}

impl GlobeFrame {
    pub fn derive(snapshot: &Snapshot, view: &ViewState) -> Self {
        let points = snapshot
            .locations
            .iter()
            .map(GlobePoint::from_location)
            .filter(|p| !view.bottleneck_mode || p.is_bottleneck)
            .collect();

        let arcs = project(view.disruption, &snapshot.routes)
            .iter()
            .filter(|r| view.material.matches(&r.material.name))
            .map(GlobeArc::from_route)
            .collect();

        Self {
            points,
            arcs,
            point_altitude: POINT_ALTITUDE,
            point_resolution: POINT_RESOLUTION,
            arc_dash_length: ARC_DASH_LENGTH,
            arc_dash_gap: ARC_DASH_GAP,
            auto_rotate: view.auto_rotate,
            auto_rotate_speed: AUTO_ROTATE_SPEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::sample_snapshot;
    use euc_core::model::{Disruption, MaterialFilter};

    #[tokio::test]
    async fn baseline_frame_shows_everything() {
        let snapshot = sample_snapshot().await;
        let frame = GlobeFrame::derive(&snapshot, &ViewState::new());
        assert_eq!(frame.points.len(), snapshot.locations.len());
        assert_eq!(frame.arcs.len(), snapshot.routes.len());
        assert!(frame.auto_rotate);
        for p in &frame.points {
            assert!((0.3..=1.2).contains(&p.size));
        }
        for a in &frame.arcs {
            assert!((0.5..=2.5).contains(&a.thickness));
        }
    }

    #[tokio::test]
    async fn bottleneck_mode_keeps_only_bottlenecks() {
        let snapshot = sample_snapshot().await;
        let view = ViewState::new().with_bottleneck_mode(true);
        let frame = GlobeFrame::derive(&snapshot, &view);
        let mut names: Vec<&str> = frame.points.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                "Bayan Obo China",
                "Glencore Katanga Mining",
                "Port of Hamburg",
                "Port of Rotterdam",
            ]
        );
        assert!(frame.points.iter().all(|p| p.is_bottleneck));
    }

    #[tokio::test]
    async fn material_filter_applies_after_projection() {
        let snapshot = sample_snapshot().await;
        let view = ViewState::new()
            .with_disruption(Disruption::ChinaBan)
            .with_material(MaterialFilter::RareEarth);
        let frame = GlobeFrame::derive(&snapshot, &view);
        assert_eq!(frame.arcs.len(), 1);
        let arc = &frame.arcs[0];
        assert_eq!(arc.risk_level, Some(RiskLevel::Blocked));
        assert_eq!(arc.color, scale::colors::BLOCKED);
    }

    #[tokio::test]
    async fn rotterdam_closure_moves_arc_ends() {
        let snapshot = sample_snapshot().await;
        let view = ViewState::new().with_disruption(Disruption::Rotterdam);
        let frame = GlobeFrame::derive(&snapshot, &view);
        let redirected: Vec<&GlobeArc> = frame
            .arcs
            .iter()
            .filter(|a| a.status == RouteStatus::Redirected)
            .collect();
        assert_eq!(redirected.len(), 2);
        for arc in redirected {
            assert_eq!((arc.end_lat, arc.end_lng), euc_core::disruption::HAMBURG);
            assert_eq!(arc.color, scale::colors::ALERT);
        }
    }

    #[test]
    fn frame_serializes_camel_case() {
        let snapshot = Snapshot {
            locations: Vec::new(),
            routes: Vec::new(),
            origin: crate::loader::DataOrigin::Sample,
            loaded_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(GlobeFrame::derive(&snapshot, &ViewState::new())).unwrap();
        assert_eq!(json["autoRotateSpeed"], 0.5);
        assert_eq!(json["pointAltitude"], 0.01);
        assert!(json["arcs"].as_array().unwrap().is_empty());
    }
}
