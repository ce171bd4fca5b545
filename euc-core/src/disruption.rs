//! Disruption projector: derive the displayed route set for a scenario.
//!
//! Projection always starts from the base routes handed in; nothing is
//! cached between calls, so switching scenarios never stacks transforms.

use crate::model::{Disruption, Endpoint, RiskLevel, Route, RouteStatus};

/// Hamburg port, the fallback destination when Rotterdam is closed.
pub const HAMBURG: (f64, f64) = (53.5511, 9.9937);

const SUEZ_EXPOSED: [&str; 2] = ["China", "Asia"];
const CHINA: &str = "China";
const ROTTERDAM: &str = "Rotterdam";
const HAMBURG_NAME: &str = "Hamburg";

const SUEZ_SUFFIX: &str = " (Around Africa - Suez Blocked)";
const ROTTERDAM_SUFFIX: &str = " (Redirected - Port Closed)";
const CHINA_BAN_SUFFIX: &str = " (BLOCKED - China Export Ban)";

/// Routes shown on the globe while `disruption` is active.
pub fn project(disruption: Disruption, base_routes: &[Route]) -> Vec<Route> {
    match disruption {
        Disruption::None => base_routes.to_vec(),
        Disruption::Suez => project_suez(base_routes),
        Disruption::Rotterdam => project_rotterdam(base_routes),
        Disruption::ChinaBan => project_china_ban(base_routes),
    }
}

/// Originals stay; each Asian route gets a flagged duplicate around Africa.
fn project_suez(base_routes: &[Route]) -> Vec<Route> {
    let detours = base_routes
        .iter()
        .filter(|r| r.mentions(&SUEZ_EXPOSED))
        .map(|r| Route {
            label: format!("{}{}", r.label, SUEZ_SUFFIX),
            risk_level: Some(RiskLevel::VeryHigh),
            status: RouteStatus::Rerouted,
            ..r.clone()
        });
    base_routes.iter().cloned().chain(detours).collect()
}

/// Any route naming Rotterdam is sent to Hamburg instead.
fn project_rotterdam(base_routes: &[Route]) -> Vec<Route> {
    base_routes
        .iter()
        .map(|r| {
            if !r.mentions(&[ROTTERDAM]) {
                return r.clone();
            }
            let (lat, lng) = HAMBURG;
            Route {
                label: format!("{}{}", r.label.replace(ROTTERDAM, HAMBURG_NAME), ROTTERDAM_SUFFIX),
                destination: Endpoint {
                    name: r.destination.name.replace(ROTTERDAM, HAMBURG_NAME),
                    lat,
                    lng,
                    country: Some("Germany".to_string()),
                },
                risk_level: Some(RiskLevel::High),
                status: RouteStatus::Redirected,
                ..r.clone()
            }
        })
        .collect()
}

/// Chinese routes move to the end of the list, marked blocked.
fn project_china_ban(base_routes: &[Route]) -> Vec<Route> {
    let (banned, open): (Vec<&Route>, Vec<&Route>) =
        base_routes.iter().partition(|r| r.mentions(&[CHINA]));
    open.into_iter()
        .cloned()
        .chain(banned.into_iter().map(|r| Route {
            label: format!("{}{}", r.label, CHINA_BAN_SUFFIX),
            risk_level: Some(RiskLevel::Blocked),
            status: RouteStatus::Blocked,
            ..r.clone()
        }))
        .collect()
}
