//! Impact metrics table as JSON.

use euc_core::impact::{impact_metrics, ImpactMetrics};
use euc_core::model::Disruption;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactRow {
    pub disruption: Disruption,
    pub title: &'static str,
    pub description: &'static str,
    pub transit_time: String,
    pub cost_increase: String,
    #[serde(flatten)]
    pub metrics: ImpactMetrics,
}

/// Rows for one scenario, or for every scenario when `disruption` is absent.
pub fn impact_rows(disruption: Option<Disruption>) -> Vec<ImpactRow> {
    let selected: Vec<Disruption> = match disruption {
        Some(d) => vec![d],
        None => Disruption::ALL.to_vec(),
    };
    selected
        .into_iter()
        .filter_map(|d| {
            impact_metrics(d).map(|metrics| ImpactRow {
                disruption: d,
                title: d.title(),
                description: d.description(),
                transit_time: metrics.transit_time_label(),
                cost_increase: metrics.cost_increase_label(),
                metrics,
            })
        })
        .collect()
}

pub fn run_impact(disruption: Option<Disruption>) -> anyhow::Result<()> {
    let rows = impact_rows(disruption);
    log::info!("impact: {} scenario rows", rows.len());
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_scenarios_skip_baseline() {
        let rows = impact_rows(None);
        let ids: Vec<&str> = rows.iter().map(|r| r.disruption.id()).collect();
        assert_eq!(ids, vec!["suez", "rotterdam", "china-ban"]);
    }

    #[test]
    fn single_scenario() {
        let rows = impact_rows(Some(Disruption::Suez));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].transit_time, "+21 days");
        assert_eq!(rows[0].cost_increase, "+35%");
        assert!(impact_rows(Some(Disruption::None)).is_empty());

        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json[0]["disruption"], "suez");
        assert_eq!(json[0]["affectedShips"], 12);
        assert_eq!(json[0]["description"], "Reroute via Africa (+21 days)");
    }
}
