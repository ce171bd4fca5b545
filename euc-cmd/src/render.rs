//! Render one view of the globe and dashboard as JSON.

use crate::config::StoreArgs;
use euc_data::dashboard::DashboardFrame;
use euc_data::globe::GlobeFrame;
use euc_data::loader::{load_snapshot, sample_snapshot, Snapshot};
use euc_data::view::ViewState;
use log::info;
use serde::Serialize;

/// Everything the front end draws for one view.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOutput {
    pub view: ViewState,
    pub origin: euc_data::loader::DataOrigin,
    pub globe: GlobeFrame,
    pub dashboard: DashboardFrame,
}

impl RenderOutput {
    pub fn derive(snapshot: &Snapshot, view: &ViewState) -> Self {
        Self {
            view: *view,
            origin: snapshot.origin,
            globe: GlobeFrame::derive(snapshot, view),
            dashboard: DashboardFrame::derive(view),
        }
    }
}

/// Hosted data when configured and not offline, otherwise the sample set.
async fn snapshot(store: &StoreArgs, offline: bool) -> Snapshot {
    if offline {
        info!("Offline mode: using sample data");
        return sample_snapshot().await;
    }
    match store.rest_store(reqwest::Client::new()) {
        Ok(rest) => load_snapshot(&rest).await,
        Err(e) => {
            info!("{}; using sample data", e);
            sample_snapshot().await
        }
    }
}

pub async fn run_render(
    view: &ViewState,
    store: &StoreArgs,
    offline: bool,
    pretty: bool,
) -> anyhow::Result<()> {
    let snapshot = snapshot(store, offline).await;
    let output = RenderOutput::derive(&snapshot, view);
    info!(
        "Rendered {} points and {} arcs",
        output.globe.points.len(),
        output.globe.arcs.len()
    );
    let json = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);
    Ok(())
}
