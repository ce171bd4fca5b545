//! Command implementations for EUC CLI.
//!
//! Provides subcommands for serving the globe bundle, rendering view frames
//! from live or sample data, and inspecting disruption scenarios.

use clap::Subcommand;
use euc_core::model::{Disruption, MaterialFilter};
use std::path::PathBuf;

pub mod config;
pub mod explain;
pub mod impact;
pub mod render;
pub mod serve;

use config::{ExplainArgs, StoreArgs};

#[derive(Subcommand)]
pub enum Command {
    /// Serve the pre-built globe bundle as a single-page app
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = 8000)]
        port: u16,

        /// Directory holding index.html and static assets
        #[arg(short, long, env = "EUC_DIST_DIR", default_value = "dist")]
        dist: PathBuf,
    },

    /// Print the globe and dashboard frames for one view as JSON
    Render {
        /// Disruption scenario: none, suez, rotterdam or china-ban
        #[arg(short, long, default_value = "none")]
        disruption: Disruption,

        /// Material filter: all, lithium, cobalt, rare-earth, nickel or polysilicon
        #[arg(short, long, default_value = "all")]
        material: MaterialFilter,

        /// Months ahead on the supply timeline (clamped to 24)
        #[arg(short, long, default_value_t = 0)]
        timeline: u32,

        /// Only show bottleneck locations
        #[arg(long)]
        bottlenecks: bool,

        /// Disable globe auto-rotation
        #[arg(long)]
        no_rotate: bool,

        /// Skip the hosted store and use the embedded sample data
        #[arg(long)]
        offline: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        #[command(flatten)]
        store: StoreArgs,
    },

    /// Explain a disruption scenario in plain language
    Explain {
        /// Disruption scenario: suez, rotterdam or china-ban
        #[arg(short, long)]
        disruption: Disruption,

        #[command(flatten)]
        api: ExplainArgs,
    },

    /// Print impact metrics for one or all disruption scenarios
    Impact {
        /// Disruption scenario; omit for every scenario
        #[arg(short, long)]
        disruption: Option<Disruption>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve { port, dist } => serve::run_serve(port, &dist).await,
        Command::Render {
            disruption,
            material,
            timeline,
            bottlenecks,
            no_rotate,
            offline,
            pretty,
            store,
        } => {
            let view = euc_data::view::ViewState::new()
                .with_disruption(disruption)
                .with_material(material)
                .with_timeline(timeline)
                .with_bottleneck_mode(bottlenecks)
                .with_auto_rotate(!no_rotate);
            render::run_render(&view, &store, offline, pretty).await
        }
        Command::Explain { disruption, api } => explain::run_explain(disruption, &api).await,
        Command::Impact { disruption } => impact::run_impact(disruption),
    }
}
