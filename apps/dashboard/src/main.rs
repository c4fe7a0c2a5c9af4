use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use futures::future::join_all;
use shared::protocol::{DashboardCommand, DashboardEvent};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tokio_stream::{wrappers::BroadcastStream, StreamExt};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use traffic_core::{seed, TrafficDashboard};

mod config;

use config::load_settings;

#[derive(Parser, Debug)]
#[command(name = "traffic-dashboard", about = "Traffic control dashboard state core")]
struct Cli {
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the configured random seed for synthetic updates.
    #[arg(long)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the seeded entities and analytics.
    Seeds,
    /// Run the synthetic update timer and print each snapshot.
    Simulate {
        #[arg(long, default_value_t = 5)]
        ticks: usize,
    },
    /// Apply a JSON array of dashboard commands and print the resulting events.
    Replay { script: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }

    match cli.command {
        Command::Seeds => print_seeds(),
        Command::Simulate { ticks } => {
            let dashboard = TrafficDashboard::new(settings.to_dashboard_config());
            simulate(&dashboard, ticks).await
        }
        Command::Replay { script } => {
            let dashboard = TrafficDashboard::new(settings.to_dashboard_config());
            replay(&dashboard, &script).await
        }
    }
}

fn print_seeds() -> Result<()> {
    let seeds = serde_json::json!({
        "signals": seed::signals(),
        "hotspots": seed::hotspots(),
        "areas": seed::areas(),
        "analytics": seed::analytics(),
    });
    println!("{}", serde_json::to_string_pretty(&seeds)?);
    Ok(())
}

async fn simulate(dashboard: &Arc<TrafficDashboard>, ticks: usize) -> Result<()> {
    let mut stream = BroadcastStream::new(dashboard.subscribe_events());
    dashboard.start_synthetic_updates().await;
    info!(ticks, "waiting for synthetic snapshots");

    let mut seen = 0;
    while seen < ticks {
        let Some(item) = stream.next().await else {
            break;
        };
        match item {
            Ok(event @ DashboardEvent::SnapshotUpdated { .. }) => {
                print_event(&event)?;
                seen += 1;
            }
            Ok(_) => {}
            Err(err) => warn!(%err, "event stream lagged"),
        }
    }

    dashboard.shutdown().await;
    Ok(())
}

async fn replay(dashboard: &Arc<TrafficDashboard>, script: &Path) -> Result<()> {
    let raw = tokio::fs::read_to_string(script)
        .await
        .with_context(|| format!("failed to read script '{}'", script.display()))?;
    let commands: Vec<DashboardCommand> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse script '{}'", script.display()))?;

    let mut events = dashboard.subscribe_events();
    let mut pending = Vec::new();
    for command in commands {
        let name = command.name();
        match dashboard.apply_command(command).await {
            Ok(Some(change)) => pending.push(change),
            Ok(None) => {}
            // Rejections are already on the event stream.
            Err(err) => info!(command = name, %err, "command had no effect"),
        }
        flush_events(&mut events)?;
    }

    for outcome in join_all(pending.into_iter().map(|change| change.wait())).await {
        if let Err(err) = outcome {
            info!(%err, "status change did not land");
        }
    }
    dashboard.shutdown().await;
    flush_events(&mut events)?;

    let log = dashboard.control_log().await;
    info!(entries = log.len(), "replay finished");
    Ok(())
}

fn flush_events(events: &mut broadcast::Receiver<DashboardEvent>) -> Result<()> {
    loop {
        match events.try_recv() {
            Ok(event) => print_event(&event)?,
            Err(TryRecvError::Lagged(skipped)) => warn!(skipped, "event stream lagged"),
            Err(TryRecvError::Empty | TryRecvError::Closed) => return Ok(()),
        }
    }
}

fn print_event(event: &DashboardEvent) -> Result<()> {
    println!("{}", serde_json::to_string(event)?);
    Ok(())
}
