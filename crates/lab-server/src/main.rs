mod config;
mod wiring;

use std::error::Error;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use api::state::AppState;
use config::RunMode;
use core_sim::SimulationParameters;
use runtime::{
    export::SnapshotCsvWriter,
    logging::TracingRunLogWriter,
    runner::{run_seeded, SimulationRun},
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = config::Config::from_env()?;
    let state = match config.seed {
        Some(seed) => AppState::with_fixed_seed(seed),
        None => AppState::new(),
    };
    tracing::info!(mode = config.mode.as_str(), seed = config.seed, "starting simulation lab");

    match config.mode {
        RunMode::Serve => {
            let listener = TcpListener::bind(config.listen_addr).await?;
            tracing::info!(addr = %config.listen_addr, "listening");
            axum::serve(listener, wiring::build_app(state)).await?;
        }
        RunMode::Batch => {
            let run = write_batch_export(
                &state,
                &SimulationParameters::default(),
                &config.export_output_path,
            )?;
            for line in run.summary.lines() {
                tracing::info!(run_id = run.run_id, "{line}");
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn write_batch_export(
    state: &AppState,
    params: &SimulationParameters,
    path: &str,
) -> Result<SimulationRun, Box<dyn Error>> {
    let export_path = Path::new(path);

    if let Some(parent) = export_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        fs::create_dir_all(parent)?;
    }

    let run_id = state.start_run()?;
    let seed = state.resolve_seed(None);
    let run = run_seeded(run_id, params, seed, &mut TracingRunLogWriter);

    let export_file = File::create(export_path)?;
    let mut csv_writer = SnapshotCsvWriter::new(BufWriter::new(export_file));
    csv_writer.write_log_and_record(run_id, &run.result.snapshots, &mut TracingRunLogWriter)?;
    tracing::info!(path, rows = run.result.snapshots.len(), "simulation log exported");

    Ok(run)
}
