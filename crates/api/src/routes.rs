use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use core_sim::{SimulationParameters, Snapshot, TradeOutcome};
use runtime::{
    export::{SnapshotCsvWriter, EXPORT_FILE_NAME, EXPORT_MIME_TYPE},
    logging::TracingRunLogWriter,
    runner::{run_seeded, SimulationRun},
    summary::TradeSummary,
};
use serde::Serialize;

use crate::{
    error::ApiError,
    request::{ParameterRanges, SimulationRequest},
    state::AppState,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/styles.css", get(styles))
        .route("/static/app.js", get(app_script))
        .route("/api/parameters", get(parameter_ranges))
        .route("/api/runs", post(start_run))
        .route("/api/runs/export", get(export_run))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct RunResponse {
    run_id: u64,
    seed: Option<u64>,
    parameters: SimulationParameters,
    fair_threshold: f64,
    exit_step: Option<u32>,
    snapshots: Vec<Snapshot>,
    outcome: Option<TradeOutcome>,
    summary: TradeSummary,
    summary_lines: Vec<String>,
}

impl RunResponse {
    fn new(parameters: SimulationParameters, run: SimulationRun) -> Self {
        let summary_lines = run.summary.lines();
        Self {
            run_id: run.run_id,
            seed: run.seed,
            parameters,
            fair_threshold: run.result.fair_threshold,
            exit_step: run.result.exit_step,
            snapshots: run.result.snapshots,
            outcome: run.result.outcome,
            summary: run.summary,
            summary_lines,
        }
    }
}

async fn index() -> Html<&'static str> {
    Html(ui::index_html())
}

async fn styles() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        ui::styles_css(),
    )
}

async fn app_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        ui::app_js(),
    )
}

async fn parameter_ranges() -> Json<ParameterRanges> {
    Json(ParameterRanges::sidebar())
}

fn execute(
    state: &AppState,
    request: &SimulationRequest,
) -> Result<(SimulationParameters, SimulationRun), ApiError> {
    let parameters = request.validate()?;
    let run_id = state.start_run()?;
    let seed = state.resolve_seed(request.seed);
    let run = run_seeded(run_id, &parameters, seed, &mut TracingRunLogWriter);
    Ok((parameters, run))
}

async fn start_run(
    State(state): State<AppState>,
    Json(request): Json<SimulationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (parameters, run) = execute(&state, &request)?;

    Ok((StatusCode::CREATED, Json(RunResponse::new(parameters, run))))
}

async fn export_run(
    State(state): State<AppState>,
    Query(request): Query<SimulationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (_, run) = execute(&state, &request)?;

    let mut writer = SnapshotCsvWriter::new(Vec::new());
    writer.write_log_and_record(run.run_id, &run.result.snapshots, &mut TracingRunLogWriter)?;
    let disposition = format!("attachment; filename=\"{EXPORT_FILE_NAME}\"");

    Ok((
        [
            (header::CONTENT_TYPE, EXPORT_MIME_TYPE.to_owned()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        writer.into_inner(),
    ))
}
