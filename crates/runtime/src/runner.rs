use core_sim::{simulate, RandomChoice, SimulationParameters, SimulationResult, UniformChoice};

use crate::logging::{RunLogEvent, RunLogEventKind, RunLogWriter};
use crate::summary::TradeSummary;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRun {
    pub run_id: u64,
    pub seed: Option<u64>,
    pub result: SimulationResult,
    pub summary: TradeSummary,
}

/// Runs with a `StdRng` seeded from `seed`, so the same seed and parameters
/// always replay the same log.
pub fn run_seeded(
    run_id: u64,
    params: &SimulationParameters,
    seed: u64,
    run_log_writer: &mut dyn RunLogWriter,
) -> SimulationRun {
    let mut sampler = RandomChoice::seeded(seed);
    let mut run = run_with_sampler(run_id, params, &mut sampler, run_log_writer);
    run.seed = Some(seed);
    run
}

pub fn run_with_sampler<S>(
    run_id: u64,
    params: &SimulationParameters,
    sampler: &mut S,
    run_log_writer: &mut dyn RunLogWriter,
) -> SimulationRun
where
    S: UniformChoice + ?Sized,
{
    run_log_writer.write(RunLogEvent::new(run_id, RunLogEventKind::RunStarted));

    let result = simulate(params, sampler);
    journal_result(run_id, &result, run_log_writer);

    let summary = TradeSummary::from_result(&result);
    SimulationRun {
        run_id,
        seed: None,
        result,
        summary,
    }
}

fn journal_result(run_id: u64, result: &SimulationResult, run_log_writer: &mut dyn RunLogWriter) {
    for snapshot in &result.snapshots {
        if snapshot.step.is_post_reset() {
            if let Some(outcome) = result.outcome {
                run_log_writer.write(
                    RunLogEvent::new(run_id, RunLogEventKind::TradeExecuted)
                        .at_step(snapshot.step)
                        .with_price(outcome.human_avg_price),
                );
            }
            run_log_writer.write(
                RunLogEvent::new(run_id, RunLogEventKind::QuotesReset).at_step(snapshot.step),
            );
        } else {
            run_log_writer.write(
                RunLogEvent::new(run_id, RunLogEventKind::StepRecorded)
                    .at_step(snapshot.step)
                    .with_price(snapshot.mid),
            );
        }
    }

    let mut completed = RunLogEvent::new(run_id, RunLogEventKind::RunCompleted);
    if let Some(pnl) = result.pnl() {
        completed = completed.with_price(pnl);
    }
    run_log_writer.write(completed);
}
