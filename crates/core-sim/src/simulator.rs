use serde::Serialize;

use crate::outcome::TradeOutcome;
use crate::params::SimulationParameters;
use crate::sampler::UniformChoice;
use crate::snapshot::{Snapshot, StepIndex};
use crate::state::QuoteState;

/// Bid lift drawn on every momentum step.
pub const BID_MOMENTUM_CHOICES: [f64; 3] = [0.5, 1.0, 2.0];
/// Minimum ask gap above the bid after a momentum move.
pub const ASK_GAP_CHOICES: [f64; 3] = [2.0, 3.0, 5.0];
/// Ask gap the algo keeps after outbidding the human.
pub const REACTION_ASK_GAP: f64 = 2.0;

pub const HUMAN_ORDER_STEP: u32 = 1;
pub const MOMENTUM_START_STEP: u32 = 2;

pub const MOMENTUM_EVENT: &str = "Momentum buyers push price up.";

/// Upper bound on the snapshot slots reserved before the loop starts.
const RESERVED_SNAPSHOTS: u32 = 128;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub fair_price: f64,
    pub fair_threshold: f64,
    pub snapshots: Vec<Snapshot>,
    pub outcome: Option<TradeOutcome>,
    /// Step whose closing mid crossed the fair threshold.
    pub exit_step: Option<u32>,
}

impl SimulationResult {
    pub fn pnl(&self) -> Option<f64> {
        self.outcome.map(|outcome| outcome.pnl(self.fair_price))
    }
}

/// Runs the quote manipulation loop to exhaustion or until the mid crosses
/// the fair threshold, whichever comes first.
///
/// Each regular snapshot carries the quotes as they stood when the step
/// opened, together with everything that happened during the step.
pub fn simulate<S>(params: &SimulationParameters, sampler: &mut S) -> SimulationResult
where
    S: UniformChoice + ?Sized,
{
    let fair_threshold = params.fair_threshold();
    let reset_target = QuoteState::new(params.initial_bid, params.initial_ask);
    let mut quotes = reset_target;
    let mut snapshots = Vec::with_capacity(params.max_steps.min(RESERVED_SNAPSHOTS) as usize + 1);
    let mut outcome = None;
    let mut exit_step = None;

    for t in 0..params.max_steps {
        let opening = quotes;
        let mut events = Vec::new();

        if t == HUMAN_ORDER_STEP {
            events.push(format!(
                "Human posts buy @ ₹{:.2}.",
                params.human_buy_price
            ));
        }

        if t >= HUMAN_ORDER_STEP && params.human_buy_price > quotes.bid {
            quotes.bid = params.human_buy_price + params.algo_step;
            quotes.widen_ask_to(REACTION_ASK_GAP);
            events.push(format!("Algo bumps bid to ₹{:.2}.", quotes.bid));
        }

        if t >= MOMENTUM_START_STEP {
            quotes.bid += sampler.choose(&BID_MOMENTUM_CHOICES);
            let gap = sampler.choose(&ASK_GAP_CHOICES);
            quotes.widen_ask_to(gap);
            events.push(MOMENTUM_EVENT.to_owned());
        }

        snapshots.push(Snapshot::new(StepIndex::base(t), opening, events.join(" ")));

        if quotes.mid() >= fair_threshold {
            let sell_price = quotes.ask.max(fair_threshold);
            if outcome.is_none() {
                outcome = Some(TradeOutcome::bought_at(sell_price));
            }

            quotes = reset_target;
            snapshots.push(Snapshot::new(
                StepIndex::post_reset(t),
                quotes,
                format!("Algo resets quotes to ₹{:.2}/₹{:.2}", quotes.bid, quotes.ask),
            ));
            exit_step = Some(t);
            break;
        }
    }

    SimulationResult {
        fair_price: params.fair_price,
        fair_threshold,
        snapshots,
        outcome,
        exit_step,
    }
}
