mod outcome;
mod params;
mod sampler;
mod simulator;
mod snapshot;
mod state;

pub use outcome::TradeOutcome;
pub use params::{SimulationParameters, FAIR_THRESHOLD_MULTIPLIER};
pub use sampler::{FixedChoice, RandomChoice, ScriptedChoice, UniformChoice};
pub use simulator::{
    simulate, SimulationResult, ASK_GAP_CHOICES, BID_MOMENTUM_CHOICES, MOMENTUM_EVENT,
};
pub use snapshot::{Snapshot, StepIndex};
pub use state::QuoteState;

#[cfg(test)]
mod tests {
    use super::{simulate, ScriptedChoice, SimulationParameters};

    #[test]
    fn parameter_defaults_match_the_demo_page() {
        let params = SimulationParameters::default();
        assert_eq!(params.fair_price, 40.0);
        assert_eq!(params.initial_bid, 20.0);
        assert_eq!(params.initial_ask, 80.0);
        assert_eq!(params.human_buy_price, 21.0);
        assert_eq!(params.algo_step, 1.0);
        assert_eq!(params.max_steps, 30);
        assert_eq!(params.fair_threshold(), 48.0);
    }

    #[test]
    fn momentum_draws_bid_lift_before_ask_gap() {
        let params = SimulationParameters {
            initial_ask: 23.0,
            max_steps: 4,
            ..SimulationParameters::default()
        };
        let mut sampler = ScriptedChoice::new(vec![0, 2]);

        let result = simulate(&params, &mut sampler);

        assert_eq!(sampler.draws(), 4);
        assert!(result.outcome.is_none());
        let step_three = &result.snapshots[3];
        assert_eq!((step_three.bid, step_three.ask), (22.5, 27.5));
    }
}
