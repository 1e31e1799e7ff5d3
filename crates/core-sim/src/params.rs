use serde::{Deserialize, Serialize};

pub const FAIR_THRESHOLD_MULTIPLIER: f64 = 1.20;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub fair_price: f64,
    pub initial_bid: f64,
    pub initial_ask: f64,
    pub human_buy_price: f64,
    pub algo_step: f64,
    pub max_steps: u32,
}

impl SimulationParameters {
    /// Mid price at or above which the algo sells to the human and resets.
    pub fn fair_threshold(&self) -> f64 {
        self.fair_price * FAIR_THRESHOLD_MULTIPLIER
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            fair_price: 40.0,
            initial_bid: 20.0,
            initial_ask: 80.0,
            human_buy_price: 21.0,
            algo_step: 1.0,
            max_steps: 30,
        }
    }
}
