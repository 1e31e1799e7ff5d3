use std::ops::RangeInclusive;

use core_sim::SimulationParameters;
use serde::{Deserialize, Serialize};

/// Bounds of the demo page's sidebar inputs. The simulator itself accepts any
/// positive values; these only guard the HTTP surface.
pub const FAIR_PRICE_RANGE: RangeInclusive<f64> = 20.0..=200.0;
pub const QUOTE_RANGE: RangeInclusive<f64> = 1.0..=200.0;
pub const ALGO_STEP_RANGE: RangeInclusive<f64> = 0.5..=5.0;
pub const MAX_STEPS_RANGE: RangeInclusive<u32> = 10..=100;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("{name} must be a finite number")]
    NotFinite { name: &'static str },
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
}

/// Sidebar inputs of one run. Missing fields fall back to the page defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationRequest {
    pub fair_price: f64,
    pub initial_bid: f64,
    pub initial_ask: f64,
    pub human_buy_price: f64,
    pub algo_step: f64,
    pub max_steps: u32,
    pub seed: Option<u64>,
}

impl Default for SimulationRequest {
    fn default() -> Self {
        let defaults = SimulationParameters::default();
        Self {
            fair_price: defaults.fair_price,
            initial_bid: defaults.initial_bid,
            initial_ask: defaults.initial_ask,
            human_buy_price: defaults.human_buy_price,
            algo_step: defaults.algo_step,
            max_steps: defaults.max_steps,
            seed: None,
        }
    }
}

impl SimulationRequest {
    pub fn validate(&self) -> Result<SimulationParameters, ParameterError> {
        check_range("fair_price", self.fair_price, &FAIR_PRICE_RANGE)?;
        check_range("initial_bid", self.initial_bid, &QUOTE_RANGE)?;
        check_range("initial_ask", self.initial_ask, &QUOTE_RANGE)?;
        check_range("human_buy_price", self.human_buy_price, &QUOTE_RANGE)?;
        check_range("algo_step", self.algo_step, &ALGO_STEP_RANGE)?;
        if !MAX_STEPS_RANGE.contains(&self.max_steps) {
            return Err(ParameterError::OutOfRange {
                name: "max_steps",
                min: f64::from(*MAX_STEPS_RANGE.start()),
                max: f64::from(*MAX_STEPS_RANGE.end()),
                value: f64::from(self.max_steps),
            });
        }

        Ok(SimulationParameters {
            fair_price: self.fair_price,
            initial_bid: self.initial_bid,
            initial_ask: self.initial_ask,
            human_buy_price: self.human_buy_price,
            algo_step: self.algo_step,
            max_steps: self.max_steps,
        })
    }
}

fn check_range(
    name: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
) -> Result<(), ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NotFinite { name });
    }
    if !range.contains(&value) {
        return Err(ParameterError::OutOfRange {
            name,
            min: *range.start(),
            max: *range.end(),
            value,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterRanges {
    pub fair_price: InputRange,
    pub initial_bid: InputRange,
    pub initial_ask: InputRange,
    pub human_buy_price: InputRange,
    pub algo_step: InputRange,
    pub max_steps: InputRange,
}

impl ParameterRanges {
    pub fn sidebar() -> Self {
        let defaults = SimulationParameters::default();
        let input = |range: &RangeInclusive<f64>, step: f64, default: f64| InputRange {
            min: *range.start(),
            max: *range.end(),
            step,
            default,
        };

        Self {
            fair_price: input(&FAIR_PRICE_RANGE, 1.0, defaults.fair_price),
            initial_bid: input(&QUOTE_RANGE, 1.0, defaults.initial_bid),
            initial_ask: input(&QUOTE_RANGE, 1.0, defaults.initial_ask),
            human_buy_price: input(&QUOTE_RANGE, 1.0, defaults.human_buy_price),
            algo_step: input(&ALGO_STEP_RANGE, 0.5, defaults.algo_step),
            max_steps: InputRange {
                min: f64::from(*MAX_STEPS_RANGE.start()),
                max: f64::from(*MAX_STEPS_RANGE.end()),
                step: 5.0,
                default: f64::from(defaults.max_steps),
            },
        }
    }
}
