use std::fmt;

use serde::Serialize;

use crate::state::QuoteState;

/// Position of a snapshot in the run log.
///
/// A regular step is rendered as its integer index. The synthetic record the
/// algo appends after resetting its quotes shares the step's index and is
/// rendered as `index + 0.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "f64")]
pub struct StepIndex {
    base: u32,
    post_reset: bool,
}

impl StepIndex {
    pub const POST_RESET_OFFSET: f64 = 0.1;

    pub fn base(step: u32) -> Self {
        Self {
            base: step,
            post_reset: false,
        }
    }

    pub fn post_reset(step: u32) -> Self {
        Self {
            base: step,
            post_reset: true,
        }
    }

    pub fn step(&self) -> u32 {
        self.base
    }

    pub fn is_post_reset(&self) -> bool {
        self.post_reset
    }

    pub fn value(&self) -> f64 {
        if self.post_reset {
            f64::from(self.base) + Self::POST_RESET_OFFSET
        } else {
            f64::from(self.base)
        }
    }
}

impl From<StepIndex> for f64 {
    fn from(index: StepIndex) -> Self {
        index.value()
    }
}

impl fmt::Display for StepIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.post_reset {
            write!(f, "{}.1", self.base)
        } else {
            write!(f, "{}", self.base)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub step: StepIndex,
    pub bid: f64,
    pub ask: f64,
    pub mid: f64,
    pub event: String,
}

impl Snapshot {
    pub fn new(step: StepIndex, quotes: QuoteState, event: impl Into<String>) -> Self {
        Self {
            step,
            bid: quotes.bid,
            ask: quotes.ask,
            mid: quotes.mid(),
            event: event.into(),
        }
    }
}
