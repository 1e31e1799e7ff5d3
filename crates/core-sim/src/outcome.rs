use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TradeOutcome {
    pub human_position: u32,
    pub human_avg_price: f64,
}

impl TradeOutcome {
    pub fn bought_at(price: f64) -> Self {
        Self {
            human_position: 1,
            human_avg_price: price,
        }
    }

    /// Unrealized profit of the human marked against the fair price.
    pub fn pnl(&self, fair_price: f64) -> f64 {
        (fair_price - self.human_avg_price) * f64::from(self.human_position)
    }
}
