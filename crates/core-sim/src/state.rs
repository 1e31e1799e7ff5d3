#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteState {
    pub bid: f64,
    pub ask: f64,
}

impl QuoteState {
    pub fn new(bid: f64, ask: f64) -> Self {
        Self { bid, ask }
    }

    pub fn mid(&self) -> f64 {
        (self.bid + self.ask) / 2.0
    }

    /// Raises the ask so it sits at least `gap` above the bid. Never lowers it.
    pub fn widen_ask_to(&mut self, gap: f64) {
        self.ask = self.ask.max(self.bid + gap);
    }
}

#[cfg(test)]
mod tests {
    use super::QuoteState;

    #[test]
    fn widen_ask_only_moves_up() {
        let mut quotes = QuoteState::new(22.0, 80.0);
        quotes.widen_ask_to(2.0);
        assert_eq!(quotes.ask, 80.0);

        quotes.bid = 79.5;
        quotes.widen_ask_to(2.0);
        assert_eq!(quotes.ask, 81.5);
        assert_eq!(quotes.mid(), 80.5);
    }
}
