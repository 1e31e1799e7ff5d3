use core_sim::SimulationResult;
use serde::Serialize;

pub const NO_TRADE_MESSAGE: &str = "No trade executed with the human yet.";

/// Human side of a finished run, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TradeSummary {
    Executed {
        human_buy_price: f64,
        fair_price: f64,
        unrealized_pnl: f64,
    },
    NoTrade,
}

impl TradeSummary {
    pub fn from_result(result: &SimulationResult) -> Self {
        match result.outcome {
            Some(outcome) => Self::Executed {
                human_buy_price: outcome.human_avg_price,
                fair_price: result.fair_price,
                unrealized_pnl: outcome.pnl(result.fair_price),
            },
            None => Self::NoTrade,
        }
    }

    pub fn is_loss(&self) -> bool {
        matches!(self, Self::Executed { unrealized_pnl, .. } if *unrealized_pnl < 0.0)
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Executed {
                human_buy_price,
                fair_price,
                unrealized_pnl,
            } => vec![
                format!("Human Buy Price: ₹{human_buy_price:.2}"),
                format!("Fair Value: ₹{fair_price:.2}"),
                format!("Unrealized P&L: ₹{unrealized_pnl:.2} (Loss if negative)"),
            ],
            Self::NoTrade => vec![NO_TRADE_MESSAGE.to_owned()],
        }
    }
}

#[cfg(test)]
mod tests {
    use core_sim::{simulate, FixedChoice, SimulationParameters};

    use super::{TradeSummary, NO_TRADE_MESSAGE};

    #[test]
    fn executed_trade_reports_loss_against_fair_value() {
        let result = simulate(&SimulationParameters::default(), &mut FixedChoice::minimum());

        let summary = TradeSummary::from_result(&result);

        assert_eq!(
            summary,
            TradeSummary::Executed {
                human_buy_price: 80.0,
                fair_price: 40.0,
                unrealized_pnl: -40.0,
            }
        );
        assert!(summary.is_loss());
        assert_eq!(
            summary.lines(),
            vec![
                "Human Buy Price: ₹80.00",
                "Fair Value: ₹40.00",
                "Unrealized P&L: ₹-40.00 (Loss if negative)",
            ]
        );
    }

    #[test]
    fn missing_trade_reports_informational_message() {
        let params = SimulationParameters {
            initial_ask: 60.0,
            max_steps: 10,
            ..SimulationParameters::default()
        };
        let result = simulate(&params, &mut FixedChoice::minimum());

        let summary = TradeSummary::from_result(&result);

        assert_eq!(summary, TradeSummary::NoTrade);
        assert!(!summary.is_loss());
        assert_eq!(summary.lines(), vec![NO_TRADE_MESSAGE]);
    }

    #[test]
    fn summary_serializes_with_status_tag() {
        let json = serde_json::to_value(TradeSummary::NoTrade).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "no_trade" }));
    }
}
