use crate::models::{Direction, Outcome, Trade};

/// Direction-adjusted price difference of a closed trade.
///
/// `None` for open trades, for an unknown direction and for non-finite prices.
pub fn compute_pnl(trade: &Trade) -> Option<f64> {
    let exit = trade.exit?;
    if !trade.entry.is_finite() || !exit.is_finite() {
        return None;
    }
    match trade.direction {
        Direction::Long => Some(exit - trade.entry),
        Direction::Short => Some(trade.entry - exit),
        Direction::Unknown => None,
    }
}

/// P&L as a percentage of the entry price. `None` when `entry <= 0`.
pub fn compute_pnl_percent(trade: &Trade) -> Option<f64> {
    if trade.entry <= 0.0 {
        return None;
    }
    compute_pnl(trade).map(|pnl| pnl / trade.entry * 100.0)
}

/// `pnl > 0` is the only winner predicate; exactly zero is break-even.
pub fn classify(trade: &Trade) -> Outcome {
    if trade.is_open() {
        return Outcome::Open;
    }
    match compute_pnl(trade) {
        None => Outcome::Invalid,
        Some(pnl) if pnl > 0.0 => Outcome::Win,
        Some(pnl) if pnl < 0.0 => Outcome::Loss,
        Some(_) => Outcome::BreakEven,
    }
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
