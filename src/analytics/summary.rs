use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::pnl::{classify, compute_pnl};
use crate::models::{Outcome, Trade};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    // Performance
    pub total_pnl: f64,
    pub win_rate: f64,

    // Counts
    pub total_trades: usize,
    /// Closed trades with a computable P&L. Closed trades with an unknown
    /// direction or non-finite prices land in `invalid_count` instead, so
    /// `closed_count + open_count + invalid_count == total_trades`.
    pub closed_count: usize,
    pub open_count: usize,
    pub invalid_count: usize,
    pub windowed_trade_count: usize,

    // Outcomes
    pub winners: usize,
    pub losers: usize,
    pub break_even: usize,
    pub avg_win: f64,
    pub avg_loss: f64,
    pub best_trade: f64,
    pub worst_trade: f64,
    /// Gross profit over gross loss; `None` when nothing was lost.
    pub profit_factor: Option<f64>,
}

/// Aggregate a trade list into headline statistics.
///
/// A trade counts toward `windowed_trade_count` when the instant its date
/// names (midnight UTC for a bare date) is at or after `as_of - window_days`.
/// The time of day of `as_of` matters: at 10:00 on the 31st a 30-day window
/// starts at 10:00 on the 1st, leaving a trade dated the 1st outside it.
/// Closed trades whose P&L cannot be computed are counted in `invalid_count`
/// and otherwise ignored.
pub fn summarize(trades: &[Trade], as_of: DateTime<Utc>, window_days: i64) -> SummaryStats {
    let window_start = Duration::try_days(window_days)
        .and_then(|d| as_of.checked_sub_signed(d))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);

    let mut stats = SummaryStats {
        total_trades: trades.len(),
        ..Default::default()
    };

    let mut gross_profit = 0.0;
    let mut gross_loss = 0.0;
    let mut best = f64::NEG_INFINITY;
    let mut worst = f64::INFINITY;

    for trade in trades {
        if trade.date_instant().is_some_and(|d| d >= window_start) {
            stats.windowed_trade_count += 1;
        }

        match classify(trade) {
            Outcome::Open => {
                stats.open_count += 1;
                continue;
            }
            Outcome::Invalid => {
                stats.invalid_count += 1;
                continue;
            }
            Outcome::Win => stats.winners += 1,
            Outcome::Loss => stats.losers += 1,
            Outcome::BreakEven => stats.break_even += 1,
        }

        let Some(pnl) = compute_pnl(trade) else {
            continue;
        };
        stats.closed_count += 1;
        stats.total_pnl += pnl;
        if pnl > 0.0 {
            gross_profit += pnl;
        } else if pnl < 0.0 {
            gross_loss += pnl;
        }
        best = best.max(pnl);
        worst = worst.min(pnl);
    }

    if stats.closed_count > 0 {
        stats.win_rate = stats.winners as f64 / stats.closed_count as f64 * 100.0;
        stats.best_trade = best;
        stats.worst_trade = worst;
    }
    if stats.winners > 0 {
        stats.avg_win = gross_profit / stats.winners as f64;
    }
    if stats.losers > 0 {
        stats.avg_loss = gross_loss / stats.losers as f64;
        stats.profit_factor = Some(gross_profit / gross_loss.abs());
    }

    stats
}
