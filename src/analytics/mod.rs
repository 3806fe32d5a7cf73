pub mod pnl;
pub mod report;
pub mod series;
pub mod summary;

pub use pnl::{classify, compute_pnl, compute_pnl_percent};
pub use report::DashboardReport;
pub use series::{
    equity_curve, latest, monthly_pnl, profit_curve, setup_breakdown, EquityPoint, MonthlyPnl,
    ProfitPoint, SetupStats,
};
pub use summary::{summarize, SummaryStats};

use chrono::{DateTime, Utc};

use crate::config::{Config, MonthBucketing, SetupOrder, SetupPolicy};
use crate::models::Trade;

/// Dashboard statistics with the knobs taken from [`Config`].
///
/// Holds no state beyond its settings; every call recomputes from the slice
/// it is given.
#[derive(Debug, Clone)]
pub struct PerformanceAggregator {
    pub starting_equity: f64,
    pub window_days: i64,
    pub setup_policy: SetupPolicy,
    pub setup_order: SetupOrder,
    pub setup_limit: Option<usize>,
    pub month_bucketing: MonthBucketing,
}

impl PerformanceAggregator {
    pub fn new(cfg: &Config) -> Self {
        Self {
            starting_equity: cfg.starting_equity,
            window_days: cfg.window_days,
            setup_policy: cfg.setup_policy,
            setup_order: cfg.setup_order,
            setup_limit: cfg.setup_limit,
            month_bucketing: cfg.month_bucketing,
        }
    }

    pub fn summarize(&self, trades: &[Trade], as_of: DateTime<Utc>) -> SummaryStats {
        summarize(trades, as_of, self.window_days)
    }

    pub fn equity_curve(&self, trades: &[Trade]) -> Vec<EquityPoint> {
        equity_curve(trades, self.starting_equity)
    }

    pub fn profit_curve(&self, trades: &[Trade]) -> Vec<ProfitPoint> {
        profit_curve(trades)
    }

    pub fn monthly_pnl(&self, trades: &[Trade]) -> Vec<MonthlyPnl> {
        monthly_pnl(trades, self.month_bucketing)
    }

    pub fn setup_breakdown(&self, trades: &[Trade]) -> Vec<SetupStats> {
        setup_breakdown(trades, self.setup_policy, self.setup_order, self.setup_limit)
    }
}
