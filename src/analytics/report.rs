use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analytics::pnl::{compute_pnl, compute_pnl_percent};
use crate::analytics::series::{latest, EquityPoint, MonthlyPnl, ProfitPoint, SetupStats};
use crate::analytics::summary::SummaryStats;
use crate::analytics::PerformanceAggregator;
use crate::config::Config;
use crate::models::Trade;

const FEEDBACK_PREVIEW_CHARS: usize = 150;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestTrade {
    pub trade: Trade,
    pub pnl: Option<f64>,
    pub pnl_percent: Option<f64>,
    /// AI feedback cut to a card-sized preview.
    pub feedback_preview: Option<String>,
}

impl LatestTrade {
    fn from_trade(trade: &Trade) -> Self {
        Self {
            trade: trade.clone(),
            pnl: compute_pnl(trade),
            pnl_percent: compute_pnl_percent(trade),
            feedback_preview: trade.ai_feedback.as_deref().map(preview),
        }
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() > FEEDBACK_PREVIEW_CHARS {
        let cut: String = text.chars().take(FEEDBACK_PREVIEW_CHARS).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub as_of: DateTime<Utc>,
    /// `as_of` as a calendar date in the configured time zone.
    pub as_of_date: NaiveDate,
    pub starting_equity: f64,
    pub window_days: i64,

    pub summary: SummaryStats,
    pub equity_curve: Vec<EquityPoint>,
    pub profit_curve: Vec<ProfitPoint>,
    pub monthly_pnl: Vec<MonthlyPnl>,
    pub setups: Vec<SetupStats>,
    pub latest: Vec<LatestTrade>,
}

impl DashboardReport {
    pub fn from_trades(trades: &[Trade], cfg: &Config, as_of: DateTime<Utc>) -> Self {
        let agg = PerformanceAggregator::new(cfg);
        let summary = agg.summarize(trades, as_of);

        if summary.invalid_count > 0 {
            debug!(
                "{} closed trade(s) left out of P&L (unknown direction or bad prices)",
                summary.invalid_count
            );
        }
        let undated = trades.iter().filter(|t| t.trade_date().is_none()).count();
        if undated > 0 {
            debug!("{} trade(s) with unparsable date left out of time series", undated);
        }

        DashboardReport {
            as_of,
            as_of_date: cfg.local_date(as_of),
            starting_equity: agg.starting_equity,
            window_days: agg.window_days,
            equity_curve: agg.equity_curve(trades),
            profit_curve: agg.profit_curve(trades),
            monthly_pnl: agg.monthly_pnl(trades),
            setups: agg.setup_breakdown(trades),
            latest: latest(trades, cfg.latest_count)
                .into_iter()
                .map(LatestTrade::from_trade)
                .collect(),
            summary,
        }
    }

    pub fn final_equity(&self) -> f64 {
        self.equity_curve
            .last()
            .map(|p| p.equity)
            .unwrap_or(self.starting_equity)
    }

    pub fn print_summary(&self) {
        let s = &self.summary;
        println!("\n{}", "=".repeat(70));
        println!("  PERFORMANCE DASHBOARD");
        println!("{}", "=".repeat(70));
        println!("  As of:       {}", self.as_of_date.format("%Y-%m-%d"));
        println!();
        println!("  PERFORMANCE");
        println!("  ───────────────────────────────────");
        println!("  Total P&L:   ${:+.2}", s.total_pnl);
        println!("  Win Rate:    {:.1}%", s.win_rate);
        println!("  Equity:      ${:.2} -> ${:.2}", self.starting_equity, self.final_equity());
        match s.profit_factor {
            Some(pf) => println!("  Profit Factor: {:.2}", pf),
            None => println!("  Profit Factor: n/a"),
        }
        println!();
        println!("  TRADES");
        println!("  ───────────────────────────────────");
        println!("  Total:       {}", s.total_trades);
        println!("  Closed/Open: {} / {}", s.closed_count, s.open_count);
        println!(
            "  W/L/BE:      {} / {} / {}",
            s.winners, s.losers, s.break_even
        );
        println!("  Last {}d:    {}", self.window_days, s.windowed_trade_count);
        println!("  Avg Win:     ${:+.2}", s.avg_win);
        println!("  Avg Loss:    ${:+.2}", s.avg_loss);
        println!("  Best:        ${:+.2}", s.best_trade);
        println!("  Worst:       ${:+.2}", s.worst_trade);
        if s.invalid_count > 0 {
            println!("  Skipped:     {} (unreadable P&L)", s.invalid_count);
        }

        if !self.monthly_pnl.is_empty() {
            println!();
            println!("  BY MONTH");
            println!("  ───────────────────────────────────");
            for m in &self.monthly_pnl {
                println!("  {:>8}: ${:+.2}", m.month, m.pnl);
            }
        }

        if !self.setups.is_empty() {
            println!();
            println!("  BY SETUP");
            println!("  ───────────────────────────────────");
            for st in &self.setups {
                println!(
                    "  {:>16}: {} trades | P&L ${:+.2}",
                    st.setup, st.count, st.pnl
                );
            }
        }

        if !self.latest.is_empty() {
            println!();
            println!("  LATEST");
            println!("  ───────────────────────────────────");
            for lt in &self.latest {
                let t = &lt.trade;
                let pnl = match lt.pnl {
                    Some(p) => format!("${:+.2}", p),
                    None => "open".to_string(),
                };
                println!(
                    "  {:<8} {:<5} {} | {} | {}",
                    t.ticker,
                    t.direction.as_str().to_uppercase(),
                    pnl,
                    t.setup_label().unwrap_or("No setup"),
                    t.date
                );
                if let Some(fb) = &lt.feedback_preview {
                    println!("           AI: {}", fb);
                }
            }
        }

        println!("{}", "=".repeat(70));
    }
}
