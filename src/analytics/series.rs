use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::analytics::pnl::{compute_pnl, round2};
use crate::config::{MonthBucketing, SetupOrder, SetupPolicy};
use crate::models::Trade;

const UNKNOWN_SETUP: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub date: NaiveDate,
    /// Chart axis label, e.g. "Mar 05".
    pub label: String,
    pub equity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitPoint {
    pub date: NaiveDate,
    pub label: String,
    pub profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPnl {
    pub month: String,
    pub pnl: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupStats {
    pub setup: String,
    pub count: usize,
    pub pnl: f64,
}

/// Closed trades with a computable P&L and a parsable date, stable-sorted by
/// date ascending. Same-day trades keep their input order.
fn chronological(trades: &[Trade]) -> Vec<(NaiveDate, f64)> {
    let mut out: Vec<(NaiveDate, f64)> = trades
        .iter()
        .filter_map(|t| Some((t.trade_date()?, compute_pnl(t)?)))
        .collect();
    out.sort_by_key(|(d, _)| *d);
    out
}

fn chart_label(d: NaiveDate) -> String {
    d.format("%b %d").to_string()
}

/// One point per closed trade: `starting_equity` plus the running P&L.
pub fn equity_curve(trades: &[Trade], starting_equity: f64) -> Vec<EquityPoint> {
    let mut equity = starting_equity;
    chronological(trades)
        .into_iter()
        .map(|(date, pnl)| {
            equity += pnl;
            EquityPoint {
                date,
                label: chart_label(date),
                equity,
            }
        })
        .collect()
}

/// Cumulative realised profit, starting from zero.
pub fn profit_curve(trades: &[Trade]) -> Vec<ProfitPoint> {
    let mut profit = 0.0;
    chronological(trades)
        .into_iter()
        .map(|(date, pnl)| {
            profit += pnl;
            ProfitPoint {
                date,
                label: chart_label(date),
                profit,
            }
        })
        .collect()
}

/// P&L per month bucket, buckets in order of their first trade.
///
/// With [`MonthBucketing::Label`] the year is dropped, so March 2023 and
/// March 2024 land in the same "Mar" bucket.
pub fn monthly_pnl(trades: &[Trade], bucketing: MonthBucketing) -> Vec<MonthlyPnl> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<MonthlyPnl> = Vec::new();

    for (date, pnl) in chronological(trades) {
        let month = match bucketing {
            MonthBucketing::Label => date.format("%b").to_string(),
            MonthBucketing::YearMonth => date.format("%Y-%m").to_string(),
        };
        match index.get(&month) {
            Some(&i) => out[i].pnl += pnl,
            None => {
                index.insert(month.clone(), out.len());
                out.push(MonthlyPnl { month, pnl });
            }
        }
    }

    for m in &mut out {
        m.pnl = round2(m.pnl);
    }
    out
}

/// Count and P&L per setup label over closed trades.
///
/// Groups start out in first-seen order; `order` re-sorts them (stable) and
/// `limit` truncates after sorting. With `SetupOrder::Insertion` the limit is
/// "first N seen", not "top N".
pub fn setup_breakdown(
    trades: &[Trade],
    policy: SetupPolicy,
    order: SetupOrder,
    limit: Option<usize>,
) -> Vec<SetupStats> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<SetupStats> = Vec::new();

    for trade in trades {
        let Some(pnl) = compute_pnl(trade) else {
            continue;
        };
        let setup = match (trade.setup_label(), policy) {
            (Some(s), _) => s.to_string(),
            (None, SetupPolicy::BucketUnknown) => UNKNOWN_SETUP.to_string(),
            (None, SetupPolicy::DropUntagged) => continue,
        };
        match index.get(&setup) {
            Some(&i) => {
                out[i].count += 1;
                out[i].pnl += pnl;
            }
            None => {
                index.insert(setup.clone(), out.len());
                out.push(SetupStats {
                    setup,
                    count: 1,
                    pnl,
                });
            }
        }
    }

    match order {
        SetupOrder::Insertion => {}
        SetupOrder::CountDesc => out.sort_by(|a, b| b.count.cmp(&a.count)),
        SetupOrder::PnlDesc => out.sort_by(|a, b| {
            b.pnl.partial_cmp(&a.pnl).unwrap_or(Ordering::Equal)
        }),
    }

    if let Some(n) = limit {
        out.truncate(n);
    }
    for s in &mut out {
        s.pnl = round2(s.pnl);
    }
    out
}

/// The `n` most recently created records, newest first.
///
/// Records with an unparsable `created_at` sort after every parsable one.
pub fn latest(trades: &[Trade], n: usize) -> Vec<&Trade> {
    let mut keyed: Vec<(Option<DateTime<Utc>>, &Trade)> =
        trades.iter().map(|t| (t.created_time(), t)).collect();
    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    keyed.into_iter().take(n).map(|(_, t)| t).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;
    use crate::test_helpers::{closed_trade, open_trade, trade_with_pnl, with_created, with_setup};

    #[test]
    fn equity_curve_skips_open_and_accumulates() {
        let trades = vec![
            trade_with_pnl("a", 10.0, "2024-01-03"),
            open_trade("b", Direction::Long, 10.0, "2024-01-01"),
            trade_with_pnl("c", -4.0, "2024-01-02"),
            trade_with_pnl("d", 1.5, "2024-01-05"),
        ];
        let curve = equity_curve(&trades, 1000.0);
        assert_eq!(curve.len(), 3);
        assert_eq!(curve[0].equity, 996.0);
        assert_eq!(curve[1].equity, 1006.0);
        assert_eq!(curve[2].equity, 1007.5);
        assert_eq!(curve[0].label, "Jan 02");
    }

    #[test]
    fn same_day_trades_keep_input_order() {
        let trades = vec![
            trade_with_pnl("a", 3.0, "2024-01-02"),
            trade_with_pnl("b", -1.0, "2024-01-01"),
            trade_with_pnl("c", 7.0, "2024-01-02"),
        ];
        let curve = equity_curve(&trades, 0.0);
        let equities: Vec<f64> = curve.iter().map(|p| p.equity).collect();
        assert_eq!(equities, vec![-1.0, 2.0, 9.0]);
    }

    #[test]
    fn equity_curve_skips_unparsable_dates() {
        let trades = vec![
            trade_with_pnl("a", 3.0, "2024-01-02"),
            trade_with_pnl("b", 9.0, "someday"),
        ];
        assert_eq!(equity_curve(&trades, 100.0).len(), 1);
    }

    #[test]
    fn profit_curve_starts_at_zero() {
        let trades = vec![
            trade_with_pnl("a", 2.0, "2024-01-01"),
            trade_with_pnl("b", -5.0, "2024-01-02"),
        ];
        let curve = profit_curve(&trades);
        assert_eq!(curve[0].profit, 2.0);
        assert_eq!(curve[1].profit, -3.0);
    }

    #[test]
    fn month_label_merges_years() {
        let trades = vec![
            trade_with_pnl("a", 10.0, "2023-03-01"),
            trade_with_pnl("b", 4.0, "2024-03-15"),
            trade_with_pnl("c", -2.0, "2023-04-10"),
        ];
        let months = monthly_pnl(&trades, MonthBucketing::Label);
        assert_eq!(
            months,
            vec![
                MonthlyPnl { month: "Mar".into(), pnl: 14.0 },
                MonthlyPnl { month: "Apr".into(), pnl: -2.0 },
            ]
        );
    }

    #[test]
    fn year_month_keeps_years_apart() {
        let trades = vec![
            trade_with_pnl("b", 4.0, "2024-03-15"),
            trade_with_pnl("a", 10.0, "2023-03-01"),
        ];
        let months = monthly_pnl(&trades, MonthBucketing::YearMonth);
        assert_eq!(months.len(), 2);
        assert_eq!(months[0].month, "2023-03");
        assert_eq!(months[1].month, "2024-03");
    }

    #[test]
    fn monthly_sums_are_rounded() {
        let trades = vec![
            trade_with_pnl("a", 0.1, "2024-05-01"),
            trade_with_pnl("b", 0.2, "2024-05-02"),
        ];
        let months = monthly_pnl(&trades, MonthBucketing::Label);
        assert_eq!(months[0].pnl, 0.3);
    }

    #[test]
    fn setup_policy_variants() {
        let trades = vec![
            with_setup(trade_with_pnl("a", 5.0, "2024-01-01"), Some("breakout")),
            with_setup(trade_with_pnl("b", 2.0, "2024-01-02"), None),
            with_setup(trade_with_pnl("c", -1.0, "2024-01-03"), Some("breakout")),
            with_setup(open_trade("d", Direction::Long, 1.0, "2024-01-04"), Some("pullback")),
        ];

        let dropped = setup_breakdown(&trades, SetupPolicy::DropUntagged, SetupOrder::Insertion, None);
        assert_eq!(
            dropped,
            vec![SetupStats { setup: "breakout".into(), count: 2, pnl: 4.0 }]
        );

        let bucketed = setup_breakdown(&trades, SetupPolicy::BucketUnknown, SetupOrder::Insertion, None);
        assert_eq!(bucketed.len(), 2);
        assert_eq!(bucketed[1].setup, "Unknown");
        assert_eq!(bucketed[1].pnl, 2.0);
    }

    #[test]
    fn limit_is_first_seen_not_top() {
        let trades = vec![
            with_setup(trade_with_pnl("a", 1.0, "2024-01-01"), Some("a")),
            with_setup(trade_with_pnl("b", 1.0, "2024-01-01"), Some("b")),
            with_setup(trade_with_pnl("c", 50.0, "2024-01-01"), Some("c")),
            with_setup(trade_with_pnl("d", 1.0, "2024-01-01"), Some("c")),
        ];
        let first = setup_breakdown(&trades, SetupPolicy::DropUntagged, SetupOrder::Insertion, Some(2));
        let names: Vec<&str> = first.iter().map(|s| s.setup.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);

        let by_count = setup_breakdown(&trades, SetupPolicy::DropUntagged, SetupOrder::CountDesc, Some(2));
        let names: Vec<&str> = by_count.iter().map(|s| s.setup.as_str()).collect();
        assert_eq!(names, vec!["c", "a"]);

        let by_pnl = setup_breakdown(&trades, SetupPolicy::DropUntagged, SetupOrder::PnlDesc, Some(1));
        assert_eq!(by_pnl[0].setup, "c");
        assert_eq!(by_pnl[0].pnl, 51.0);
    }

    #[test]
    fn latest_orders_by_creation_time() {
        let trades = vec![
            with_created(trade_with_pnl("a", 1.0, "2024-06-01"), "2024-01-01T10:00:00Z"),
            with_created(trade_with_pnl("b", 1.0, "2023-01-01"), "2024-02-01T10:00:00Z"),
            with_created(trade_with_pnl("c", 1.0, "2024-01-01"), "bogus"),
            with_created(trade_with_pnl("d", 1.0, "2024-01-01"), "2024-02-01T10:00:00Z"),
        ];
        let ids: Vec<&str> = latest(&trades, 3).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a"]);

        let all: Vec<&str> = latest(&trades, 10).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(all, vec!["b", "d", "a", "c"]);
        assert!(latest(&trades, 0).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_series() {
        assert!(equity_curve(&[], 10_000.0).is_empty());
        assert!(profit_curve(&[]).is_empty());
        assert!(monthly_pnl(&[], MonthBucketing::Label).is_empty());
        assert!(setup_breakdown(&[], SetupPolicy::BucketUnknown, SetupOrder::Insertion, Some(5)).is_empty());
        assert!(latest(&[], 5).is_empty());
    }

    #[test]
    fn short_trades_in_curve() {
        let trades = vec![closed_trade("a", Direction::Short, 100.0, 90.0, "2024-01-01")];
        assert_eq!(equity_curve(&trades, 0.0)[0].equity, 10.0);
    }
}
