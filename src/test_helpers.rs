use chrono::{DateTime, NaiveDate, Utc};

use crate::config::Config;
use crate::models::{Direction, Trade};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn at(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

/// A closed trade on "NQ" with no setup and a creation time at noon on `date`.
pub fn closed_trade(id: &str, direction: Direction, entry: f64, exit: f64, date: &str) -> Trade {
    Trade {
        id: id.to_string(),
        ticker: "NQ".to_string(),
        entry,
        exit: Some(exit),
        direction,
        setup: None,
        notes: None,
        tags: None,
        date: date.to_string(),
        created_at: format!("{}T12:00:00Z", date),
        ai_feedback: None,
        user_id: None,
    }
}

pub fn open_trade(id: &str, direction: Direction, entry: f64, date: &str) -> Trade {
    Trade {
        exit: None,
        ..closed_trade(id, direction, entry, entry, date)
    }
}

/// A long trade from 100 whose P&L is `pnl`.
pub fn trade_with_pnl(id: &str, pnl: f64, date: &str) -> Trade {
    closed_trade(id, Direction::Long, 100.0, 100.0 + pnl, date)
}

pub fn with_setup(mut trade: Trade, setup: Option<&str>) -> Trade {
    trade.setup = setup.map(str::to_string);
    trade
}

pub fn with_created(mut trade: Trade, created_at: &str) -> Trade {
    trade.created_at = created_at.to_string();
    trade
}

/// Eight trades over March/April 2024: six closed across three setups, two open.
pub fn sample_journal() -> Vec<Trade> {
    vec![
        with_setup(closed_trade("t1", Direction::Long, 100.0, 112.0, "2024-03-04"), Some("breakout")),
        with_setup(closed_trade("t2", Direction::Short, 250.0, 260.0, "2024-03-11"), Some("reversal")),
        with_setup(closed_trade("t3", Direction::Long, 40.0, 40.0, "2024-03-18"), Some("breakout")),
        with_setup(open_trade("t4", Direction::Long, 75.0, "2024-03-25"), Some("pullback")),
        with_setup(closed_trade("t5", Direction::Short, 90.0, 81.0, "2024-04-02"), Some("pullback")),
        with_setup(closed_trade("t6", Direction::Long, 60.0, 54.5, "2024-04-09"), None),
        with_setup(closed_trade("t7", Direction::Long, 20.0, 23.0, "2024-04-16"), Some("reversal")),
        with_setup(open_trade("t8", Direction::Short, 33.0, "2024-04-23"), None),
    ]
}

/// Defaults, with logging quiet.
pub fn test_config() -> Config {
    Config {
        log_level: "ERROR".to_string(),
        ..Config::default()
    }
}
