use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics::classify;
use crate::error::{JournalError, Result};
use crate::models::trade::parse_calendar_date;
use crate::models::{Direction, Outcome, Trade};

/// History-view filter. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeFilter {
    /// Case-insensitive substring of the ticker.
    pub ticker: Option<String>,
    pub direction: Option<Direction>,
    /// Case-insensitive exact setup label.
    pub setup: Option<String>,
    pub outcome: Option<Outcome>,
    /// Inclusive.
    pub from: Option<NaiveDate>,
    /// Inclusive.
    pub to: Option<NaiveDate>,
}

impl TradeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn setup(mut self, setup: impl Into<String>) -> Self {
        self.setup = Some(setup.into());
        self
    }

    pub fn outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Build a filter from `--key=value` command-line flags.
    ///
    /// Recognised keys are `ticker`, `direction`, `setup`, `outcome`, `from`
    /// and `to`; anything else is ignored.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let mut filter = Self::new();
        for arg in args {
            let Some((key, value)) = arg
                .as_ref()
                .strip_prefix("--")
                .and_then(|a| a.split_once('='))
            else {
                continue;
            };
            match key {
                "ticker" => filter.ticker = Some(value.to_string()),
                "setup" => filter.setup = Some(value.to_string()),
                "direction" => {
                    let d = Direction::from_str_loose(value).ok_or_else(|| {
                        JournalError::Filter(format!("unknown direction '{}'", value))
                    })?;
                    filter.direction = Some(d);
                }
                "outcome" => {
                    let o = Outcome::from_str_loose(value).ok_or_else(|| {
                        JournalError::Filter(format!("unknown outcome '{}'", value))
                    })?;
                    filter.outcome = Some(o);
                }
                "from" | "to" => {
                    let d = parse_calendar_date(value).ok_or_else(|| {
                        JournalError::Filter(format!("bad {} date '{}'", key, value))
                    })?;
                    if key == "from" {
                        filter.from = Some(d);
                    } else {
                        filter.to = Some(d);
                    }
                }
                _ => {}
            }
        }
        Ok(filter)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, trade: &Trade) -> bool {
        if let Some(needle) = &self.ticker {
            if !trade
                .ticker
                .to_lowercase()
                .contains(&needle.trim().to_lowercase())
            {
                return false;
            }
        }

        if let Some(d) = self.direction {
            if trade.direction != d {
                return false;
            }
        }

        if let Some(setup) = &self.setup {
            match trade.setup_label() {
                Some(s) if s.eq_ignore_ascii_case(setup.trim()) => {}
                _ => return false,
            }
        }

        if let Some(o) = self.outcome {
            if classify(trade) != o {
                return false;
            }
        }

        if self.from.is_some() || self.to.is_some() {
            let Some(d) = trade.trade_date() else {
                return false;
            };
            if self.from.is_some_and(|from| d < from) || self.to.is_some_and(|to| d > to) {
                return false;
            }
        }

        true
    }

    /// Matching trades in input order.
    pub fn apply<'a>(&self, trades: &'a [Trade]) -> Vec<&'a Trade> {
        trades.iter().filter(|t| self.matches(t)).collect()
    }
}
