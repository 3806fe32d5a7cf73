use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
    /// Any direction string the journal API sends that is not long/short.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Long => "long",
            Direction::Short => "short",
            Direction::Unknown => "unknown",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Direction> {
        match s.trim().to_lowercase().as_str() {
            "long" | "buy" => Some(Direction::Long),
            "short" | "sell" => Some(Direction::Short),
            _ => None,
        }
    }
}

/// Result of a single trade as seen by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Open,
    Win,
    Loss,
    BreakEven,
    /// Closed, but P&L could not be computed (unknown direction, bad prices).
    Invalid,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Open => write!(f, "open"),
            Outcome::Win => write!(f, "win"),
            Outcome::Loss => write!(f, "loss"),
            Outcome::BreakEven => write!(f, "break_even"),
            Outcome::Invalid => write!(f, "invalid"),
        }
    }
}

impl Outcome {
    pub fn from_str_loose(s: &str) -> Option<Outcome> {
        match s.trim().to_lowercase().as_str() {
            "open" => Some(Outcome::Open),
            "win" | "winner" => Some(Outcome::Win),
            "loss" | "loser" => Some(Outcome::Loss),
            "break_even" | "breakeven" | "be" => Some(Outcome::BreakEven),
            "invalid" => Some(Outcome::Invalid),
            _ => None,
        }
    }

    pub fn is_closed(&self) -> bool {
        !matches!(self, Outcome::Open)
    }
}
