use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Direction;

/// A journal entry as the trades API returns it.
///
/// `date` and `created_at` stay as the raw wire strings; a record with an
/// unparsable date still loads and is only left out of date-based metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    pub ticker: String,
    pub entry: f64,
    #[serde(default)]
    pub exit: Option<f64>,
    pub direction: Direction,
    #[serde(default)]
    pub setup: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub date: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub ai_feedback: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl Trade {
    pub fn is_closed(&self) -> bool {
        self.exit.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.exit.is_none()
    }

    /// Setup label, with empty strings treated as untagged.
    pub fn setup_label(&self) -> Option<&str> {
        self.setup
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// The trade's logical calendar date.
    pub fn trade_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }

    /// The instant the trade's date refers to: midnight UTC for a bare
    /// `YYYY-MM-DD`, the timestamp itself when `date` carries a time.
    pub fn date_instant(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date).or_else(|| {
            self.trade_date()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        })
    }

    /// When the record was created, used for "most recent" ordering.
    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Accepts `YYYY-MM-DD` or a full timestamp whose calendar date is used.
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    parse_naive_datetime(s).map(|dt| dt.date())
}

/// RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS[.f]` taken as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    parse_naive_datetime(s).map(|dt| dt.and_utc())
}

fn parse_naive_datetime(s: &str) -> Option<NaiveDateTime> {
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}
