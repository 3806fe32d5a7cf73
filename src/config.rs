use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupPolicy {
    /// Closed trades without a setup are left out of the breakdown.
    DropUntagged,
    /// Closed trades without a setup are grouped under "Unknown".
    BucketUnknown,
}

impl SetupPolicy {
    pub fn from_str_loose(s: &str) -> Option<SetupPolicy> {
        match s.trim().to_lowercase().as_str() {
            "drop" | "drop_untagged" => Some(SetupPolicy::DropUntagged),
            "unknown" | "bucket_unknown" => Some(SetupPolicy::BucketUnknown),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupOrder {
    /// First-seen order of the setup label in the input.
    Insertion,
    CountDesc,
    PnlDesc,
}

impl SetupOrder {
    pub fn from_str_loose(s: &str) -> Option<SetupOrder> {
        match s.trim().to_lowercase().as_str() {
            "insertion" => Some(SetupOrder::Insertion),
            "count" | "count_desc" => Some(SetupOrder::CountDesc),
            "pnl" | "pnl_desc" => Some(SetupOrder::PnlDesc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthBucketing {
    /// Month name only ("Mar"); the same month of different years merges.
    Label,
    /// "YYYY-MM".
    YearMonth,
}

impl MonthBucketing {
    pub fn from_str_loose(s: &str) -> Option<MonthBucketing> {
        match s.trim().to_lowercase().as_str() {
            "label" | "month" => Some(MonthBucketing::Label),
            "year_month" | "yyyy-mm" => Some(MonthBucketing::YearMonth),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Sources
    pub trades_file: Option<String>,
    pub api_base_url: String,
    pub api_token: Option<String>,

    // Dashboard
    pub starting_equity: f64,
    pub window_days: i64,
    pub latest_count: usize,
    pub setup_limit: Option<usize>,
    pub setup_policy: SetupPolicy,
    pub setup_order: SetupOrder,
    pub month_bucketing: MonthBucketing,

    // Calendar used for "today"
    pub timezone: Tz,

    // Logging
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            trades_file: None,
            api_base_url: "http://localhost:8000".to_string(),
            api_token: None,
            starting_equity: 10_000.0,
            window_days: 30,
            latest_count: 5,
            setup_limit: Some(5),
            setup_policy: SetupPolicy::DropUntagged,
            setup_order: SetupOrder::Insertion,
            month_bucketing: MonthBucketing::Label,
            timezone: Tz::UTC,
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let env = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let setup_limit = match env("SETUP_LIMIT") {
            // 0 disables truncation
            Some(v) => match v.trim().parse::<usize>() {
                Ok(0) => None,
                Ok(n) => Some(n),
                Err(_) => defaults.setup_limit,
            },
            None => defaults.setup_limit,
        };

        Config {
            trades_file: env("JOURNAL_TRADES_FILE"),
            api_base_url: env("JOURNAL_API_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            api_token: env("JOURNAL_API_TOKEN"),
            starting_equity: env("STARTING_EQUITY")
                .and_then(|v| v.trim().parse().ok())
                .filter(|v: &f64| v.is_finite())
                .unwrap_or(defaults.starting_equity),
            window_days: env("WINDOW_DAYS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|v: &i64| *v >= 0)
                .unwrap_or(defaults.window_days),
            latest_count: env("LATEST_COUNT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.latest_count),
            setup_limit,
            setup_policy: env("SETUP_POLICY")
                .and_then(|v| SetupPolicy::from_str_loose(&v))
                .unwrap_or(defaults.setup_policy),
            setup_order: env("SETUP_ORDER")
                .and_then(|v| SetupOrder::from_str_loose(&v))
                .unwrap_or(defaults.setup_order),
            month_bucketing: env("MONTH_BUCKETING")
                .and_then(|v| MonthBucketing::from_str_loose(&v))
                .unwrap_or(defaults.month_bucketing),
            timezone: env("JOURNAL_TZ")
                .and_then(|v| v.trim().parse::<Tz>().ok())
                .unwrap_or(defaults.timezone),
            log_level: env("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Today's calendar date in the configured time zone.
    pub fn local_date(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.timezone).date_naive()
    }
}
