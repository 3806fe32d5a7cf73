use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use trade_journal::analytics::DashboardReport;
use trade_journal::config::Config;
use trade_journal::history::TradeFilter;
use trade_journal::source::{ApiTradeSource, FileTradeSource, TradeSource};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    // journal-report [PATH] [--json] [--ticker=..] [--direction=..] [--setup=..]
    //                [--outcome=..] [--from=YYYY-MM-DD] [--to=YYYY-MM-DD]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let filter = TradeFilter::from_args(&args).context("Bad filter flag")?;
    let path = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .cloned()
        .or_else(|| cfg.trades_file.clone());

    let mut source: Box<dyn TradeSource> = match &path {
        Some(p) => {
            let file = FileTradeSource::new(p);
            info!("Reading trades from {}", file.path().display());
            Box::new(file)
        }
        None => {
            info!("Fetching trades from {}", cfg.api_base_url);
            Box::new(ApiTradeSource::new(&cfg))
        }
    };

    let mut trades = source
        .fetch_trades()
        .await
        .context("Failed to load trades")?;

    if !filter.is_empty() {
        let total = trades.len();
        trades = filter.apply(&trades).into_iter().cloned().collect();
        info!("Filter kept {} of {} trades", trades.len(), total);
    }

    if trades.is_empty() {
        warn!("Journal is empty, report will be all zeros");
    }

    let report = DashboardReport::from_trades(&trades, &cfg, Utc::now());

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print_summary();
    }

    Ok(())
}
