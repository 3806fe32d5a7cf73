pub mod api;
pub mod file;

pub use api::ApiTradeSource;
pub use file::FileTradeSource;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Trade;

/// Where the journal's trades come from.
#[async_trait]
pub trait TradeSource: Send + Sync {
    async fn fetch_trades(&mut self) -> Result<Vec<Trade>>;
    async fn fetch_trade(&mut self, id: &str) -> Result<Trade>;
}
