use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{JournalError, Result};
use crate::models::Trade;
use crate::source::TradeSource;

/// Reads a JSON array of trades, e.g. a saved `GET /trades` response.
pub struct FileTradeSource {
    path: PathBuf,
}

impl FileTradeSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<Trade>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| JournalError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        let trades: Vec<Trade> = serde_json::from_str(&content)?;
        info!("Loaded {} trades from {}", trades.len(), self.path.display());
        Ok(trades)
    }
}

#[async_trait]
impl TradeSource for FileTradeSource {
    async fn fetch_trades(&mut self) -> Result<Vec<Trade>> {
        self.load().await
    }

    async fn fetch_trade(&mut self, id: &str) -> Result<Trade> {
        self.load()
            .await?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| JournalError::NotFound(id.to_string()))
    }
}
