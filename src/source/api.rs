use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{JournalError, Result};
use crate::models::Trade;
use crate::source::TradeSource;

/// Read-only client for the journal's `/trades` endpoints.
pub struct ApiTradeSource {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiTradeSource {
    pub fn new(cfg: &Config) -> Self {
        Self::with_base_url(&cfg.api_base_url, cfg.api_token.clone())
    }

    pub fn with_base_url(base_url: &str, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn trades_url(&self) -> String {
        format!("{}/trades", self.base_url)
    }

    pub fn trade_url(&self, id: &str) -> String {
        format!("{}/trades/{}", self.base_url, id)
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let req = self.client.get(url);
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

#[async_trait]
impl TradeSource for ApiTradeSource {
    async fn fetch_trades(&mut self) -> Result<Vec<Trade>> {
        let url = self.trades_url();
        debug!("GET {}", url);

        let resp = self.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(JournalError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let trades: Vec<Trade> = resp.json().await?;
        info!("Fetched {} trades from {}", trades.len(), self.base_url);
        Ok(trades)
    }

    async fn fetch_trade(&mut self, id: &str) -> Result<Trade> {
        let url = self.trade_url(id);
        debug!("GET {}", url);

        let resp = self.get(&url).send().await?;
        match resp.status() {
            StatusCode::NOT_FOUND => Err(JournalError::NotFound(id.to_string())),
            s if !s.is_success() => Err(JournalError::Status {
                status: s.as_u16(),
                url,
            }),
            _ => Ok(resp.json().await?),
        }
    }
}
