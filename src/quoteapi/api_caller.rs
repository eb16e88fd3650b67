use super::response;
use crate::http::client::{self, RequestError};
use std::time::Duration;

/// Anything that can produce the quote payload for a symbol.
pub trait QuoteSource {
    async fn fetch(&self, symbol: &str) -> Result<response::QuotePayload, RequestError>;
}

/// The backend quote service reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpQuoteSource {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

impl QuoteSource for HttpQuoteSource {
    async fn fetch(&self, symbol: &str) -> Result<response::QuotePayload, RequestError> {
        stock_quote(&self.base_url, symbol, self.timeout).await
    }
}

/// Builds the request target. The symbol goes into the path as given.
pub fn stock_url(base_url: &str, symbol: &str) -> String {
    format!("{}/stock/{}", base_url.trim_end_matches('/'), symbol)
}

/// Fetches the latest quote payload for a given stock symbol.
pub async fn stock_quote(
    base_url: &str,            // Backend base URL.
    symbol: &str,              // Stock symbol, e.g. "005930.KS".
    timeout: Option<Duration>, // None waits indefinitely.
) -> Result<response::QuotePayload, RequestError> {
    let url = stock_url(base_url, symbol);
    log::info!("requesting quote: {}", url);

    let payload = client::request::<response::QuotePayload>(&url, timeout).await?;
    log::debug!("quote payload: {:?}", payload);
    Ok(payload)
}
