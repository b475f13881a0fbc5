//! Fetching the latest quote from the price endpoint.
//!
//! `BinanceSource` issues a single blocking GET to the Binance-compatible
//! `/api/v3/ticker/price` endpoint and decodes the body into a `PriceTicker`.
//! There is no retry and no fallback: any transport, status, or decode failure
//! propagates as one `MonitorError` to the caller.
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::error::MonitorError;
use crate::model::quote::PriceTicker;
use crate::result::Result;

/// Path of the last-price endpoint, relative to the service base URL.
const TICKER_PATH: &str = "/api/v3/ticker/price";

/// A source of last-price tickers for trading pairs.
pub trait QuoteSource {
    /// Fetch the latest ticker for `symbol`.
    fn latest(&self, symbol: &str) -> Result<PriceTicker>;
}

/// Quote source backed by a Binance-compatible REST endpoint.
pub struct BinanceSource {
    client: Client,
    base_url: String,
}

impl BinanceSource {
    /// Create a source for the given base URL with a request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(BinanceSource {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl QuoteSource for BinanceSource {
    fn latest(&self, symbol: &str) -> Result<PriceTicker> {
        let url = format!("{}{}", self.base_url, TICKER_PATH);
        debug!("GET {} symbol={}", url, symbol);

        let response = self.client.get(&url).query(&[("symbol", symbol)]).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(MonitorError::Status(status));
        }

        let body = response.text()?;
        debug!("ticker response: {}", body.trim());
        PriceTicker::from_json(&body)
    }
}
