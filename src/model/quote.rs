//! Quote payload received from the price endpoint.
//!
//! The `/api/v3/ticker/price` endpoint answers with a small JSON object such as
//! `{"symbol":"DOGEUSDT","price":"0.09150000"}`. Binance sends the price as a
//! string, but other compatible services send a plain number, so the field
//! accepts both forms.
use serde::Deserialize;

use crate::error::MonitorError;
use crate::result::Result;

/// Last-price ticker for a single trading pair.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceTicker {
    /// Pair symbol as echoed by the endpoint (e.g. `DOGEUSDT`).
    pub symbol: String,
    /// Last traded price, as a JSON string or number.
    pub price: RawPrice,
}

/// Price field as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    /// Price encoded as a decimal string (`"0.09150000"`).
    Text(String),
    /// Price encoded as a JSON number.
    Number(f64),
}

impl PriceTicker {
    /// Decode a ticker from a JSON body.
    pub fn from_json(body: &str) -> Result<Self> {
        let ticker = serde_json::from_str(body)?;
        Ok(ticker)
    }

    /// Extract the price as a finite `f64`.
    ///
    /// Non-numeric text maps to `MonitorError::InvalidPrice`; values that parse
    /// but are NaN or infinite map to `MonitorError::NonFinitePrice`, so the
    /// evaluator only ever sees a classifiable number.
    pub fn price(&self) -> Result<f64> {
        let value = match &self.price {
            RawPrice::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| MonitorError::InvalidPrice(text.clone()))?,
            RawPrice::Number(value) => *value,
        };
        if !value.is_finite() {
            return Err(MonitorError::NonFinitePrice(value));
        }
        Ok(value)
    }
}
