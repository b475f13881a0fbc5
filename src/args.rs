//! Command-line arguments for the zone monitor.
//!
//! This module defines the CLI interface using `clap`. Every flag has a default,
//! so a bare invocation reproduces the original DOGE/USDT setup; the defaults are
//! the one place where the monitored pair and its accumulation zone are declared.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Trading pair symbol queried on the exchange (e.g. `DOGEUSDT`).
    #[clap(long, default_value = "DOGEUSDT")]
    pub symbol: String,

    /// Short asset name used in the printed messages.
    #[clap(long, default_value = "DOGE")]
    pub name: String,

    /// Upper bound of the accumulation zone, in quote currency.
    #[clap(long, default_value_t = 0.093)]
    pub zone_top: f64,

    /// Lower bound of the accumulation zone, in quote currency.
    #[clap(long, default_value_t = 0.090)]
    pub zone_bottom: f64,

    /// Base URL of the price-quote service.
    #[clap(long, default_value = "https://api.binance.com")]
    pub endpoint: String,

    /// Timeout in seconds for the single outbound HTTP request.
    #[clap(long, default_value_t = 5)]
    pub timeout_secs: u64,
}
