//! Zone Monitor — a single-shot CLI that fetches the latest price for one trading
//! pair, classifies it against a configured accumulation zone, and prints exactly
//! one line to stdout:
//!
//! - in-zone: the price entered the zone (bounds inclusive),
//! - below-zone: the price dropped under the lower bound,
//! - otherwise a `DEBUG:` line with the current price,
//! - on any failure an `Error monitoring ...` line.
//!
//! Usage example (CLI):
//! ```bash
//! zone_monitor --symbol DOGEUSDT --name DOGE --zone-bottom 0.090 --zone-top 0.093
//! ```
//!
//! The process always exits with status 0 from the monitoring path; the output is
//! meant to be captured by an external scheduler (e.g. a cron job), so a failed
//! fetch is reported on stdout rather than through the exit code. Diagnostics go
//! through `log`/`env_logger` to stderr, keeping stdout a single line.
#![warn(missing_docs)]
mod args;
mod error;
mod fetcher;
mod model;
mod result;

use std::time::Duration;

use clap::Parser;
use log::debug;

use crate::args::Args;
use crate::fetcher::{BinanceSource, QuoteSource};
use crate::model::signal::Signal;
use crate::model::zone::BuyZone;
use crate::result::Result;

/// Run the fetch → evaluate → render pipeline against the given quote source.
///
/// Returns the single line to print for a successful run; any failure along the
/// way (invalid zone, transport error, bad payload, non-finite price) surfaces
/// as a `MonitorError` for the caller to report.
fn monitor_with_source<S: QuoteSource>(args: &Args, source: &S) -> Result<String> {
    let zone = BuyZone::new(args.zone_bottom, args.zone_top)?;
    let ticker = source.latest(&args.symbol)?;
    let price = ticker.price()?;
    debug!("{} last price: {}", ticker.symbol, price);

    let signal = Signal::evaluate(price, &zone);
    Ok(signal.render(&args.name, &zone))
}

/// Run one monitoring pass over the real HTTP quote source.
fn monitor(args: &Args) -> Result<String> {
    let source = BinanceSource::new(&args.endpoint, Duration::from_secs(args.timeout_secs))?;
    monitor_with_source(args, &source)
}

fn main() {
    init_logger();
    let args = Args::parse();

    // Failure is reported, not fatal: the caller scrapes stdout and must always
    // see the process exit successfully.
    match monitor(&args) {
        Ok(line) => println!("{}", line),
        Err(e) => println!("Error monitoring {}: {}", args.name, e),
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
