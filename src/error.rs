//! Error types used across the monitor.
//!
//! The `MonitorError` enum unifies transport, parsing, and configuration errors so
//! that they can be propagated easily with `Result<T, MonitorError>`. Everything
//! that can go wrong between issuing the quote request and selecting a signal
//! collapses into one of these variants; the entry point renders whichever variant
//! it receives as a single `Error monitoring ...` line.
use thiserror::Error;

/// Unified error type for the application.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// HTTP transport failure: connection error, timeout, TLS problem, or a
    /// body that could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The quote endpoint answered with a non-success status code.
    #[error("unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),

    /// Failure while decoding the quote JSON body via serde_json.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The price field was present but did not parse as a number.
    #[error("non-numeric price field: {0:?}")]
    InvalidPrice(String),

    /// The price parsed but is NaN or infinite and cannot be classified.
    #[error("non-finite price value: {0}")]
    NonFinitePrice(f64),

    /// The configured accumulation zone has its bounds inverted or non-finite.
    #[error("invalid accumulation zone: bottom {bottom} must not exceed top {top}")]
    InvalidZone {
        /// Configured lower bound.
        bottom: f64,
        /// Configured upper bound.
        top: f64,
    },
}
