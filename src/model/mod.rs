//! Data model types used by the monitor.
//!
//! This module groups the simple value types the pipeline passes around:
//! - `quote` — the price payload received from the quote endpoint.
//! - `zone` — the configured accumulation zone and its membership tests.
//! - `signal` — the evaluation outcome and its printed form.
pub mod quote;
pub mod signal;
pub mod zone;
