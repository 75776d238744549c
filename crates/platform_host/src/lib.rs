//! Host-environment helpers for the portfolio desktop.
//!
//! Wall-clock and viewport queries live here so the headless console and window-frame crates
//! never touch browser APIs directly.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod time;
pub mod viewport;

pub use time::{local_clock_time_now, unix_time_ms_now, ClockTime};
pub use viewport::{
    read_viewport_metrics, ViewportMetrics, FALLBACK_VIEWPORT_HEIGHT, FALLBACK_VIEWPORT_WIDTH,
};
