//! lapwatch: a minimal stopwatch and world-clock HTTP service.
//!
//! The core is the stopwatch engine, a guarded two-state timer with
//! monotonic elapsed accounting and lap records, exposed over a small JSON
//! API together with an allow-listed timezone lookup.

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod stopwatch;
