//! HTTP API for the stopwatch and world-clock service.
//!
//! Serves the static stopwatch page and provides the JSON endpoints for
//! the timer state machine and the timezone lookup.

mod clock;
mod error;
mod server;
mod state;
mod timer;

pub use server::start_http_server;
pub use state::ApiState;
