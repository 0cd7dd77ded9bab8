//! Shared state for the HTTP API.

use crate::stopwatch::Stopwatch;
use tokio::sync::Mutex;

/// State shared across all API handlers.
///
/// The single stopwatch instance lives behind a mutex so every engine
/// operation is atomic with respect to the others and to snapshot reads.
/// Engine operations are synchronous and O(1); handlers never await while
/// holding the lock.
pub struct ApiState {
    pub stopwatch: Mutex<Stopwatch>,
}

impl ApiState {
    pub fn new() -> Self {
        Self {
            stopwatch: Mutex::new(Stopwatch::new()),
        }
    }
}
