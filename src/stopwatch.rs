//! The stopwatch engine: a guarded two-state timer with lap accounting.
//!
//! Elapsed-time arithmetic runs entirely on the monotonic clock
//! (`tokio::time::Instant`), so wall-clock adjustments never distort
//! measurements. Wall-clock and timezone concerns live in [`crate::clock`];
//! the two modules deliberately share no time source.

use crate::error::{Error, Result};
use serde::Serialize;
use tokio::time::Instant;

/// Whether the stopwatch is counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Stopped,
    Running,
}

/// A checkpoint recorded while running.
///
/// `cumulative_ms` is the total elapsed time at the moment of recording;
/// `interval_ms` is the delta to the previous lap, or to the session start
/// for the first lap. Laps are immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lap {
    /// 1-based position in the lap sequence.
    pub index: u32,
    pub interval_ms: u64,
    pub cumulative_ms: u64,
}

/// Outcome of a successful start/stop/reset transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: TimerState,
    /// The elapsed value the transition reports (see [`Stopwatch::start`]
    /// for the start-after-stop reporting rule).
    pub elapsed_ms: u64,
}

/// Copy of the full timer state for inspection without mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub state: TimerState,
    pub elapsed_ms: u64,
    pub laps: Vec<Lap>,
}

/// The stopwatch state machine.
///
/// `started_at` doubles as the mode: `Some` is running, `None` is stopped,
/// so state and monotonic mark cannot drift apart. `accumulated_ms` holds
/// the time banked by prior stops and changes only on a running to stopped
/// transition. Laps are append-only; only [`Stopwatch::reset`] clears them.
#[derive(Debug, Default)]
pub struct Stopwatch {
    started_at: Option<Instant>,
    accumulated_ms: u64,
    laps: Vec<Lap>,
}

impl Stopwatch {
    /// A stopped stopwatch with zero elapsed time and no laps.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, derived from the running mark.
    pub fn state(&self) -> TimerState {
        if self.started_at.is_some() {
            TimerState::Running
        } else {
            TimerState::Stopped
        }
    }

    /// Current elapsed time in whole milliseconds (truncated, never rounded).
    ///
    /// While running this is the banked time plus the live segment; while
    /// stopped it is the banked time unchanged. Pure read, callable at any
    /// point between transitions.
    pub fn elapsed_ms(&self) -> u64 {
        match self.started_at {
            Some(mark) => self.accumulated_ms + mark.elapsed().as_millis() as u64,
            None => self.accumulated_ms,
        }
    }

    /// Transition from stopped to running, capturing a fresh monotonic mark.
    ///
    /// The reported `elapsed_ms` is always 0 at the instant of start, even
    /// when banked time exists from an earlier stop; subsequent reads resume
    /// from the banked baseline. Fails with [`Error::AlreadyRunning`] and no
    /// side effects if already running.
    pub fn start(&mut self) -> Result<Transition> {
        if self.started_at.is_some() {
            return Err(Error::AlreadyRunning);
        }
        self.started_at = Some(Instant::now());
        Ok(Transition {
            state: TimerState::Running,
            elapsed_ms: 0,
        })
    }

    /// Transition from running to stopped, banking the live segment.
    ///
    /// Reports the final banked total. Fails with [`Error::AlreadyStopped`]
    /// if already stopped.
    pub fn stop(&mut self) -> Result<Transition> {
        if self.started_at.is_none() {
            return Err(Error::AlreadyStopped);
        }
        self.accumulated_ms = self.elapsed_ms();
        self.started_at = None;
        Ok(Transition {
            state: TimerState::Stopped,
            elapsed_ms: self.accumulated_ms,
        })
    }

    /// Record a lap at the current elapsed time.
    ///
    /// Fails with [`Error::NotRunning`] unless running.
    pub fn lap(&mut self) -> Result<Lap> {
        if self.started_at.is_none() {
            return Err(Error::NotRunning);
        }
        let total = self.elapsed_ms();
        // Cumulative totals never decrease: the only rollback is reset,
        // which requires the stopped state and clears the laps with it.
        let interval = match self.laps.last() {
            Some(last) => total - last.cumulative_ms,
            None => total,
        };
        let lap = Lap {
            index: self.laps.len() as u32 + 1,
            interval_ms: interval,
            cumulative_ms: total,
        };
        self.laps.push(lap);
        Ok(lap)
    }

    /// Clear banked time and laps, returning to the initial state.
    ///
    /// Only valid while stopped; fails with
    /// [`Error::CannotResetWhileRunning`] otherwise.
    pub fn reset(&mut self) -> Result<Transition> {
        if self.started_at.is_some() {
            return Err(Error::CannotResetWhileRunning);
        }
        self.accumulated_ms = 0;
        self.laps.clear();
        Ok(Transition {
            state: TimerState::Stopped,
            elapsed_ms: 0,
        })
    }

    /// Snapshot of state, elapsed time, and a copy of the lap sequence.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state(),
            elapsed_ms: self.elapsed_ms(),
            laps: self.laps.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // All tests run on tokio's paused clock, so advances are exact and
    // every assertion can use equality instead of tolerances.
    async fn advance_ms(ms: u64) {
        tokio::time::advance(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_stopwatch_is_stopped_at_zero() {
        let sw = Stopwatch::new();
        let snapshot = sw.snapshot();
        assert_eq!(snapshot.state, TimerState::Stopped);
        assert_eq!(snapshot.elapsed_ms, 0);
        assert!(snapshot.laps.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_counts_only_while_running() {
        let mut sw = Stopwatch::new();
        sw.start().unwrap();
        advance_ms(100).await;
        assert_eq!(sw.elapsed_ms(), 100);

        sw.stop().unwrap();
        advance_ms(500).await;
        assert_eq!(sw.elapsed_ms(), 100);

        sw.start().unwrap();
        advance_ms(50).await;
        assert_eq!(sw.elapsed_ms(), 150);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_reports_zero_but_resumes_from_banked_time() {
        let mut sw = Stopwatch::new();
        sw.start().unwrap();
        advance_ms(100).await;
        let stopped = sw.stop().unwrap();
        assert_eq!(stopped.elapsed_ms, 100);

        // The restart response says 0 while the banked baseline stays live.
        let restarted = sw.start().unwrap();
        assert_eq!(restarted.state, TimerState::Running);
        assert_eq!(restarted.elapsed_ms, 0);
        assert_eq!(sw.elapsed_ms(), 100);

        advance_ms(50).await;
        assert_eq!(sw.elapsed_ms(), 150);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_while_running_fails_without_side_effects() {
        let mut sw = Stopwatch::new();
        sw.start().unwrap();
        advance_ms(40).await;
        sw.lap().unwrap();

        let before = sw.snapshot();
        assert_eq!(sw.start().unwrap_err(), Error::AlreadyRunning);
        assert_eq!(sw.snapshot(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_while_stopped_fails() {
        let mut sw = Stopwatch::new();
        assert_eq!(sw.stop().unwrap_err(), Error::AlreadyStopped);

        sw.start().unwrap();
        advance_ms(10).await;
        sw.stop().unwrap();
        assert_eq!(sw.stop().unwrap_err(), Error::AlreadyStopped);
        assert_eq!(sw.elapsed_ms(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_lap_requires_running() {
        let mut sw = Stopwatch::new();
        assert_eq!(sw.lap().unwrap_err(), Error::NotRunning);

        sw.start().unwrap();
        advance_ms(10).await;
        sw.stop().unwrap();
        assert_eq!(sw.lap().unwrap_err(), Error::NotRunning);
        assert!(sw.snapshot().laps.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_lap_records_interval_and_cumulative() {
        let mut sw = Stopwatch::new();
        sw.start().unwrap();

        advance_ms(120).await;
        let first = sw.lap().unwrap();
        assert_eq!(first.index, 1);
        assert_eq!(first.interval_ms, 120);
        assert_eq!(first.cumulative_ms, 120);

        advance_ms(80).await;
        let second = sw.lap().unwrap();
        assert_eq!(second.index, 2);
        assert_eq!(second.interval_ms, 80);
        assert_eq!(second.cumulative_ms, 200);

        // Back-to-back lap with no time passing.
        let third = sw.lap().unwrap();
        assert_eq!(third.index, 3);
        assert_eq!(third.interval_ms, 0);
        assert_eq!(third.cumulative_ms, 200);

        let laps = sw.snapshot().laps;
        assert_eq!(laps.len(), 3);
        for pair in laps.windows(2) {
            assert_eq!(
                pair[1].cumulative_ms,
                pair[0].cumulative_ms + pair[1].interval_ms
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_lap_chain_spans_stop_start_boundary() {
        let mut sw = Stopwatch::new();
        sw.start().unwrap();
        advance_ms(100).await;
        sw.lap().unwrap();
        sw.stop().unwrap();

        // Laps survive a stop; the next lap measures from the banked total.
        sw.start().unwrap();
        advance_ms(50).await;
        let lap = sw.lap().unwrap();
        assert_eq!(lap.index, 2);
        assert_eq!(lap.interval_ms, 50);
        assert_eq!(lap.cumulative_ms, 150);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_clears_banked_time_and_laps() {
        let mut sw = Stopwatch::new();
        sw.start().unwrap();
        advance_ms(75).await;
        sw.lap().unwrap();
        sw.stop().unwrap();

        let transition = sw.reset().unwrap();
        assert_eq!(transition.state, TimerState::Stopped);
        assert_eq!(transition.elapsed_ms, 0);

        let snapshot = sw.snapshot();
        assert_eq!(snapshot.state, TimerState::Stopped);
        assert_eq!(snapshot.elapsed_ms, 0);
        assert!(snapshot.laps.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_while_running_fails() {
        let mut sw = Stopwatch::new();
        sw.start().unwrap();
        advance_ms(30).await;
        sw.lap().unwrap();

        assert_eq!(sw.reset().unwrap_err(), Error::CannotResetWhileRunning);
        assert_eq!(sw.state(), TimerState::Running);
        assert_eq!(sw.elapsed_ms(), 30);
        assert_eq!(sw.snapshot().laps.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reads_are_idempotent_and_non_decreasing() {
        let mut sw = Stopwatch::new();
        sw.start().unwrap();
        advance_ms(10).await;

        let first = sw.elapsed_ms();
        let second = sw.elapsed_ms();
        assert!(second >= first);
        assert_eq!(sw.snapshot(), sw.snapshot());
    }

    #[tokio::test(start_paused = true)]
    async fn test_snapshot_is_isolated_from_later_mutation() {
        let mut sw = Stopwatch::new();
        sw.start().unwrap();
        advance_ms(20).await;
        sw.lap().unwrap();

        let snapshot = sw.snapshot();
        sw.lap().unwrap();
        assert_eq!(snapshot.laps.len(), 1);
        assert_eq!(sw.snapshot().laps.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_start_stop_is_non_negative() {
        let mut sw = Stopwatch::new();
        sw.start().unwrap();
        let stopped = sw.stop().unwrap();
        assert_eq!(stopped.elapsed_ms, 0);
    }
}
