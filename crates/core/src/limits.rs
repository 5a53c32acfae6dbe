//! Search limits and the deadline mechanism.
//!
//! The rules engine is synchronous; the search is the one operation meant to
//! run off the interactive path. `TimeControl` gives the caller a deadline
//! and a cancel switch; hitting the deadline degrades the search result to
//! best-so-far rather than being an error.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// What bounds a search: a depth cap, optionally a per-move time budget.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies.
    pub depth: u8,
    /// Time budget for this move (None = unbounded).
    pub move_time: Option<Duration>,
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Depth cap only.
    pub fn depth(depth: u8) -> SearchLimits {
        SearchLimits {
            depth,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    /// Depth cap plus a time budget.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> SearchLimits {
        SearchLimits {
            depth,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Time budget only.
    pub fn time(move_time: Duration) -> SearchLimits {
        SearchLimits::depth_and_time(u8::MAX, move_time)
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time_control.is_stopped()
    }

    /// Arm the clock. Call when search begins.
    pub fn start(&self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits::depth(4)
    }
}

/// Cheaply cloneable, thread-safe deadline. The stop flag is an atomic so
/// `is_stopped` can be polled every node; the actual clock comparison runs
/// only every `check_interval` nodes.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    deadline: Arc<Mutex<Option<Instant>>>,
    budget: Option<Duration>,
    check_interval: u64,
}

impl TimeControl {
    pub fn new(budget: Option<Duration>) -> TimeControl {
        TimeControl {
            stopped: Arc::new(AtomicBool::new(false)),
            deadline: Arc::new(Mutex::new(None)),
            budget,
            check_interval: 1024,
        }
    }

    /// Arm the deadline and clear any previous stop.
    pub fn start(&self) {
        *self.deadline.lock().unwrap() = self.budget.map(|b| Instant::now() + b);
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Cancel the search immediately.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Compare against the deadline, latching the stop flag on expiry.
    /// Returns true when the search should stop.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }
        if let Some(deadline) = *self.deadline.lock().unwrap()
            && Instant::now() >= deadline
        {
            self.stop();
            return true;
        }
        false
    }

    /// True every `check_interval` nodes; gates the cost of `check_time`.
    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes % self.check_interval == 0
    }

    /// Time left before the deadline (None when unbounded or not started).
    pub fn remaining(&self) -> Option<Duration> {
        let deadline = (*self.deadline.lock().unwrap())?;
        Some(deadline.saturating_duration_since(Instant::now()))
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        TimeControl::new(None)
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod limits_tests;
