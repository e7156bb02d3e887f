//! Time source for generated ids and timestamps.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, TimeZone, Utc};

/// Source of "now" for the store.
///
/// `tick` must never return the same value twice on one clock, since the
/// store derives order, user, product and transaction ids from it.
pub trait Clock: Send + Sync {
    /// Next unique millisecond tick.
    fn tick(&self) -> i64;

    /// Timestamp for a tick returned by [`Clock::tick`].
    fn at(&self, tick: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(tick)
            .single()
            .unwrap_or_else(Utc::now)
    }
}

/// Wall clock, bumped by one millisecond when two ticks land together.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: AtomicI64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn tick(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.load(Ordering::SeqCst);
        loop {
            let next = now.max(last + 1);
            match self
                .last
                .compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return next,
                Err(actual) => last = actual,
            }
        }
    }
}

/// Deterministic clock for tests: starts at a fixed tick, advances by one.
#[derive(Debug)]
pub struct ManualClock {
    next: AtomicI64,
}

impl ManualClock {
    pub fn starting_at(tick: i64) -> Self {
        Self {
            next: AtomicI64::new(tick),
        }
    }
}

impl Clock for ManualClock {
    fn tick(&self) -> i64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}
