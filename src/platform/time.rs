//! Tick pacing
//!
//! A coarse fixed-rate limiter: block until one period has passed since the
//! previous tick. Game speed depends only on the configured rate.

use std::thread;
use std::time::{Duration, Instant};

/// Pacing collaborator
pub trait Pacer {
    /// Block until the next tick is due
    fn wait_next_tick(&mut self);
}

/// Sleeps so that ticks happen at most `ticks_per_second` times a second
#[derive(Debug, Clone)]
pub struct FixedRateClock {
    period: Duration,
    last_tick: Option<Instant>,
}

impl FixedRateClock {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / ticks_per_second.max(1),
            last_tick: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Pacer for FixedRateClock {
    fn wait_next_tick(&mut self) {
        if let Some(last) = self.last_tick {
            let due = last + self.period;
            let now = Instant::now();
            if due > now {
                thread::sleep(due - now);
            }
        }
        self.last_tick = Some(Instant::now());
    }
}

/// Never waits (headless runs and tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct Unpaced;

impl Pacer for Unpaced {
    fn wait_next_tick(&mut self) {}
}
