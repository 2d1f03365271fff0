//! Virtual-time timers
//!
//! Timers never read the clock. The owner advances them with the elapsed
//! duration of each frame, so tests can drive time directly and dropping the
//! owning view releases every timer it holds.

use std::time::Duration;

/// Repeating timer
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    carry: Duration,
    cancelled: bool,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Interval {
            period: period.max(Duration::from_millis(1)),
            carry: Duration::ZERO,
            cancelled: false,
        }
    }

    /// Advance by `dt` and return how many periods elapsed.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.cancelled {
            return 0;
        }
        self.carry += dt;
        let mut fired = 0;
        while self.carry >= self.period {
            self.carry -= self.period;
            fired += 1;
        }
        fired
    }

    /// Time left until the next fire, `None` once cancelled
    pub fn until_next(&self) -> Option<Duration> {
        if self.cancelled {
            None
        } else {
            Some(self.period - self.carry)
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_active(&self) -> bool {
        !self.cancelled
    }
}

/// One-shot timer
#[derive(Debug, Clone)]
pub struct Timeout {
    remaining: Duration,
    fired: bool,
}

impl Timeout {
    pub fn new(delay: Duration) -> Self {
        Timeout {
            remaining: delay,
            fired: false,
        }
    }

    /// Returns `true` on the single advance that crosses the deadline.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.fired {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(dt);
        if self.remaining.is_zero() {
            self.fired = true;
            return true;
        }
        false
    }
}

/// Rate limiter for bursty events (scroll)
///
/// `request` marks work as pending; `advance` reports it ready at most once
/// per `interval`. The first request after a quiet period is served on the
/// next advance.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    cooldown: Duration,
    pending: bool,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Throttle {
            interval,
            cooldown: Duration::ZERO,
            pending: false,
        }
    }

    pub fn request(&mut self) {
        self.pending = true;
    }

    pub fn advance(&mut self, dt: Duration) -> bool {
        self.cooldown = self.cooldown.saturating_sub(dt);
        if self.pending && self.cooldown.is_zero() {
            self.pending = false;
            self.cooldown = self.interval;
            return true;
        }
        false
    }
}
