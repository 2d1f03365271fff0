//! Loading screen state: a simulated progress bar

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::timer::{Interval, Timeout};

/// Supplies the increment added on each progress tick
pub trait ProgressSource {
    fn next_increment(&mut self) -> f64;
}

impl<F: FnMut() -> f64> ProgressSource for F {
    fn next_increment(&mut self) -> f64 {
        self()
    }
}

/// Uniform increments in `[0, max_step)`
pub struct RandomSteps {
    rng: StdRng,
    max_step: f64,
}

impl RandomSteps {
    pub fn new(max_step: f64) -> Self {
        RandomSteps {
            rng: StdRng::from_os_rng(),
            max_step,
        }
    }

    pub fn seeded(max_step: f64, seed: u64) -> Self {
        RandomSteps {
            rng: StdRng::seed_from_u64(seed),
            max_step,
        }
    }
}

impl ProgressSource for RandomSteps {
    fn next_increment(&mut self) -> f64 {
        if self.max_step <= 0.0 {
            return 0.0;
        }
        self.rng.random_range(0.0..self.max_step)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingEvent {
    Complete,
}

pub struct LoadingView {
    progress: f64,
    ticker: Interval,
    completion_delay: Duration,
    completion: Option<Timeout>,
    completed: bool,
    elapsed: Duration,
    source: Box<dyn ProgressSource>,
}

impl LoadingView {
    pub const FULL: f64 = 100.0;

    pub fn new(tick: Duration, completion_delay: Duration, source: Box<dyn ProgressSource>) -> Self {
        LoadingView {
            progress: 0.0,
            ticker: Interval::new(tick),
            completion_delay,
            completion: None,
            completed: false,
            elapsed: Duration::ZERO,
            source,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Progress as displayed: rounded to the nearest integer
    pub fn percent(&self) -> u8 {
        self.progress.round().clamp(0.0, Self::FULL) as u8
    }

    /// Time since mount, for the fade-in
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_active()
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Advance timers by `dt`. Ticks are applied in order, and the completion
    /// delay only counts time after the tick that reached 100.
    pub fn advance(&mut self, dt: Duration) -> Option<LoadingEvent> {
        self.elapsed += dt;
        if self.completed {
            return None;
        }

        let mut left = dt;
        loop {
            if let Some(timeout) = self.completion.as_mut() {
                if timeout.advance(left) {
                    self.completion = None;
                    self.completed = true;
                    debug!("loading complete");
                    return Some(LoadingEvent::Complete);
                }
                return None;
            }

            let Some(until_next) = self.ticker.until_next() else {
                return None;
            };
            if left < until_next {
                self.ticker.advance(left);
                return None;
            }
            self.ticker.advance(until_next);
            left -= until_next;
            self.tick();
        }
    }

    fn tick(&mut self) {
        let step = self.source.next_increment().max(0.0);
        let next = self.progress + step;
        if next >= Self::FULL {
            self.progress = Self::FULL;
            self.ticker.cancel();
            self.completion = Some(Timeout::new(self.completion_delay));
        } else {
            self.progress = next;
        }
    }
}
