//! Small animation helpers, all pure functions of elapsed time

use std::time::Duration;

/// Cubic ease-out on `t` in `[0, 1]`
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// A delayed, fixed-length transition
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    pub delay: Duration,
    pub duration: Duration,
}

impl Tween {
    pub const fn new(duration: Duration) -> Self {
        Tween {
            delay: Duration::ZERO,
            duration,
        }
    }

    pub const fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Linear progress in `[0, 1]`
    pub fn linear(&self, elapsed: Duration) -> f64 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (active.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn eased(&self, elapsed: Duration) -> f64 {
        ease_out(self.linear(elapsed))
    }

    pub fn started(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay
    }

    pub fn finished(&self, elapsed: Duration) -> bool {
        self.linear(elapsed) >= 1.0
    }
}

/// Triangle wave over `period`: 0 -> 1 -> 0
pub fn ping_pong(elapsed: Duration, period: Duration) -> f64 {
    if period.is_zero() {
        return 0.0;
    }
    let phase = (elapsed.as_secs_f64() / period.as_secs_f64()).fract();
    if phase < 0.5 {
        phase * 2.0
    } else {
        (1.0 - phase) * 2.0
    }
}

/// How many of `count` items a staggered reveal has shown after `elapsed`
pub fn staggered(elapsed: Duration, count: usize, step: Duration) -> usize {
    if step.is_zero() {
        return count;
    }
    let shown = (elapsed.as_secs_f64() / step.as_secs_f64()).floor() as usize + 1;
    shown.min(count)
}
