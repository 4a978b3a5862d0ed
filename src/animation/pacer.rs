//! Fixed-interval firing rules

use std::time::Duration;

/// Countdown and display refresh
pub const MAIN_INTERVAL: Duration = Duration::from_millis(1000);
/// One spinner step
pub const RING_STEP_INTERVAL: Duration = Duration::from_millis(250);
/// Border blink toggle, six per second
pub const BLINK_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 6);

/// Fires when at least `interval` has passed since it last fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    interval: Duration,
    last_fired_at: Duration,
}

impl Cadence {
    /// Create a cadence that counts its first interval from `now`
    pub fn new(interval: Duration, now: Duration) -> Self {
        Self { interval, last_fired_at: now }
    }

    /// Fire at most once; the next interval is measured from `now`
    pub fn poll(&mut self, now: Duration) -> bool {
        if now.saturating_sub(self.last_fired_at) < self.interval {
            return false;
        }
        self.last_fired_at = now;
        true
    }

    /// Restart the interval from `now` without firing
    pub fn reset(&mut self, now: Duration) {
        self.last_fired_at = now;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_fired_at(&self) -> Duration {
        self.last_fired_at
    }
}

/// Which always-running cadences fired on one poll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fired {
    pub ring: bool,
    pub main: bool,
}

/// The main (1 Hz) and ring (250 ms) cadences
///
/// The blink cadence belongs to [`FlashAnimation`](super::FlashAnimation)
/// because it restarts whenever a flash starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationPacer {
    pub main: Cadence,
    pub ring: Cadence,
}

impl AnimationPacer {
    pub fn new(now: Duration) -> Self {
        Self {
            main: Cadence::new(MAIN_INTERVAL, now),
            ring: Cadence::new(RING_STEP_INTERVAL, now),
        }
    }

    pub fn poll_ring(&mut self, now: Duration) -> bool {
        self.ring.poll(now)
    }

    pub fn poll_main(&mut self, now: Duration) -> bool {
        self.main.poll(now)
    }

    /// Poll both cadences at once
    pub fn poll(&mut self, now: Duration) -> Fired {
        Fired {
            ring: self.poll_ring(now),
            main: self.poll_main(now),
        }
    }
}
