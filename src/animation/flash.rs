//! Border flash shown when a phase times out

use std::time::Duration;

use super::pacer::{Cadence, BLINK_INTERVAL};

/// How long the border keeps blinking after a timeout
pub const FLASH_DURATION: Duration = Duration::from_millis(1600);

/// Color the border frame should take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderTone {
    Accent,
    Background,
}

/// Self-terminating border blink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashAnimation {
    active: bool,
    end_at: Duration,
    blink_on: bool,
    blink: Cadence,
}

impl FlashAnimation {
    /// Create an inactive flash
    pub fn new(now: Duration) -> Self {
        Self {
            active: false,
            end_at: now,
            blink_on: false,
            blink: Cadence::new(BLINK_INTERVAL, now),
        }
    }

    /// Begin blinking; restarting an active flash extends it
    pub fn start(&mut self, now: Duration) {
        self.active = true;
        self.end_at = now + FLASH_DURATION;
        self.blink_on = false;
        self.blink.reset(now);
    }

    /// Advance the flash and report the border color to paint, if it changed
    ///
    /// Expiry is checked after the blink toggle and wins over it.
    pub fn poll(&mut self, now: Duration) -> Option<BorderTone> {
        if !self.active {
            return None;
        }

        let mut tone = None;
        if self.blink.poll(now) {
            self.blink_on = !self.blink_on;
            tone = Some(if self.blink_on { BorderTone::Accent } else { BorderTone::Background });
        }

        if now >= self.end_at {
            self.active = false;
            self.blink_on = false;
            tone = Some(BorderTone::Background);
        }

        tone
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn blink_on(&self) -> bool {
        self.blink_on
    }

    pub fn end_at(&self) -> Duration {
        self.end_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn idle_flash_reports_nothing() {
        let mut flash = FlashAnimation::new(ms(0));
        assert!(!flash.is_active());
        assert_eq!(flash.poll(ms(5000)), None);
    }

    #[test]
    fn blinks_then_restores_background() {
        let start = ms(10_000);
        let mut flash = FlashAnimation::new(ms(0));
        flash.start(start);

        assert_eq!(flash.poll(start + ms(100)), None);
        assert_eq!(flash.poll(start + ms(167)), Some(BorderTone::Accent));
        assert_eq!(flash.poll(start + ms(334)), Some(BorderTone::Background));
        assert_eq!(flash.poll(start + ms(501)), Some(BorderTone::Accent));
        assert!(flash.is_active());

        assert_eq!(flash.poll(start + FLASH_DURATION), Some(BorderTone::Background));
        assert!(!flash.is_active());
        assert_eq!(flash.poll(start + ms(1700)), None);
    }

    #[test]
    fn active_strictly_inside_window() {
        let start = ms(3);
        let mut flash = FlashAnimation::new(ms(0));
        flash.start(start);
        for t in (4..1603).step_by(7) {
            flash.poll(ms(t));
            assert!(flash.is_active(), "inactive at {t}ms");
        }
        flash.poll(ms(1603));
        assert!(!flash.is_active());
    }

    #[test]
    fn late_poll_ends_even_when_blink_fires() {
        let mut flash = FlashAnimation::new(ms(0));
        flash.start(ms(0));
        assert_eq!(flash.poll(ms(5000)), Some(BorderTone::Background));
        assert!(!flash.is_active());
        assert!(!flash.blink_on());
    }

    #[test]
    fn restart_extends_deadline() {
        let mut flash = FlashAnimation::new(ms(0));
        flash.start(ms(0));
        flash.start(ms(1000));
        assert_eq!(flash.end_at(), ms(2600));
        flash.poll(ms(2000));
        assert!(flash.is_active());
    }
}
