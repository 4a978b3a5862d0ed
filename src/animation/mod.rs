//! Independently paced animations
//!
//! Each animation owns a [`Cadence`] and is evaluated on every poll. A
//! cadence fires at most once per poll and never catches up on missed
//! intervals.

pub mod flash;
pub mod pacer;
pub mod ring;

pub use flash::{BorderTone, FlashAnimation, FLASH_DURATION};
pub use pacer::{AnimationPacer, Cadence, BLINK_INTERVAL, MAIN_INTERVAL, RING_STEP_INTERVAL};
pub use ring::{RingPath, RingSpinner};
