//! Everything between timer state and surface commands
//!
//! - [`layout`] fixed geometry of the 64x64 canvas
//! - [`palette`] fixed colors
//! - [`projector`] pure state-to-value functions
//! - [`scene`] the surface elements and the code that paints them

pub mod layout;
pub mod palette;
pub mod projector;
pub mod scene;

pub use projector::{SweepMove, SweepTicker};
pub use scene::Scene;
