//! Background tasks module
//!
//! This module contains the tasks the host binary runs next to the status API.

pub mod display_loop;

// Re-export main functions
pub use display_loop::display_loop_task;
