//! Background tasks module
//!
//! This module contains the tasks that run alongside the countdown loop.

pub mod display_writer;
pub mod ticker;

// Re-export main functions
pub use display_writer::spawn_display_writer;
pub use ticker::spawn_ticker;
