//! Utility functions module
//!
//! Process level concerns: signal registration and background mode.

pub mod daemon;
pub mod signals;

// Re-export main functions
pub use daemon::spawn_detached;
pub use signals::shutdown_signal;
