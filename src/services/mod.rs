//! External side effects
//!
//! The display file the status line reads and the hook commands around a
//! session.

pub mod display;
pub mod hooks;

// Re-export main functions
pub use display::{remove_display, render, write_display};
pub use hooks::run_hook;
