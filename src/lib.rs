//! tmux-pomodoro - A pomodoro countdown for the tmux status line
//!
//! This library counts a work or break session down once per second and
//! keeps the remaining time in a small file that a status line can read,
//! with optional commands run before and after the session.

pub mod config;
pub mod error;
pub mod runner;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::{Cli, Config, Session};
pub use error::{ConfigError, HookError, HookStage, RunError};
pub use runner::Runner;
pub use state::Span;
pub use utils::signals::shutdown_signal;
