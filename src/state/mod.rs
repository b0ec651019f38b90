//! Countdown state
//!
//! Pure time arithmetic, kept apart from the I/O that publishes it.

pub mod span;

pub use span::Span;
