//! Remaining countdown time

use std::fmt;

/// Remaining time of a countdown, decomposed into minutes and seconds
///
/// A `Span` never changes once built: [`Span::tick`] hands back a new value.
/// `rest_seconds` may drop below zero, which marks the countdown as expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Seconds the span was created with
    pub total_seconds: i64,
    pub rest_seconds: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Span {
    /// Create a span with `total_seconds` left on the clock
    pub fn new(total_seconds: i64) -> Self {
        Self {
            total_seconds,
            rest_seconds: total_seconds,
            minutes: total_seconds / 60,
            seconds: total_seconds % 60,
        }
    }

    /// Create a span for a session of `minutes` minutes
    pub fn from_minutes(minutes: u32) -> Self {
        Self::new(i64::from(minutes) * 60)
    }

    /// The span one second later
    pub fn tick(&self) -> Self {
        Self::new(self.rest_seconds - 1)
    }

    /// Whether the countdown has run past zero
    pub fn is_expired(&self) -> bool {
        self.rest_seconds < 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}
