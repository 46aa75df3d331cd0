//! Rotating one-line notification for the chat bar.

use std::time::{Duration, Instant};

use crate::constants::NOTIFICATION_ROTATE_INTERVAL;

/// Cycles through a fixed message list on a wall-clock interval.
///
/// The component is driven, not self-timed: the host calls
/// [`tick`](Self::tick) from its idle loop with the current time and a
/// pause flag. While the chat bar is expanded the host passes
/// `paused = true` and the displayed message holds still.
#[derive(Debug)]
pub struct RotatingNotification {
    messages: Vec<String>,
    interval: Duration,
    index: usize,
    last_rotated: Option<Instant>,
}

impl RotatingNotification {
    pub fn new(messages: Vec<String>) -> Self {
        Self::with_interval(messages, NOTIFICATION_ROTATE_INTERVAL)
    }

    pub fn with_interval(messages: Vec<String>, interval: Duration) -> Self {
        Self {
            messages,
            interval,
            index: 0,
            last_rotated: None,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.messages.get(self.index).map(String::as_str)
    }

    /// Advance to the next message when the interval has elapsed.
    ///
    /// Returns `true` when the displayed message changed. A single message
    /// never rotates. Pausing does not reset the clock; rotation resumes
    /// from wherever the interval left off.
    pub fn tick(&mut self, now: Instant, paused: bool) -> bool {
        if paused || self.messages.len() <= 1 {
            return false;
        }
        let due = match self.last_rotated {
            None => {
                // First tick arms the clock without rotating.
                self.last_rotated = Some(now);
                return false;
            }
            Some(at) => now.duration_since(at) >= self.interval,
        };
        if due {
            self.index = (self.index + 1) % self.messages.len();
            self.last_rotated = Some(now);
        }
        due
    }
}
