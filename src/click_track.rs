//! Double-click classification for borders and buttons.

use std::time::Instant;

use crate::constants::DOUBLE_CLICK_WINDOW;

/// Per-panel record of the last press on an interaction target.
///
/// The tracker never schedules anything; callers hand in the wall-clock
/// `Instant` read while handling the event, and the 300 ms window is
/// evaluated against that. A press delivered late (e.g. under load) is
/// classified by its delivery time, not by when the user pressed.
#[derive(Debug, Clone, Copy)]
pub struct ClickTracker<T> {
    last: Option<(T, Instant)>,
}

impl<T> Default for ClickTracker<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: Copy + Eq> ClickTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a press, then unconditionally overwrite the record with it.
    ///
    /// Returns `true` iff a prior press exists on the *same* target within
    /// [`DOUBLE_CLICK_WINDOW`]. The very first press on a fresh tracker is
    /// never a double-click; `None` is the "no prior press" sentinel, so
    /// there is no magic zero timestamp to collide with.
    pub fn record_and_classify(&mut self, target: T, now: Instant) -> bool {
        let double = matches!(
            self.last,
            Some((prev, at)) if prev == target && now.duration_since(at) <= DOUBLE_CLICK_WINDOW
        );
        self.last = Some((target, now));
        double
    }
}
