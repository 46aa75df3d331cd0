//! Chat bar: a full-width bottom strip whose height snaps between a docked
//! bar and a tall overlay.

use std::time::Instant;

use crate::click_track::ClickTracker;
use crate::constants::{CHAT_MAXIMUM_HEIGHT, CHAT_RESTING_HEIGHT, CHAT_WIDTH};
use crate::geometry::{GeometryAxis, Length};

use super::{BorderEdge, PanelPhase, phase_for};

#[derive(Debug)]
pub struct ChatPanel {
    height: GeometryAxis,
    width: Length,
    clicks: ClickTracker<BorderEdge>,
    dragging: Option<BorderEdge>,
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self::new(CHAT_RESTING_HEIGHT, CHAT_MAXIMUM_HEIGHT)
    }
}

impl ChatPanel {
    pub fn new(resting_height: Length, max_height: Length) -> Self {
        Self {
            height: GeometryAxis::new(resting_height, max_height),
            width: CHAT_WIDTH,
            clicks: ClickTracker::new(),
            dragging: None,
        }
    }

    pub fn height(&self) -> &GeometryAxis {
        &self.height
    }

    /// The bar always spans its container; width is not a governed axis.
    pub fn width(&self) -> Length {
        self.width
    }

    pub fn is_expanded(&self) -> bool {
        self.height.is_expanded()
    }

    pub fn phase(&self) -> PanelPhase {
        phase_for(self.dragging.is_some(), self.is_expanded())
    }

    /// Border grab. Only one border is exposed for this panel, so a
    /// double-click on any edge toggles height; the same-target rule still
    /// applies to the classification itself.
    pub fn on_resize_start(&mut self, edge: BorderEdge, now: Instant) -> bool {
        if self.clicks.record_and_classify(edge, now) {
            self.dragging = None;
            self.height.toggle();
            tracing::debug!(%edge, height = %self.height.current(), "chat border double-click");
            true
        } else {
            self.dragging = Some(edge);
            false
        }
    }

    /// Commit the observed height. A width argument targets an axis this
    /// panel does not govern and is ignored.
    pub fn on_resize_stop(&mut self, _width: Option<Length>, height: Option<Length>) {
        self.dragging = None;
        if let Some(height) = height {
            self.height.set_current(height);
        }
    }

    pub fn toggle_maximize(&mut self) {
        self.height.toggle();
        tracing::debug!(height = %self.height.current(), "chat bar toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn double_click_expands_then_collapses() {
        let mut panel = ChatPanel::default();
        let t0 = Instant::now();
        panel.on_resize_start(BorderEdge::Bottom, t0);
        assert!(panel.on_resize_start(BorderEdge::Bottom, t0 + Duration::from_millis(150)));
        assert_eq!(panel.height().current(), CHAT_MAXIMUM_HEIGHT);
        // A third fast press pairs with the second and collapses again.
        assert!(panel.on_resize_start(BorderEdge::Bottom, t0 + Duration::from_millis(300)));
        assert_eq!(panel.height().current(), CHAT_RESTING_HEIGHT);
    }

    #[test]
    fn any_edge_toggles_but_targets_must_match() {
        let mut panel = ChatPanel::default();
        let t0 = Instant::now();
        panel.on_resize_start(BorderEdge::Top, t0);
        // Different border within the window: not a double-click.
        assert!(!panel.on_resize_start(BorderEdge::Bottom, t0 + Duration::from_millis(50)));
        assert_eq!(panel.height().current(), CHAT_RESTING_HEIGHT);
        // Same border again: classifies, and the edge itself needs no rule.
        assert!(panel.on_resize_start(BorderEdge::Bottom, t0 + Duration::from_millis(100)));
        assert_eq!(panel.height().current(), CHAT_MAXIMUM_HEIGHT);
    }

    #[test]
    fn freeform_commit_ignores_width() {
        let mut panel = ChatPanel::default();
        let t0 = Instant::now();
        panel.on_resize_start(BorderEdge::Bottom, t0);
        assert_eq!(panel.phase(), PanelPhase::Intermediate);
        panel.on_resize_stop(Some(Length::Percent(50)), Some(Length::Percent(73)));
        assert_eq!(panel.height().current(), Length::Percent(73));
        assert_eq!(panel.width(), CHAT_WIDTH);
        assert_eq!(panel.phase(), PanelPhase::Expanded);
    }

    #[test]
    fn drag_without_stop_stays_intermediate() {
        let mut panel = ChatPanel::default();
        panel.on_resize_start(BorderEdge::Bottom, Instant::now());
        assert_eq!(panel.phase(), PanelPhase::Intermediate);
    }

    #[test]
    fn toggle_maximize_is_an_involution() {
        let mut panel = ChatPanel::default();
        panel.toggle_maximize();
        assert!(panel.is_expanded());
        panel.toggle_maximize();
        assert_eq!(panel.height().current(), CHAT_RESTING_HEIGHT);
    }
}
