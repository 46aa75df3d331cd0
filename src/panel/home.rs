//! Home launcher panel: a docked square that can expand either axis alone
//! or both together.

use std::time::Instant;

use crate::click_track::ClickTracker;
use crate::constants::{HOME_MAXIMUM, HOME_RESTING};
use crate::geometry::{GeometryAxis, Length};

use super::{BorderEdge, PanelPhase, phase_for};

#[derive(Debug)]
pub struct HomePanel {
    width: GeometryAxis,
    height: GeometryAxis,
    clicks: ClickTracker<BorderEdge>,
    dragging: Option<BorderEdge>,
}

impl Default for HomePanel {
    fn default() -> Self {
        Self::new(HOME_RESTING, HOME_RESTING, HOME_MAXIMUM, HOME_MAXIMUM)
    }
}

impl HomePanel {
    pub fn new(
        resting_width: Length,
        resting_height: Length,
        max_width: Length,
        max_height: Length,
    ) -> Self {
        Self {
            width: GeometryAxis::new(resting_width, max_width),
            height: GeometryAxis::new(resting_height, max_height),
            clicks: ClickTracker::new(),
            dragging: None,
        }
    }

    pub fn width(&self) -> &GeometryAxis {
        &self.width
    }

    pub fn height(&self) -> &GeometryAxis {
        &self.height
    }

    pub fn is_expanded(&self) -> bool {
        self.width.is_expanded() || self.height.is_expanded()
    }

    pub fn phase(&self) -> PanelPhase {
        phase_for(self.dragging.is_some(), self.is_expanded())
    }

    /// Border grab. A double-click snaps the governed axis; a single click
    /// begins a freeform drag whose size is only committed on
    /// [`on_resize_stop`](Self::on_resize_stop). Returns whether the press
    /// classified as a double-click.
    pub fn on_resize_start(&mut self, edge: BorderEdge, now: Instant) -> bool {
        if self.clicks.record_and_classify(edge, now) {
            // The snap supersedes the drag the first press started.
            self.dragging = None;
            self.apply_double_click(edge);
            true
        } else {
            self.dragging = Some(edge);
            false
        }
    }

    /// Commit whatever size the drag produced.
    pub fn on_resize_stop(&mut self, width: Option<Length>, height: Option<Length>) {
        self.dragging = None;
        if let Some(width) = width {
            self.width.set_current(width);
        }
        if let Some(height) = height {
            self.height.set_current(height);
        }
    }

    /// Launcher button: fully expand from a fully docked panel, otherwise
    /// return both axes to rest.
    pub fn toggle_maximize(&mut self) {
        if self.width.is_resting() && self.height.is_resting() {
            self.width.snap_maximum();
            self.height.snap_maximum();
        } else {
            self.width.snap_resting();
            self.height.snap_resting();
        }
        tracing::debug!(
            width = %self.width.current(),
            height = %self.height.current(),
            "home launcher toggled"
        );
    }

    fn apply_double_click(&mut self, edge: BorderEdge) {
        match edge {
            BorderEdge::Right => self.width.toggle(),
            BorderEdge::Bottom => self.height.toggle(),
            // The joint snap only expands from a fully docked panel; a
            // mixed state collapses both axes instead of expanding the
            // remaining one.
            BorderEdge::BottomRight => self.toggle_maximize(),
            _ => return,
        }
        tracing::debug!(
            %edge,
            width = %self.width.current(),
            height = %self.height.current(),
            "home border double-click"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fast_double(panel: &mut HomePanel, edge: BorderEdge, t0: Instant) -> bool {
        panel.on_resize_start(edge, t0);
        panel.on_resize_start(edge, t0 + Duration::from_millis(150))
    }

    #[test]
    fn right_border_double_click_toggles_width_only() {
        let mut panel = HomePanel::default();
        let t0 = Instant::now();
        assert!(fast_double(&mut panel, BorderEdge::Right, t0));
        assert_eq!(panel.width().current(), HOME_MAXIMUM);
        assert_eq!(panel.height().current(), HOME_RESTING);
    }

    #[test]
    fn bottom_border_double_click_toggles_height_only() {
        let mut panel = HomePanel::default();
        let t0 = Instant::now();
        assert!(fast_double(&mut panel, BorderEdge::Bottom, t0));
        assert_eq!(panel.width().current(), HOME_RESTING);
        assert_eq!(panel.height().current(), HOME_MAXIMUM);
    }

    #[test]
    fn bottom_right_double_click_expands_both_from_rest() {
        let mut panel = HomePanel::default();
        let t0 = Instant::now();
        assert!(fast_double(&mut panel, BorderEdge::BottomRight, t0));
        assert_eq!(panel.width().current(), HOME_MAXIMUM);
        assert_eq!(panel.height().current(), HOME_MAXIMUM);
    }

    #[test]
    fn bottom_right_double_click_collapses_a_mixed_state() {
        // One axis expanded, one docked: the joint snap collapses both
        // rather than expanding the remaining axis.
        let mut panel = HomePanel::default();
        let t0 = Instant::now();
        fast_double(&mut panel, BorderEdge::Right, t0);
        assert!(panel.width().is_expanded());
        assert!(!panel.height().is_expanded());

        let t1 = t0 + Duration::from_secs(10);
        assert!(fast_double(&mut panel, BorderEdge::BottomRight, t1));
        assert_eq!(panel.width().current(), HOME_RESTING);
        assert_eq!(panel.height().current(), HOME_RESTING);
    }

    #[test]
    fn corner_edges_without_a_rule_never_snap() {
        let mut panel = HomePanel::default();
        let t0 = Instant::now();
        assert!(fast_double(&mut panel, BorderEdge::TopLeft, t0));
        assert_eq!(panel.width().current(), HOME_RESTING);
        assert_eq!(panel.height().current(), HOME_RESTING);
    }

    #[test]
    fn launcher_toggle_is_an_involution() {
        let mut panel = HomePanel::default();
        panel.toggle_maximize();
        assert!(panel.is_expanded());
        panel.toggle_maximize();
        assert!(!panel.is_expanded());
        assert_eq!(panel.width().current(), HOME_RESTING);
        assert_eq!(panel.height().current(), HOME_RESTING);
    }

    #[test]
    fn slow_clicks_do_not_snap() {
        let mut panel = HomePanel::default();
        let t0 = Instant::now();
        panel.on_resize_start(BorderEdge::Right, t0);
        assert!(!panel.on_resize_start(BorderEdge::Right, t0 + Duration::from_millis(400)));
        assert_eq!(panel.width().current(), HOME_RESTING);
    }

    #[test]
    fn resize_stop_commits_both_axes() {
        let mut panel = HomePanel::default();
        let t0 = Instant::now();
        panel.on_resize_start(BorderEdge::BottomRight, t0);
        assert_eq!(panel.phase(), PanelPhase::Intermediate);
        panel.on_resize_stop(Some(Length::Px(120)), Some(Length::Px(90)));
        assert_eq!(panel.width().current(), Length::Px(120));
        assert_eq!(panel.height().current(), Length::Px(90));
        assert_eq!(panel.phase(), PanelPhase::Expanded);
    }
}
