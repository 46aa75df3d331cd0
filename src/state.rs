//! Session-scoped layout state shared by every view.
//!
//! [`LayoutState`] aggregates the three panel controllers behind one
//! mutation surface. It performs no layout logic of its own: every mutator
//! routes to exactly one controller, applies synchronously, and bumps a
//! revision counter so views know when to re-read. There is a single
//! writer (the thread dispatching UI events), so no locking is involved.

use std::time::Instant;

use crate::constants::MAIN_HEIGHT;
use crate::geometry::Length;
use crate::panel::{BorderEdge, ChatPanel, HomePanel, LeftButton, LeftPanel};

/// Read-only copy of one geometry axis for view consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSnapshot {
    pub current: Length,
    pub resting: Length,
    pub maximum: Length,
    pub expanded: bool,
}

impl AxisSnapshot {
    fn of(axis: &crate::geometry::GeometryAxis) -> Self {
        Self {
            current: axis.current(),
            resting: axis.resting(),
            maximum: axis.maximum(),
            expanded: axis.is_expanded(),
        }
    }
}

/// Plain-data view of the whole layout at one revision.
///
/// Views hold the last snapshot they rendered and re-render when the
/// revision moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSnapshot {
    pub revision: u64,
    pub main_height: Length,
    pub home_width: AxisSnapshot,
    pub home_height: AxisSnapshot,
    pub home_expanded: bool,
    pub chat_height: AxisSnapshot,
    pub chat_width: Length,
    pub chat_expanded: bool,
    pub left_width: AxisSnapshot,
    pub left_open: bool,
    pub left_active_button: Option<LeftButton>,
}

/// The aggregate of the three panels plus their borrowed surface handles.
///
/// `S` is the host shell's draggable-surface handle type. Handles are
/// supplied once at mount, stored, and handed back on request; the layout
/// never looks inside one and never tears one down.
#[derive(Debug)]
pub struct LayoutState<S = ()> {
    home: HomePanel,
    left: LeftPanel,
    chat: ChatPanel,
    main_height: Length,
    home_surface: Option<S>,
    left_surface: Option<S>,
    chat_surface: Option<S>,
    revision: u64,
}

impl<S> Default for LayoutState<S> {
    fn default() -> Self {
        Self::new(
            HomePanel::default(),
            LeftPanel::default(),
            ChatPanel::default(),
        )
    }
}

impl<S> LayoutState<S> {
    pub fn new(home: HomePanel, left: LeftPanel, chat: ChatPanel) -> Self {
        Self {
            home,
            left,
            chat,
            main_height: MAIN_HEIGHT,
            home_surface: None,
            left_surface: None,
            chat_surface: None,
            revision: 0,
        }
    }

    /// Bumped on every mutation; reads on the same thread always observe
    /// the latest write.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touched(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn home(&self) -> &HomePanel {
        &self.home
    }

    pub fn left(&self) -> &LeftPanel {
        &self.left
    }

    pub fn chat(&self) -> &ChatPanel {
        &self.chat
    }

    pub fn main_height(&self) -> Length {
        self.main_height
    }

    pub fn set_main_height(&mut self, height: Length) {
        self.main_height = height;
        self.touched();
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            revision: self.revision,
            main_height: self.main_height,
            home_width: AxisSnapshot::of(self.home.width()),
            home_height: AxisSnapshot::of(self.home.height()),
            home_expanded: self.home.is_expanded(),
            chat_height: AxisSnapshot::of(self.chat.height()),
            chat_width: self.chat.width(),
            chat_expanded: self.chat.is_expanded(),
            left_width: AxisSnapshot::of(self.left.width()),
            left_open: self.left.is_open(),
            left_active_button: self.left.active_button(),
        }
    }

    // Home launcher

    pub fn home_resize_start(&mut self, edge: BorderEdge, now: Instant) -> bool {
        let double = self.home.on_resize_start(edge, now);
        self.touched();
        double
    }

    pub fn home_resize_stop(&mut self, width: Option<Length>, height: Option<Length>) {
        self.home.on_resize_stop(width, height);
        self.touched();
    }

    pub fn home_toggle(&mut self) {
        self.home.toggle_maximize();
        self.touched();
    }

    // Chat bar

    pub fn chat_resize_start(&mut self, edge: BorderEdge, now: Instant) -> bool {
        let double = self.chat.on_resize_start(edge, now);
        self.touched();
        double
    }

    pub fn chat_resize_stop(&mut self, width: Option<Length>, height: Option<Length>) {
        self.chat.on_resize_stop(width, height);
        self.touched();
    }

    pub fn chat_toggle(&mut self) {
        self.chat.toggle_maximize();
        self.touched();
    }

    // Left rail and side panel

    pub fn left_resize_start(&mut self, edge: BorderEdge, now: Instant) -> bool {
        let double = self.left.on_resize_start(edge, now);
        self.touched();
        double
    }

    pub fn left_resize_stop(&mut self, width: Option<Length>, height: Option<Length>) {
        self.left.on_resize_stop(width, height);
        self.touched();
    }

    pub fn left_toggle(&mut self) {
        self.left.toggle_maximize();
        self.touched();
    }

    pub fn left_account_click(&mut self) {
        self.left.on_button_click(LeftButton::Account);
        self.touched();
    }

    pub fn left_alerts_click(&mut self) {
        self.left.on_button_click(LeftButton::Alerts);
        self.touched();
    }

    pub fn left_saved_click(&mut self) {
        self.left.on_button_click(LeftButton::Saved);
        self.touched();
    }

    // Borrowed surface handles

    pub fn attach_home_surface(&mut self, surface: S) {
        self.home_surface = Some(surface);
    }

    pub fn attach_left_surface(&mut self, surface: S) {
        self.left_surface = Some(surface);
    }

    pub fn attach_chat_surface(&mut self, surface: S) {
        self.chat_surface = Some(surface);
    }

    pub fn home_surface(&self) -> Option<&S> {
        self.home_surface.as_ref()
    }

    pub fn left_surface(&self) -> Option<&S> {
        self.left_surface.as_ref()
    }

    pub fn chat_surface(&self) -> Option<&S> {
        self.chat_surface.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CHAT_MAXIMUM_HEIGHT, CHAT_RESTING_HEIGHT};
    use std::time::Duration;

    #[test]
    fn every_mutation_moves_the_revision() {
        let mut layout: LayoutState = LayoutState::default();
        let mut last = layout.revision();
        let t0 = Instant::now();

        layout.home_resize_start(BorderEdge::Right, t0);
        assert_ne!(layout.revision(), last);
        last = layout.revision();

        layout.chat_resize_stop(None, Some(Length::Px(48)));
        assert_ne!(layout.revision(), last);
        last = layout.revision();

        layout.left_account_click();
        assert_ne!(layout.revision(), last);
    }

    #[test]
    fn snapshot_reflects_a_write_immediately() {
        let mut layout: LayoutState = LayoutState::default();
        let t0 = Instant::now();
        layout.chat_resize_start(BorderEdge::Bottom, t0);
        layout.chat_resize_start(BorderEdge::Bottom, t0 + Duration::from_millis(150));
        let snap = layout.snapshot();
        assert_eq!(snap.chat_height.current, CHAT_MAXIMUM_HEIGHT);
        assert!(snap.chat_expanded);
        assert_eq!(snap.chat_height.resting, CHAT_RESTING_HEIGHT);
    }

    #[test]
    fn snapshots_compare_equal_until_something_changes() {
        let mut layout: LayoutState = LayoutState::default();
        let before = layout.snapshot();
        assert_eq!(before, layout.snapshot());
        layout.home_toggle();
        assert_ne!(before, layout.snapshot());
    }

    #[test]
    fn surfaces_are_stored_and_handed_back_untouched() {
        let mut layout: LayoutState<&'static str> = LayoutState::default();
        assert!(layout.home_surface().is_none());
        layout.attach_home_surface("home-rnd");
        layout.attach_chat_surface("chat-rnd");
        assert_eq!(layout.home_surface(), Some(&"home-rnd"));
        assert_eq!(layout.chat_surface(), Some(&"chat-rnd"));
        assert!(layout.left_surface().is_none());
    }
}
