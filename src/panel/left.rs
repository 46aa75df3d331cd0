//! Left side panel: opened and closed by a column of mutually exclusive
//! buttons, with a border double-click that snaps its width.

use std::fmt;
use std::time::Instant;

use crate::click_track::ClickTracker;
use crate::constants::{LEFT_MAXIMUM_WIDTH, LEFT_RESTING_WIDTH};
use crate::geometry::{GeometryAxis, Length};

use super::{BorderEdge, PanelPhase, phase_for};

/// The buttons on the left menu rail. Exactly one may be active, and the
/// active one decides which content the open panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftButton {
    Account,
    Alerts,
    Saved,
}

impl fmt::Display for LeftButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LeftButton::Account => "account",
            LeftButton::Alerts => "alerts",
            LeftButton::Saved => "saved",
        };
        f.write_str(s)
    }
}

#[derive(Debug)]
pub struct LeftPanel {
    width: GeometryAxis,
    active_button: Option<LeftButton>,
    open: bool,
    clicks: ClickTracker<BorderEdge>,
    dragging: Option<BorderEdge>,
}

impl Default for LeftPanel {
    fn default() -> Self {
        Self::new(LEFT_RESTING_WIDTH, LEFT_MAXIMUM_WIDTH)
    }
}

impl LeftPanel {
    pub fn new(resting_width: Length, max_width: Length) -> Self {
        Self {
            width: GeometryAxis::new(resting_width, max_width),
            active_button: None,
            open: false,
            clicks: ClickTracker::new(),
            dragging: None,
        }
    }

    pub fn width(&self) -> &GeometryAxis {
        &self.width
    }

    /// Whether the panel is showing at all. Driven by button selection,
    /// not by geometry.
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active_button(&self) -> Option<LeftButton> {
        self.active_button
    }

    pub fn phase(&self) -> PanelPhase {
        phase_for(self.dragging.is_some(), self.width.is_expanded())
    }

    /// A rail button press. Re-pressing the active button deselects it and
    /// closes the panel; any other button takes over the selection and
    /// opens it.
    pub fn on_button_click(&mut self, button: LeftButton) {
        if self.active_button == Some(button) {
            self.active_button = None;
            self.open = false;
        } else {
            self.active_button = Some(button);
            self.open = true;
        }
        tracing::debug!(%button, open = self.open, "left rail button");
    }

    /// Border grab. A double-click snaps width between its resting and
    /// maximum values regardless of whether the panel is open.
    pub fn on_resize_start(&mut self, edge: BorderEdge, now: Instant) -> bool {
        if self.clicks.record_and_classify(edge, now) {
            self.dragging = None;
            self.width.toggle();
            tracing::debug!(%edge, width = %self.width.current(), "left border double-click");
            true
        } else {
            self.dragging = Some(edge);
            false
        }
    }

    /// Commit the observed width. A height argument targets an axis this
    /// panel does not govern and is ignored.
    pub fn on_resize_stop(&mut self, width: Option<Length>, _height: Option<Length>) {
        self.dragging = None;
        if let Some(width) = width {
            self.width.set_current(width);
        }
    }

    pub fn toggle_maximize(&mut self) {
        self.width.toggle();
        tracing::debug!(width = %self.width.current(), "left panel width toggled");
    }
}
