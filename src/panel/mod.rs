//! Panel controllers.
//!
//! Each panel owns its geometry axes and the click-timing record for its
//! borders; the layout state in [`crate::state`] fans the three controllers
//! out behind one mutation surface. Panels never reach into one another.

pub mod chat;
pub mod home;
pub mod left;

pub use chat::ChatPanel;
pub use home::HomePanel;
pub use left::{LeftButton, LeftPanel};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A resizable border of a panel.
///
/// Border identifiers arrive from the host shell as strings; parsing them
/// into this closed set is the validation boundary. A valid edge a panel has
/// no snap rule for is a harmless miss, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BorderEdge {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown border edge {0:?}")]
pub struct ParseBorderEdgeError(String);

impl BorderEdge {
    pub const ALL: [BorderEdge; 8] = [
        BorderEdge::Top,
        BorderEdge::Bottom,
        BorderEdge::Left,
        BorderEdge::Right,
        BorderEdge::TopLeft,
        BorderEdge::TopRight,
        BorderEdge::BottomLeft,
        BorderEdge::BottomRight,
    ];

    fn as_str(self) -> &'static str {
        match self {
            BorderEdge::Top => "top",
            BorderEdge::Bottom => "bottom",
            BorderEdge::Left => "left",
            BorderEdge::Right => "right",
            BorderEdge::TopLeft => "topLeft",
            BorderEdge::TopRight => "topRight",
            BorderEdge::BottomLeft => "bottomLeft",
            BorderEdge::BottomRight => "bottomRight",
        }
    }
}

impl fmt::Display for BorderEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BorderEdge {
    type Err = ParseBorderEdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BorderEdge::ALL
            .into_iter()
            .find(|edge| edge.as_str() == s)
            .ok_or_else(|| ParseBorderEdgeError(s.to_string()))
    }
}

/// Where a panel sits in its resize lifecycle.
///
/// `Intermediate` is held only between a non-double-click resize start and
/// the matching stop; a drag that never receives its stop stays
/// `Intermediate` indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    Resting,
    Expanded,
    Intermediate,
}

pub(crate) fn phase_for(dragging: bool, expanded: bool) -> PanelPhase {
    if dragging {
        PanelPhase::Intermediate
    } else if expanded {
        PanelPhase::Expanded
    } else {
        PanelPhase::Resting
    }
}
