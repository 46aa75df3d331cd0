//! Adaptive docking-panel layout engine.
//!
//! Three panels — a home launcher, a left side panel, and a bottom chat
//! bar — each track a docked ("resting") and an expanded ("maximum")
//! geometry. Double-clicking a panel border snaps between the two; a plain
//! drag commits whatever size it produced. [`state::LayoutState`] aggregates
//! the panel controllers into one observable object for the hosting shell.

pub mod click_track;
pub mod components;
pub mod constants;
pub mod geometry;
pub mod panel;
pub mod state;
pub mod tracing_sub;
pub mod ui;
