//! Terminal view bindings for the demo shell.
//!
//! This module is the presentational side of the crate: it resolves the
//! layout snapshot to screen rectangles, draws the panel chrome, records
//! hit regions for the rail buttons and the launcher, and maps pointer
//! coordinates back onto panel borders. All geometry decisions stay in the
//! panel controllers; everything here is derived per frame.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType};

use crate::geometry::Viewport;
use crate::panel::{BorderEdge, LeftButton};
use crate::state::LayoutSnapshot;

/// Width of the left button rail in cells.
pub const RAIL_WIDTH: u16 = 6;

/// Which panel a pointer interaction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Home,
    Left,
    Chat,
}

/// Screen rectangles for one frame, derived from the snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelRects {
    pub home: Rect,
    pub rail: Rect,
    pub left: Option<Rect>,
    pub chat: Rect,
}

/// An in-progress freeform drag, owned by the shell while the panel sits
/// in its intermediate phase. The live rectangle is view state only; the
/// controller sees nothing until the drag stops.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    pub panel: PanelKind,
    pub edge: BorderEdge,
    pub start: Rect,
    pub start_col: u16,
    pub start_row: u16,
    pub live: Rect,
}

impl DragSession {
    /// Recompute the live rectangle from the pointer position. Only the
    /// edges the demo panels expose are handled; the rest leave the
    /// rectangle alone.
    pub fn update(&mut self, column: u16, row: u16) {
        let dx = column as i32 - self.start_col as i32;
        let dy = row as i32 - self.start_row as i32;
        let mut rect = self.start;
        match self.edge {
            BorderEdge::Right | BorderEdge::TopRight | BorderEdge::BottomRight => {
                rect.width = clamp_dim(rect.width as i32 + dx);
            }
            BorderEdge::Left | BorderEdge::TopLeft | BorderEdge::BottomLeft => {
                rect.width = clamp_dim(rect.width as i32 - dx);
            }
            _ => {}
        }
        match self.edge {
            BorderEdge::Bottom | BorderEdge::BottomLeft | BorderEdge::BottomRight => {
                rect.height = clamp_dim(rect.height as i32 + dy);
            }
            BorderEdge::Top | BorderEdge::TopLeft | BorderEdge::TopRight => {
                // Bottom-anchored panels grow upward from their top edge.
                rect.height = clamp_dim(rect.height as i32 - dy);
                rect.y = self
                    .start
                    .y
                    .saturating_add(self.start.height)
                    .saturating_sub(rect.height);
            }
            _ => {}
        }
        self.live = rect;
    }
}

fn clamp_dim(value: i32) -> u16 {
    value.clamp(3, u16::MAX as i32) as u16
}

/// Hit regions recorded while rendering, queried on the next mouse press.
#[derive(Debug, Default)]
pub struct HitRegions {
    home_button: Option<Rect>,
    rail_buttons: Vec<(LeftButton, Rect)>,
}

impl HitRegions {
    fn begin_frame(&mut self) {
        self.home_button = None;
        self.rail_buttons.clear();
    }

    pub fn home_button_at(&self, column: u16, row: u16) -> bool {
        self.home_button
            .is_some_and(|rect| rect_contains(rect, column, row))
    }

    pub fn rail_button_at(&self, column: u16, row: u16) -> Option<LeftButton> {
        self.rail_buttons
            .iter()
            .find(|(_, rect)| rect_contains(*rect, column, row))
            .map(|(button, _)| *button)
    }
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Map a pointer position onto the border cells of `rect`. Corner cells
/// win over the edge runs so diagonal grabs stay reachable.
pub fn edge_at(rect: Rect, column: u16, row: u16) -> Option<BorderEdge> {
    if rect.width == 0 || rect.height == 0 || !rect_contains(rect, column, row) {
        return None;
    }
    let right = rect.x.saturating_add(rect.width.saturating_sub(1));
    let bottom = rect.y.saturating_add(rect.height.saturating_sub(1));
    let on_left = column == rect.x;
    let on_right = column == right;
    let on_top = row == rect.y;
    let on_bottom = row == bottom;
    match (on_left, on_right, on_top, on_bottom) {
        (true, _, true, _) => Some(BorderEdge::TopLeft),
        (_, true, true, _) => Some(BorderEdge::TopRight),
        (true, _, _, true) => Some(BorderEdge::BottomLeft),
        (_, true, _, true) => Some(BorderEdge::BottomRight),
        (true, ..) => Some(BorderEdge::Left),
        (_, true, ..) => Some(BorderEdge::Right),
        (_, _, true, _) => Some(BorderEdge::Top),
        (_, _, _, true) => Some(BorderEdge::Bottom),
        _ => None,
    }
}

/// Resolve the snapshot to this frame's rectangles. A panel with an active
/// drag session renders at the session's live rectangle instead of its
/// committed geometry.
pub fn compute_rects(area: Rect, snap: &LayoutSnapshot, drag: Option<&DragSession>) -> PanelRects {
    let viewport = Viewport {
        width: area.width,
        height: area.height,
    };

    let chat_height = snap
        .chat_height
        .current
        .resolve(area.height, viewport)
        .clamp(1, area.height.max(1));
    let chat_width = snap
        .chat_width
        .resolve(area.width, viewport)
        .clamp(1, area.width.max(1));
    let mut chat = Rect {
        x: area.x,
        y: area
            .y
            .saturating_add(area.height)
            .saturating_sub(chat_height),
        width: chat_width,
        height: chat_height,
    };

    let main = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(chat_height),
    };
    let rail = Rect {
        x: main.x,
        y: main.y,
        width: RAIL_WIDTH.min(main.width),
        height: snap
            .main_height
            .resolve(main.height, viewport)
            .clamp(1, main.height.max(1)),
    };

    let mut left = None;
    if snap.left_open {
        let width = snap
            .left_width
            .current
            .resolve(main.width, viewport)
            .clamp(3, main.width.saturating_sub(rail.width).max(3));
        left = Some(Rect {
            x: rail.x.saturating_add(rail.width),
            y: rail.y,
            width,
            height: rail.height,
        });
    }

    let home_x = rail
        .x
        .saturating_add(rail.width)
        .saturating_add(left.map_or(0, |r| r.width));
    let home_area = Rect {
        x: home_x,
        y: main.y,
        width: main.width.saturating_sub(home_x.saturating_sub(main.x)),
        height: main.height,
    };
    let mut home = Rect {
        x: home_area.x,
        y: home_area.y,
        width: snap
            .home_width
            .current
            .resolve(home_area.width, viewport)
            .clamp(3, home_area.width.max(3)),
        height: snap
            .home_height
            .current
            .resolve(home_area.height, viewport)
            .clamp(3, home_area.height.max(3)),
    };

    if let Some(session) = drag {
        match session.panel {
            PanelKind::Home => home = session.live,
            PanelKind::Chat => chat = session.live,
            PanelKind::Left => {
                if let Some(rect) = left.as_mut() {
                    rect.width = session.live.width;
                }
            }
        }
    }

    PanelRects {
        home,
        rail,
        left,
        chat,
    }
}

const RAIL_LABELS: [(LeftButton, &str); 3] = [
    (LeftButton::Account, "[A]"),
    (LeftButton::Alerts, "[!]"),
    (LeftButton::Saved, "[S]"),
];

/// Draw the shell and record this frame's hit regions.
pub fn render_shell(
    frame: &mut Frame,
    rects: &PanelRects,
    snap: &LayoutSnapshot,
    notification: Option<&str>,
    hits: &mut HitRegions,
) {
    hits.begin_frame();
    let area = frame.area();
    let buffer = frame.buffer_mut();

    // Left rail with its three buttons.
    draw_border(buffer, area, rects.rail, "rail", false);
    for (slot, (button, label)) in RAIL_LABELS.into_iter().enumerate() {
        let y = rects.rail.y.saturating_add(1 + 2 * slot as u16);
        if y >= rects.rail.y.saturating_add(rects.rail.height) {
            break;
        }
        let x = rects.rail.x.saturating_add(1);
        let selected = snap.left_active_button == Some(button);
        let style = if selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        safe_set_string(buffer, area, x, y, label, style);
        let rect = Rect {
            x,
            y,
            width: label.len() as u16,
            height: 1,
        };
        hits.rail_buttons.push((button, rect));
    }

    // Side panel, only while a rail button holds it open.
    if let Some(rect) = rects.left {
        let title = snap
            .left_active_button
            .map_or_else(|| "panel".to_string(), |button| button.to_string());
        draw_border(buffer, area, rect, &title, snap.left_width.expanded);
    }

    // Home launcher.
    draw_border(buffer, area, rects.home, "home", snap.home_expanded);
    let button_x = rects.home.x.saturating_add(1);
    let button_y = rects.home.y.saturating_add(1);
    let button_label = if snap.home_expanded { "[◻]" } else { "[□]" };
    safe_set_string(buffer, area, button_x, button_y, button_label, Style::default());
    hits.home_button = Some(Rect {
        x: button_x,
        y: button_y,
        width: 3,
        height: 1,
    });

    // Chat bar with the rotating notification and the online dot.
    draw_border(buffer, area, rects.chat, "chat", snap.chat_expanded);
    if let Some(message) = notification {
        let x = rects.chat.x.saturating_add(2);
        let y = rects.chat.y.saturating_add(1);
        let available = rects.chat.width.saturating_sub(6) as usize;
        let text = truncate_to_width(message, available);
        safe_set_string(buffer, area, x, y, &text, Style::default());
    }
    let dot_x = rects
        .chat
        .x
        .saturating_add(rects.chat.width.saturating_sub(3));
    safe_set_string(
        buffer,
        area,
        dot_x,
        rects.chat.y.saturating_add(1),
        "●",
        Style::default().add_modifier(Modifier::BOLD),
    );
}

fn draw_border(buffer: &mut Buffer, bounds: Rect, rect: Rect, title: &str, emphasized: bool) {
    let clipped = rect.intersection(bounds);
    if clipped.width < 2 || clipped.height < 2 {
        return;
    }
    let border_type = if emphasized {
        BorderType::Double
    } else {
        BorderType::Plain
    };
    let block = Block::bordered()
        .border_type(border_type)
        .title(title.to_string());
    ratatui::widgets::Widget::render(block, clipped, buffer);
}

/// Write a string into `buffer`, clipping to `bounds`.
pub fn safe_set_string(buffer: &mut Buffer, bounds: Rect, x: u16, y: u16, text: &str, style: Style) {
    let clip = bounds.intersection(buffer.area);
    if y < clip.y
        || y >= clip.y.saturating_add(clip.height)
        || x < clip.x
        || x >= clip.x.saturating_add(clip.width)
    {
        return;
    }
    let max_width = clip.x.saturating_add(clip.width).saturating_sub(x) as usize;
    let text = truncate_to_width(text, max_width);
    buffer.set_string(x, y, text, style);
}

/// Truncate to at most `max_width` characters, appending an ellipsis when
/// anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let count = text.chars().count();
    if count <= max_width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_width.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LayoutState;

    fn area() -> Rect {
        // Roomy enough that the web-scale default lengths stay meaningful
        // when resolved one px per cell.
        Rect {
            x: 0,
            y: 0,
            width: 200,
            height: 100,
        }
    }

    #[test]
    fn edge_at_maps_border_cells() {
        let rect = Rect {
            x: 10,
            y: 5,
            width: 20,
            height: 10,
        };
        assert_eq!(edge_at(rect, 10, 5), Some(BorderEdge::TopLeft));
        assert_eq!(edge_at(rect, 29, 14), Some(BorderEdge::BottomRight));
        assert_eq!(edge_at(rect, 29, 8), Some(BorderEdge::Right));
        assert_eq!(edge_at(rect, 15, 14), Some(BorderEdge::Bottom));
        assert_eq!(edge_at(rect, 15, 8), None);
        assert_eq!(edge_at(rect, 50, 50), None);
    }

    #[test]
    fn chat_rect_hugs_the_bottom() {
        let layout: LayoutState = LayoutState::default();
        let rects = compute_rects(area(), &layout.snapshot(), None);
        assert_eq!(
            rects.chat.y + rects.chat.height,
            area().y + area().height,
            "chat bar should end at the bottom edge"
        );
        assert_eq!(rects.chat.width, area().width);
    }

    #[test]
    fn expanding_chat_raises_its_top_edge() {
        let mut layout: LayoutState = LayoutState::default();
        let docked = compute_rects(area(), &layout.snapshot(), None);
        layout.chat_toggle();
        let expanded = compute_rects(area(), &layout.snapshot(), None);
        assert!(expanded.chat.height > docked.chat.height);
        assert!(expanded.chat.y < docked.chat.y);
    }

    #[test]
    fn left_panel_rect_appears_only_while_open() {
        let mut layout: LayoutState = LayoutState::default();
        assert!(compute_rects(area(), &layout.snapshot(), None).left.is_none());
        layout.left_account_click();
        let rects = compute_rects(area(), &layout.snapshot(), None);
        let left = rects.left.expect("open panel has a rect");
        assert_eq!(left.x, rects.rail.x + rects.rail.width);
    }

    #[test]
    fn drag_session_grows_a_bottom_anchored_panel_upward() {
        let start = Rect {
            x: 0,
            y: 30,
            width: 100,
            height: 10,
        };
        let mut session = DragSession {
            panel: PanelKind::Chat,
            edge: BorderEdge::Top,
            start,
            start_col: 50,
            start_row: 30,
            live: start,
        };
        session.update(50, 20);
        assert_eq!(session.live.height, 20);
        assert_eq!(session.live.y, 20);
        assert_eq!(
            session.live.y + session.live.height,
            start.y + start.height,
            "bottom edge stays anchored"
        );
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("hello", 0), "");
    }
}
