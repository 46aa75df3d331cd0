//! Shared crate-wide constants.

use std::time::Duration;

use crate::geometry::Length;

/// Two presses on the same border or button within this window count as one
/// double-click gesture. Evaluated against wall-clock time read at
/// event-handling time; nothing is scheduled on a timer.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(300);

/// Docked size of the home launcher, both axes.
pub const HOME_RESTING: Length = Length::Px(64);

/// Fully expanded size of the home launcher, both axes.
pub const HOME_MAXIMUM: Length = Length::Percent(100);

/// Docked height of the chat bar.
pub const CHAT_RESTING_HEIGHT: Length = Length::Px(32);

/// Fully expanded height of the chat bar.
pub const CHAT_MAXIMUM_HEIGHT: Length = Length::Vh(70);

/// The chat bar always spans its container.
pub const CHAT_WIDTH: Length = Length::Percent(100);

/// Docked width of the left side panel.
pub const LEFT_RESTING_WIDTH: Length = Length::Px(250);

/// Width the left side panel snaps to on a border double-click.
pub const LEFT_MAXIMUM_WIDTH: Length = Length::Px(400);

/// Height of the main content band the side panels live in.
pub const MAIN_HEIGHT: Length = Length::Vh(80);

/// How often the chat bar's notification line advances to the next message.
pub const NOTIFICATION_ROTATE_INTERVAL: Duration = Duration::from_millis(3000);
