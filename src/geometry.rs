//! Semantic lengths and per-axis panel geometry.
//!
//! Panel sizes are carried as unit-tagged lengths (`64px`, `100%`, `70vh`)
//! rather than resolved cell counts so a panel can be laid out against any
//! container without re-committing state. Resolution to terminal cells
//! happens at render time via [`Length::resolve`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A unit-tagged length.
///
/// `Px` is an absolute size in cells, `Percent` is relative to the parent
/// extent on the same axis, and `Vw`/`Vh` are relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Length {
    Px(u16),
    Percent(u16),
    Vw(u16),
    Vh(u16),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseLengthError {
    #[error("empty length")]
    Empty,
    #[error("unknown length unit in {0:?}")]
    UnknownUnit(String),
    #[error("invalid length magnitude in {0:?}")]
    Magnitude(String),
}

/// The outermost drawable area, used to resolve `Vw`/`Vh` lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Length {
    /// Resolve to cells against the parent extent on this axis.
    ///
    /// `parent` is the containing extent for `Percent`; `Vw`/`Vh` ignore it
    /// and scale against the viewport instead.
    pub fn resolve(self, parent: u16, viewport: Viewport) -> u16 {
        let scale = |base: u16, pct: u16| (base as u32 * pct as u32 / 100) as u16;
        match self {
            Length::Px(cells) => cells,
            Length::Percent(pct) => scale(parent, pct),
            Length::Vw(pct) => scale(viewport.width, pct),
            Length::Vh(pct) => scale(viewport.height, pct),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{v}px"),
            Length::Percent(v) => write!(f, "{v}%"),
            Length::Vw(v) => write!(f, "{v}vw"),
            Length::Vh(v) => write!(f, "{v}vh"),
        }
    }
}

impl FromStr for Length {
    type Err = ParseLengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseLengthError::Empty);
        }
        let split = s
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(s.len());
        let (digits, unit) = s.split_at(split);
        let value: u16 = digits
            .parse()
            .map_err(|_| ParseLengthError::Magnitude(s.to_string()))?;
        match unit {
            "px" => Ok(Length::Px(value)),
            "%" => Ok(Length::Percent(value)),
            "vw" => Ok(Length::Vw(value)),
            "vh" => Ok(Length::Vh(value)),
            _ => Err(ParseLengthError::UnknownUnit(s.to_string())),
        }
    }
}

/// One spatial dimension of a panel: the committed size plus the two
/// endpoints double-clicks snap between.
///
/// Outside an active drag, `current` only ever holds a value the panel
/// committed itself: `resting`, `maximum`, or the observed size of a
/// finished freeform drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryAxis {
    current: Length,
    resting: Length,
    maximum: Length,
}

impl GeometryAxis {
    pub const fn new(resting: Length, maximum: Length) -> Self {
        Self {
            current: resting,
            resting,
            maximum,
        }
    }

    pub fn current(&self) -> Length {
        self.current
    }

    pub fn resting(&self) -> Length {
        self.resting
    }

    pub fn maximum(&self) -> Length {
        self.maximum
    }

    pub fn is_expanded(&self) -> bool {
        self.current != self.resting
    }

    pub fn is_resting(&self) -> bool {
        self.current == self.resting
    }

    /// Snap between the two endpoints: at rest expands to `maximum`; any
    /// other committed value, including a freeform drag size, snaps back to
    /// `resting`.
    pub fn toggle(&mut self) {
        self.current = if self.current == self.resting {
            self.maximum
        } else {
            self.resting
        };
    }

    pub fn snap_resting(&mut self) {
        self.current = self.resting;
    }

    pub fn snap_maximum(&mut self) {
        self.current = self.maximum;
    }

    /// Commit an observed size. This is the authoritative write path for
    /// freeform resizes and accepts arbitrary values.
    pub fn set_current(&mut self, length: Length) {
        self.current = length;
    }
}
