//! Interaction state
//!
//! One enum instead of two booleans: a gesture and an open menu can never
//! coexist, so "drawing while the menu is open" is unrepresentable.

use crate::domain::color::Color;
use crate::metrics::Point;

/// `PointerEvent.button`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl PointerButton {
    pub fn from_code(code: i16) -> Self {
        match code {
            0 => PointerButton::Primary,
            1 => PointerButton::Auxiliary,
            2 => PointerButton::Secondary,
            other => PointerButton::Other(other),
        }
    }
}

/// An in-progress press/drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawSession {
    /// Client position of the pointer-down
    pub origin: Point,
    /// Travel exceeded the movement threshold at some point
    pub has_moved: bool,
    /// Color of the pressed cell before anything was painted; `None` off-grid
    pub press_color: Option<Color>,
}

impl DrawSession {
    #[inline]
    pub fn displacement(&self, client: Point) -> f64 {
        self.origin.distance(client)
    }
}

/// The open color picker
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContextMenu {
    /// Client position of the right-click; the popup's top-left
    pub position: Point,
    /// Cell the pick will be applied to
    pub target: Option<usize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Interaction {
    #[default]
    Idle,
    Drawing(DrawSession),
    MenuOpen(ContextMenu),
}
