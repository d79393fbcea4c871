//! Paint transitions
//!
//! `painted` returns the next grid snapshot and leaves `self` untouched, so a
//! paint is never visible before the owner commits it.

use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintMode {
    /// Overwrite the cell with the color
    Set,
    /// Blank cell -> color, anything else -> blank
    Toggle,
}

impl PaintMode {
    #[inline]
    pub fn from_toggle(toggle: bool) -> Self {
        if toggle { PaintMode::Toggle } else { PaintMode::Set }
    }
}

impl Grid {
    /// Color the cell at `idx` would hold after the paint; `None` for indices off the grid
    pub fn resolve(&self, idx: usize, color: Color, mode: PaintMode) -> Option<Color> {
        let current = self.color(idx)?;
        Some(match mode {
            PaintMode::Set => color,
            PaintMode::Toggle if current == self.blank => color,
            PaintMode::Toggle => self.blank,
        })
    }

    /// Next snapshot after painting `target`; `None` ("no cell") yields an identical grid
    pub fn painted(&self, target: Option<usize>, color: Color, mode: PaintMode) -> Grid {
        let mut next = self.clone();
        if let Some(idx) = target {
            if let Some(resolved) = self.resolve(idx, color, mode) {
                next.colors[idx] = resolved;
            }
        }
        next
    }
}
