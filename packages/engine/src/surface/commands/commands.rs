use crate::domain::color::Color;
use crate::grid::PaintMode;

use super::SurfaceCore;

/// Commit a paint: build the next grid snapshot and swap it in.
/// Paints that would leave the cell as it is don't touch the grid or the redraw flag.
pub(super) fn paint(core: &mut SurfaceCore, target: Option<usize>, color: Color, toggle: bool) -> bool {
    paint_with_mode(core, target, color, PaintMode::from_toggle(toggle))
}

pub(super) fn paint_with_mode(
    core: &mut SurfaceCore,
    target: Option<usize>,
    color: Color,
    mode: PaintMode,
) -> bool {
    let Some(idx) = target else {
        return false;
    };
    let (Some(current), Some(next)) = (core.grid.color(idx), core.grid.resolve(idx, color, mode)) else {
        return false;
    };
    if current == next {
        return false;
    }

    core.grid = core.grid.painted(Some(idx), color, mode);
    core.needs_redraw = true;
    true
}
