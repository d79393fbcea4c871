//! Right-click color picker
//!
//! Picking a swatch makes it the active color, paints the right-clicked cell
//! with it (set, never toggle) and closes the picker.

use crate::domain::color::Color;
use crate::grid::PaintMode;
use crate::metrics::Point;

use super::commands::paint_with_mode;
use super::interaction::{ContextMenu, Interaction};
use super::SurfaceCore;

pub(super) fn open_context_menu(core: &mut SurfaceCore, client: Point) {
    let target = core.cell_index_at(client);
    // An unfinished gesture is dropped without its release action
    core.interaction = Interaction::MenuOpen(ContextMenu {
        position: client,
        target,
    });
}

pub(super) fn choose_palette(core: &mut SurfaceCore, index: usize) -> bool {
    let Some(color) = core.config.palette.get(index).copied() else {
        return false;
    };
    choose_color(core, color)
}

pub(super) fn choose_color(core: &mut SurfaceCore, color: Color) -> bool {
    let Interaction::MenuOpen(menu) = core.interaction else {
        return false;
    };

    core.active_color = color;
    paint_with_mode(core, menu.target, color, PaintMode::Set);
    core.interaction = Interaction::Idle;
    true
}

pub(super) fn dismiss_menu(core: &mut SurfaceCore) {
    if core.is_menu_open() {
        core.interaction = Interaction::Idle;
    }
}
