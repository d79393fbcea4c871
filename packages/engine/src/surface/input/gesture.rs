//! Pointer gestures: click toggles, drag paints
//!
//! - down: start a session, remember the pressed cell's color (nothing is painted yet)
//! - move: while drawing, paint the hovered cell (always set, never toggle)
//! - up:   travel below the threshold counts as a click and toggles based on
//!         the color remembered at pointer-down; a drag already painted everything

use crate::grid::PaintMode;
use crate::metrics::Point;

use super::commands::paint_with_mode;
use super::interaction::{DrawSession, Interaction, PointerButton};
use super::SurfaceCore;

pub(super) fn pointer_down(core: &mut SurfaceCore, client: Point, button: PointerButton) {
    // Right button belongs to the context menu
    if button == PointerButton::Secondary {
        return;
    }

    let press_color = core.cell_index_at(client).and_then(|idx| core.grid.color(idx));

    // Replaces an open menu too: pressing on the canvas closes the picker
    core.interaction = Interaction::Drawing(DrawSession {
        origin: client,
        has_moved: false,
        press_color,
    });
}

pub(super) fn pointer_move(core: &mut SurfaceCore, client: Point) -> bool {
    let threshold = core.config.movement_threshold;
    let Interaction::Drawing(session) = &mut core.interaction else {
        return false;
    };

    if session.displacement(client) > threshold {
        session.has_moved = true;
    }

    let target = core.cell_index_at(client);
    let color = core.active_color;
    paint_with_mode(core, target, color, PaintMode::Set)
}

pub(super) fn pointer_up(core: &mut SurfaceCore, client: Point) -> bool {
    let Interaction::Drawing(session) = core.interaction else {
        return false;
    };
    core.interaction = Interaction::Idle;

    if session.displacement(client) >= core.config.movement_threshold {
        return false;
    }

    let target = core.cell_index_at(client);
    let color = core.active_color;
    let mode = if session.press_color == Some(core.grid.blank()) {
        PaintMode::Set
    } else {
        PaintMode::Toggle
    };
    paint_with_mode(core, target, color, mode)
}

pub(super) fn release_pointer(core: &mut SurfaceCore) {
    if core.is_drawing() {
        core.interaction = Interaction::Idle;
    }
}
