use crate::domain::color::Color;
use crate::metrics::CellRect;

use super::SurfaceCore;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellDraw {
    pub rect: CellRect,
    pub color: Color,
}

/// Everything needed to repaint the canvas from scratch
#[derive(Clone, Debug, PartialEq)]
pub struct DrawList {
    pub backing_width: f64,
    pub backing_height: f64,
    pub border_color: Color,
    pub border_width: f64,
    /// Row-major, one entry per cell
    pub cells: Vec<CellDraw>,
}

/// Full repaint: every cell, every time. Fine at 100×100.
pub(super) fn extract_draw_list(core: &SurfaceCore) -> DrawList {
    let metrics = &core.metrics;
    let cells = core
        .grid
        .colors()
        .iter()
        .enumerate()
        .map(|(idx, &color)| CellDraw {
            rect: metrics.cell_rect(idx),
            color,
        })
        .collect();

    DrawList {
        backing_width: metrics.backing_width(),
        backing_height: metrics.backing_height(),
        border_color: core.config.border_color,
        border_width: core.config.border_width,
        cells,
    }
}
