use crate::domain::color::Color;
use crate::domain::config::SurfaceConfig;
use crate::grid::Grid;
use crate::metrics::{CanvasMetrics, Point, Viewport};

use super::interaction::Interaction;
use super::SurfaceCore;

pub(super) fn load_config(core: &mut SurfaceCore, config: SurfaceConfig) {
    let viewport = core.metrics.viewport();
    core.grid = Grid::new(config.grid_size, config.blank_color);
    core.metrics = CanvasMetrics::from_viewport(viewport, config.grid_size, config.row_divisor());
    core.active_color = config.initial_color();
    core.interaction = Interaction::Idle;
    core.needs_redraw = true;

    console_log!(
        "Surface config loaded: {0}x{0} cells, row divisor {1}, {2} swatches",
        config.grid_size,
        config.row_divisor(),
        config.palette.len()
    );
    core.config = config;
}

pub(super) fn resize(core: &mut SurfaceCore, viewport: Viewport) {
    core.metrics = core.metrics.resized(viewport);
    core.needs_redraw = true;

    console_log!(
        "Canvas size: {} {}",
        core.metrics.backing_width(),
        core.metrics.backing_height()
    );
}

pub(super) fn set_canvas_offset(core: &mut SurfaceCore, left: f64, top: f64) {
    core.canvas_offset = Point::new(left, top);
}

pub(super) fn set_active_color(core: &mut SurfaceCore, color: Color) {
    core.active_color = color;
}
