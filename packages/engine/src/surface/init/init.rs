use crate::domain::config::SurfaceConfig;
use crate::grid::Grid;
use crate::metrics::{CanvasMetrics, Point, Viewport};

use super::interaction::Interaction;
use super::render_stats::RenderStats;
use super::SurfaceCore;

/// Blank grid, zero-sized canvas until the first `resize`
pub(super) fn create_surface_core(config: SurfaceConfig) -> SurfaceCore {
    let grid = Grid::new(config.grid_size, config.blank_color);
    let metrics = CanvasMetrics::from_viewport(
        Viewport::default(),
        config.grid_size,
        config.row_divisor(),
    );

    SurfaceCore {
        active_color: config.initial_color(),
        grid,
        metrics,
        canvas_offset: Point::ORIGIN,
        interaction: Interaction::Idle,
        needs_redraw: true,
        render_stats: RenderStats::default(),
        config,
    }
}
