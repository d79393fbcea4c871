//! Surface - the drawing-surface controller
//!
//! `SurfaceCore` owns every piece of state (grid, canvas metrics, active
//! color, interaction) and only orchestrates; the transitions live in the
//! sub-modules below:
//! - input/     - pointer gestures and the color-picker menu
//! - commands/  - committing paints to the grid
//! - render/    - draw list extraction and render stats
//! - init/      - construction, config reload, resize
//!
//! Nothing here touches the DOM. Input handlers only change logical state and
//! raise the redraw flag; the browser layer drains it with `take_needs_redraw`.

use crate::domain::color::Color;
use crate::domain::config::SurfaceConfig;
use crate::grid::Grid;
use crate::metrics::{CanvasMetrics, Point, Viewport};

#[path = "state/interaction.rs"]
mod interaction;
#[path = "commands/commands.rs"]
mod commands;
#[path = "input/gesture.rs"]
mod gesture;
#[path = "input/menu.rs"]
mod menu;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "render/render_stats.rs"]
mod render_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::{PixelSurface, NO_CELL};
pub use interaction::{ContextMenu, DrawSession, Interaction, PointerButton};
pub use render_extract::{CellDraw, DrawList};
pub use render_stats::RenderStats;

pub struct SurfaceCore {
    config: SurfaceConfig,
    grid: Grid,
    metrics: CanvasMetrics,
    /// Top-left of the canvas in client (CSS) pixels
    canvas_offset: Point,
    active_color: Color,
    interaction: Interaction,
    needs_redraw: bool,
    render_stats: RenderStats,
}

impl SurfaceCore {
    pub fn new(config: SurfaceConfig) -> Self {
        init::create_surface_core(config)
    }

    // === Accessors ===

    pub fn config(&self) -> &SurfaceConfig { &self.config }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn metrics(&self) -> &CanvasMetrics { &self.metrics }

    pub fn canvas_offset(&self) -> Point { self.canvas_offset }

    pub fn active_color(&self) -> Color { self.active_color }

    pub fn interaction(&self) -> &Interaction { &self.interaction }

    pub fn is_drawing(&self) -> bool {
        matches!(self.interaction, Interaction::Drawing(_))
    }

    pub fn is_menu_open(&self) -> bool {
        matches!(self.interaction, Interaction::MenuOpen(_))
    }

    pub fn menu(&self) -> Option<&ContextMenu> {
        match &self.interaction {
            Interaction::MenuOpen(menu) => Some(menu),
            _ => None,
        }
    }

    pub fn cell_color(&self, index: usize) -> Option<Color> {
        self.grid.color(index)
    }

    /// Cell under a client point, using the last known canvas offset
    pub fn cell_index_at(&self, client: Point) -> Option<usize> {
        self.metrics.cell_at(client, self.canvas_offset)
    }

    // === Settings ===

    /// Load a new config: fresh blank grid, interaction reset, viewport kept
    pub fn load_config(&mut self, config: SurfaceConfig) {
        settings::load_config(self, config);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        settings::resize(self, viewport);
    }

    pub fn set_canvas_offset(&mut self, left: f64, top: f64) {
        settings::set_canvas_offset(self, left, top);
    }

    pub fn set_active_color(&mut self, color: Color) {
        settings::set_active_color(self, color);
    }

    // === Commands ===

    /// Paint one cell; `None` is a no-op. Returns whether the grid changed.
    pub fn paint(&mut self, target: Option<usize>, color: Color, toggle: bool) -> bool {
        commands::paint(self, target, color, toggle)
    }

    // === Pointer gestures ===

    pub fn pointer_down(&mut self, client: Point, button: PointerButton) {
        gesture::pointer_down(self, client, button);
    }

    pub fn pointer_move(&mut self, client: Point) -> bool {
        gesture::pointer_move(self, client)
    }

    pub fn pointer_up(&mut self, client: Point) -> bool {
        gesture::pointer_up(self, client)
    }

    /// Window-level pointer-up: ends any gesture without a release action
    pub fn release_pointer(&mut self) {
        gesture::release_pointer(self);
    }

    // === Color-picker menu ===

    pub fn open_context_menu(&mut self, client: Point) {
        menu::open_context_menu(self, client);
    }

    pub fn choose_palette(&mut self, index: usize) -> bool {
        menu::choose_palette(self, index)
    }

    pub fn choose_color(&mut self, color: Color) -> bool {
        menu::choose_color(self, color)
    }

    pub fn dismiss_menu(&mut self) {
        menu::dismiss_menu(self);
    }

    // === Rendering ===

    /// Returns the redraw flag and clears it
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn needs_redraw(&self) -> bool { self.needs_redraw }

    pub fn draw_list(&self) -> DrawList {
        render_extract::extract_draw_list(self)
    }

    pub fn record_render(&mut self, cells_drawn: u32, elapsed_ms: f64) {
        self.render_stats.record(cells_drawn, elapsed_ms);
    }

    pub fn render_stats(&self) -> RenderStats {
        self.render_stats.clone()
    }
}

impl Default for SurfaceCore {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
