use wasm_bindgen::prelude::*;

use crate::domain::color::Color;
use crate::domain::config::SurfaceConfig;
use crate::metrics::{Point, Viewport};

use super::interaction::PointerButton;
use super::render_stats::RenderStats;
use super::SurfaceCore;

/// Index sentinel handed to JS for "no cell"
pub const NO_CELL: i32 = -1;

#[inline]
fn to_index(index: i32) -> Option<usize> {
    usize::try_from(index).ok()
}

#[inline]
fn from_index(index: Option<usize>) -> i32 {
    index
        .and_then(|idx| i32::try_from(idx).ok())
        .unwrap_or(NO_CELL)
}

fn parse_color(hex: &str) -> Result<Color, JsValue> {
    Color::from_hex(hex).map_err(JsValue::from)
}

#[wasm_bindgen]
pub struct PixelSurface {
    core: SurfaceCore,
}

#[wasm_bindgen]
impl PixelSurface {
    /// Create a surface with the default config (100×100, five swatches)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SurfaceCore::default(),
        }
    }

    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(json: &str) -> Result<PixelSurface, JsValue> {
        let config = SurfaceConfig::from_json(json).map_err(|e| {
            console_warn!("Rejected surface config: {}", e);
            JsValue::from(e)
        })?;
        Ok(Self {
            core: SurfaceCore::new(config),
        })
    }

    /// Replace the config; clears the grid
    pub fn load_config_json(&mut self, json: &str) -> Result<(), JsValue> {
        let config = SurfaceConfig::from_json(json).map_err(|e| {
            console_warn!("Rejected surface config: {}", e);
            JsValue::from(e)
        })?;
        self.core.load_config(config);
        Ok(())
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    // === Dimensions ===

    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.core.grid().size() }

    #[wasm_bindgen(getter)]
    pub fn cell_count(&self) -> u32 { self.core.grid().cell_count() as u32 }

    /// Backing-store width in device pixels
    #[wasm_bindgen(getter)]
    pub fn canvas_width(&self) -> f64 { self.core.metrics().backing_width() }

    #[wasm_bindgen(getter)]
    pub fn canvas_height(&self) -> f64 { self.core.metrics().backing_height() }

    #[wasm_bindgen(getter)]
    pub fn cell_width(&self) -> f64 { self.core.metrics().cell_width() }

    #[wasm_bindgen(getter)]
    pub fn cell_height(&self) -> f64 { self.core.metrics().cell_height() }

    /// Recompute canvas metrics from `innerWidth`, `innerHeight` and `devicePixelRatio`
    pub fn resize(&mut self, css_width: f64, css_height: f64, device_pixel_ratio: f64) {
        self.core.resize(Viewport::new(css_width, css_height, device_pixel_ratio));
    }

    /// Canvas bounding-box top-left in client pixels
    pub fn set_canvas_offset(&mut self, left: f64, top: f64) {
        self.core.set_canvas_offset(left, top);
    }

    // === Cells ===

    /// Cell under a client point, or -1
    pub fn cell_index_at(&self, client_x: f64, client_y: f64) -> i32 {
        from_index(self.core.cell_index_at(Point::new(client_x, client_y)))
    }

    pub fn cell_color(&self, index: i32) -> Option<String> {
        to_index(index)
            .and_then(|idx| self.core.cell_color(idx))
            .map(|c| c.to_hex())
    }

    pub fn is_blank(&self, index: i32) -> bool {
        to_index(index).is_some_and(|idx| self.core.grid().is_blank(idx))
    }

    pub fn painted_count(&self) -> u32 {
        self.core.grid().count_painted() as u32
    }

    /// Paint one cell; -1 is a no-op. Returns whether anything changed.
    pub fn paint(&mut self, index: i32, color: &str, toggle: bool) -> Result<bool, JsValue> {
        let color = parse_color(color)?;
        Ok(self.core.paint(to_index(index), color, toggle))
    }

    #[wasm_bindgen(getter)]
    pub fn active_color(&self) -> String {
        self.core.active_color().to_hex()
    }

    pub fn set_active_color(&mut self, color: &str) -> Result<(), JsValue> {
        let color = parse_color(color)?;
        self.core.set_active_color(color);
        Ok(())
    }

    // === Pointer gestures ===

    pub fn pointer_down(&mut self, client_x: f64, client_y: f64, button: i16) {
        self.core
            .pointer_down(Point::new(client_x, client_y), PointerButton::from_code(button));
    }

    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) -> bool {
        self.core.pointer_move(Point::new(client_x, client_y))
    }

    pub fn pointer_up(&mut self, client_x: f64, client_y: f64) -> bool {
        self.core.pointer_up(Point::new(client_x, client_y))
    }

    /// Window-level pointer-up safety net
    pub fn release_pointer(&mut self) {
        self.core.release_pointer();
    }

    #[wasm_bindgen(getter)]
    pub fn is_drawing(&self) -> bool { self.core.is_drawing() }

    // === Color-picker menu ===

    pub fn open_context_menu(&mut self, client_x: f64, client_y: f64) {
        self.core.open_context_menu(Point::new(client_x, client_y));
    }

    pub fn choose_palette(&mut self, index: usize) -> bool {
        self.core.choose_palette(index)
    }

    pub fn choose_color(&mut self, color: &str) -> Result<bool, JsValue> {
        let color = parse_color(color)?;
        Ok(self.core.choose_color(color))
    }

    pub fn dismiss_menu(&mut self) {
        self.core.dismiss_menu();
    }

    #[wasm_bindgen(getter)]
    pub fn is_menu_open(&self) -> bool { self.core.is_menu_open() }

    #[wasm_bindgen(getter)]
    pub fn menu_x(&self) -> Option<f64> { self.core.menu().map(|m| m.position.x) }

    #[wasm_bindgen(getter)]
    pub fn menu_y(&self) -> Option<f64> { self.core.menu().map(|m| m.position.y) }

    /// Cell the open menu applies to, or -1
    #[wasm_bindgen(getter)]
    pub fn menu_target(&self) -> i32 {
        from_index(self.core.menu().and_then(|m| m.target))
    }

    #[wasm_bindgen(getter)]
    pub fn palette_len(&self) -> usize { self.core.config().palette.len() }

    pub fn palette_color(&self, index: usize) -> Option<String> {
        self.core.config().palette.get(index).map(|c| c.to_hex())
    }

    // === Rendering ===

    pub fn take_needs_redraw(&mut self) -> bool {
        self.core.take_needs_redraw()
    }

    /// Pointer to the ABGR cell colors (for a JS `Uint32Array` view)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.grid().colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.grid().cell_count()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.core.grid().colors_len_bytes()
    }

    pub fn render_stats(&self) -> RenderStats {
        self.core.render_stats()
    }
}

impl Default for PixelSurface {
    fn default() -> Self {
        Self::new()
    }
}
