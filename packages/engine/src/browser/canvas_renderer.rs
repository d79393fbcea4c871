use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::core::EngineError;
use crate::domain::color::Color;
use crate::metrics::CanvasMetrics;
use crate::surface::DrawList;

use super::dom::set_style;

/// What one repaint cost, fed back into `SurfaceCore::record_render`
#[derive(Clone, Copy, Debug)]
pub(super) struct FrameReport {
    pub(super) cells_drawn: u32,
    pub(super) elapsed_ms: f64,
}

/// Full-repaint canvas backend; the only code that touches the 2d context
pub(super) struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub(super) fn new(canvas: HtmlCanvasElement) -> Result<Self, EngineError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| EngineError::Dom("getContext(\"2d\") failed".to_string()))?
            .ok_or_else(|| EngineError::Dom("missing canvas 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::Dom("unexpected canvas context type".to_string()))?;
        Ok(Self { canvas, ctx })
    }

    pub(super) fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Backing store in device pixels, CSS size in window pixels
    pub(super) fn apply_size(&self, metrics: &CanvasMetrics) -> Result<(), EngineError> {
        self.canvas.set_width(metrics.backing_width().floor() as u32);
        self.canvas.set_height(metrics.backing_height().floor() as u32);

        let viewport = metrics.viewport();
        set_style(&self.canvas, "width", &format!("{}px", viewport.css_width))?;
        set_style(&self.canvas, "height", &format!("{}px", viewport.css_height))
    }

    /// Clear and redraw every cell
    pub(super) fn draw(&self, list: &DrawList) -> FrameReport {
        let started_ms = js_sys::Date::now();
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, list.backing_width, list.backing_height);
        ctx.set_stroke_style_str(&list.border_color.to_hex());
        ctx.set_line_width(list.border_width);

        let mut fill: Option<Color> = None;
        for cell in &list.cells {
            if fill != Some(cell.color) {
                ctx.set_fill_style_str(&cell.color.to_hex());
                fill = Some(cell.color);
            }
            let r = cell.rect;
            ctx.fill_rect(r.x, r.y, r.width, r.height);
            if list.border_width > 0.0 {
                ctx.stroke_rect(r.x, r.y, r.width, r.height);
            }
        }

        FrameReport {
            cells_drawn: list.cells.len() as u32,
            elapsed_ms: js_sys::Date::now() - started_ms,
        }
    }
}
