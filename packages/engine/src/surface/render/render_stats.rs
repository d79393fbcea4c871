use wasm_bindgen::prelude::*;

/// Counters filled in by whoever draws the draw list
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderStats {
    pub(super) frames: u32,
    pub(super) cells_drawn: u32,
    pub(super) last_render_ms: f64,
}

#[wasm_bindgen]
impl RenderStats {
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> u32 { self.frames }

    /// Cells drawn in the last frame
    #[wasm_bindgen(getter)]
    pub fn cells_drawn(&self) -> u32 { self.cells_drawn }

    #[wasm_bindgen(getter)]
    pub fn last_render_ms(&self) -> f64 { self.last_render_ms }
}

impl RenderStats {
    pub(super) fn record(&mut self, cells_drawn: u32, elapsed_ms: f64) {
        self.frames = self.frames.saturating_add(1);
        self.cells_drawn = cells_drawn;
        self.last_render_ms = elapsed_ms;
    }
}
