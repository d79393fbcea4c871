//! Pixelgrid Engine - pixel drawing surface in WASM
//!
//! A fixed N×N grid of colored cells drawn on a full-window canvas. Click a
//! cell to toggle it, drag to paint, right-click to pick a color.
//!
//! Architecture:
//! - core/     - logging macros, error type
//! - domain/   - colors and surface configuration
//! - spatial/  - grid storage, canvas metrics, pointer <-> cell mapping
//! - surface/  - controller state machine, draw list, JS facade
//! - browser/  - DOM wiring and canvas backend (wasm32 only)

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod surface;
#[cfg(target_arch = "wasm32")]
pub mod browser;

// Short paths used throughout the crate
pub use spatial::grid;
pub use spatial::metrics;
pub use domain::color;
pub use domain::config;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Pixelgrid engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// "No cell" index sentinel, for JS callers comparing `cell_index_at` results
#[wasm_bindgen]
pub fn no_cell() -> i32 {
    surface::NO_CELL
}

// Re-export main types
pub use crate::core::EngineError;
pub use domain::color::Color;
pub use domain::config::SurfaceConfig;
pub use surface::{PixelSurface, PointerButton, SurfaceCore};

#[cfg(target_arch = "wasm32")]
pub use browser::mount;
