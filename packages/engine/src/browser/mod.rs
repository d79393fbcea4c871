//! Browser - DOM wiring for the drawing surface (wasm32 only)
//!
//! - dom              - window/document/element helpers
//! - canvas_renderer  - draws a `DrawList` on a 2d context
//! - popup            - the floating color picker
//! - app              - `mount()`: builds the elements and registers listeners

mod app;
mod canvas_renderer;
mod dom;
mod popup;

pub use app::mount;
