//! Core - crate-wide plumbing shared by every layer
//!
//! - utils/  - console logging macros (must be first for macro export!)
//! - error   - `EngineError`, converted to `JsValue` at the wasm boundary

#[macro_use]
pub mod utils;
pub mod error;

pub use error::EngineError;
