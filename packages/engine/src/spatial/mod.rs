//! Spatial - where cells live and where they land on screen
//!
//! - grid/    - row-major cell storage and paint transitions
//! - metrics  - canvas sizing and pointer <-> cell mapping

pub mod grid;
pub mod metrics;
