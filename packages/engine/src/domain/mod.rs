//! Domain - what a cell can hold and how a surface is configured

pub mod color;
pub mod config;
