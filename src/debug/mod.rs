// src/debug/mod.rs
pub mod svg;

pub use svg::{render_projected_svg, save_projected_svg};
