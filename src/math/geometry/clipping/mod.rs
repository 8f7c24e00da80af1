// src/math/geometry/clipping/mod.rs
pub mod hemisphere;
pub mod silhouette;

pub use hemisphere::*;
pub use silhouette::*;
