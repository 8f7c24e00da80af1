// src/math/geometry/sphere/mod.rs
pub mod mapping;
pub mod projection;

pub use mapping::*;
pub use projection::*;
