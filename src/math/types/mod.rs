// src/math/types/mod.rs
pub mod orientation;
pub mod rotation;

pub use orientation::*;
pub use rotation::*;

// Re-export häufig verwendete externe Typen
pub use glam::{DVec2, DVec3};

// Einheitliche Typen für das gesamte Modul
pub type Point2D = DVec2;
pub type Point3D = DVec3;
