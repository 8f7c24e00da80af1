// src/math/types/orientation.rs

use crate::math::types::Point2D;
use serde::{Deserialize, Serialize};

/// Optionale UV-Spiegelung, angewandt vor dem Mapping auf die Kugel.
///
/// Spiegelt innerhalb des Einheitsquadrats: `u -> 1 - u` bzw. `v -> 1 - v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UvOrientation {
    pub flip_u: bool,
    pub flip_v: bool,
}

impl UvOrientation {
    pub fn new(flip_u: bool, flip_v: bool) -> Self {
        Self { flip_u, flip_v }
    }

    pub fn apply(&self, p: Point2D) -> Point2D {
        Point2D::new(
            if self.flip_u { 1.0 - p.x } else { p.x },
            if self.flip_v { 1.0 - p.y } else { p.y },
        )
    }
}
