// src/math/types/rotation.rs

use crate::math::types::Point3D;
use serde::{Deserialize, Serialize};

/// Euler-Rotation der Kugel in Radiant.
///
/// Die Komposition ist `R = Rz(rz) · Ry(ry) · Rx(rx)`: zuerst wird um die
/// X-Achse gedreht, dann um Y, zuletzt um Z. Die Reihenfolge ist Teil des
/// Vertrags — ein Tausch verändert das Ergebnis für nicht-triviale Winkel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerRotation {
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
}

impl EulerRotation {
    pub fn new(rx: f64, ry: f64, rz: f64) -> Self {
        Self { rx, ry, rz }
    }

    /// Keine Rotation
    pub fn identity() -> Self {
        Self::default()
    }

    /// Wendet die Rotation auf einen Punkt an.
    ///
    /// Direkte Einsetzung statt Matrixmultiplikation: keine Zwischenmatrix,
    /// die Achsdrehungen werden nacheinander ausgeschrieben.
    pub fn apply(&self, p: Point3D) -> Point3D {
        let (sx, cx) = self.rx.sin_cos();
        let (sy, cy) = self.ry.sin_cos();
        let (sz, cz) = self.rz.sin_cos();

        // Rx
        let y1 = p.y * cx - p.z * sx;
        let z1 = p.y * sx + p.z * cx;

        // Ry
        let x2 = p.x * cy + z1 * sy;
        let z2 = -p.x * sy + z1 * cy;

        // Rz
        Point3D::new(x2 * cz - y1 * sz, x2 * sz + y1 * cz, z2)
    }

    /// Wendet die Rotation auf alle Punkte einer Sequenz an.
    pub fn apply_all(&self, points: &[Point3D]) -> Vec<Point3D> {
        points.iter().map(|&p| self.apply(p)).collect()
    }
}
