// src/math/geometry/sphere/projection.rs

use crate::math::{
    types::{Point2D, Point3D},
    utils::constants,
};
use serde::{Deserialize, Serialize};

/// Projektionsmodelle für die Abbildung rotierter Kugelpunkte auf die
/// Bildebene.
///
/// Geschlossene Aufzählung: ein unbekannter Modus ist nicht darstellbar,
/// das erschöpfende Matching ersetzt die Laufzeitprüfung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProjectionMode {
    /// Parallelprojektion; verdeckt ist alles mit `z < 0`
    Orthographic,
    /// Lochkamera im Abstand `camera_z` auf der Z-Achse, Blick auf den Ursprung
    Perspective { camera_z: f64 },
    /// Stereographische Projektion, singulär nahe dem Projektionspol `z = 1`
    Stereographic,
}

impl ProjectionMode {
    /// Perspektive mit dem Standard-Kameraabstand
    pub fn perspective() -> Self {
        ProjectionMode::Perspective {
            camera_z: constants::DEFAULT_CAMERA_Z,
        }
    }
}

impl Default for ProjectionMode {
    fn default() -> Self {
        ProjectionMode::Orthographic
    }
}

/// Projektor für rotierte Kugelpunkte.
///
/// `None` bedeutet "verdeckt" (gecullt) — das ist kein Fehlerfall, sondern
/// regulärer Ausgang des Sichtbarkeitstests bzw. der Singularitätsprüfung.
#[derive(Debug, Clone, Copy)]
pub struct SphereProjector {
    mode: ProjectionMode,
    include_back_faces: bool,
}

impl SphereProjector {
    pub fn new(mode: ProjectionMode) -> Self {
        Self {
            mode,
            include_back_faces: false,
        }
    }

    /// Lässt bei orthographischer Projektion auch Rückseitenpunkte passieren;
    /// der Aufrufer unterscheidet vorn/hinten dann am Vorzeichen von z.
    pub fn with_back_faces(mut self, include: bool) -> Self {
        self.include_back_faces = include;
        self
    }

    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    /// Projiziert einen einzelnen Punkt; `None` = verdeckt oder singulär.
    pub fn project_point(&self, p: Point3D) -> Option<Point2D> {
        match self.mode {
            ProjectionMode::Orthographic => {
                if p.z < 0.0 && !self.include_back_faces {
                    None
                } else {
                    Some(Point2D::new(p.x, p.y))
                }
            }
            ProjectionMode::Perspective { camera_z } => {
                let denom = camera_z - p.z;
                if denom <= 0.0 {
                    None
                } else {
                    Some(Point2D::new(p.x, p.y) * (camera_z / denom))
                }
            }
            ProjectionMode::Stereographic => {
                let denom = 1.0 - p.z;
                if denom <= constants::STEREOGRAPHIC_EPSILON {
                    None
                } else {
                    Some(Point2D::new(p.x, p.y) / denom)
                }
            }
        }
    }

    /// Projiziert eine Punktfolge; verdeckte Punkte werden ausgelassen.
    pub fn project_points(&self, points: &[Point3D]) -> Vec<Point2D> {
        points
            .iter()
            .filter_map(|&p| self.project_point(p))
            .collect()
    }
}
