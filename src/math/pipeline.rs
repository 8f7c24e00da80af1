// src/math/pipeline.rs

use log::debug;
use serde::{Deserialize, Serialize};

use crate::math::{
    error::*,
    geometry::{
        clipping::{clip_closed, clip_open, SilhouetteClipper},
        shape::{CurveClosure, Shape, ShapeStyle, Tessellator},
        sphere::{uv_to_sphere, ProjectionMode, SphereProjector},
    },
    types::{EulerRotation, Point2D, Point3D, UvOrientation},
    utils::constants,
};

/// Standard-Abtastdichte der Pipeline
pub const DEFAULT_DENSITY: usize = 128;

/// Eine projizierte Kurve im Bildraum.
///
/// `closed` unterscheidet Konturen, die als Fläche gefüllt werden können, von
/// offenen Strichzügen (etwa Ringbögen, die am Limb enden).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedCurve {
    pub points: Vec<Point2D>,
    pub closed: bool,
}

/// Ergebnis der Projektion einer Form: vorderseitige Kurven, bei
/// aktiviertem Split zusätzlich die rückseitigen, plus der Zeichenstil.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedShape {
    pub front: Vec<ProjectedCurve>,
    pub back: Vec<ProjectedCurve>,
    pub style: ShapeStyle,
}

/// Orchestriert die Stufen Tessellierung → UV-Orientierung → Kugelabbildung
/// → Rotation → Hemisphären-Clipping → Projektion → Silhouetten-Clipping.
///
/// Die Stufen selbst sind zustandslos; die Pipeline bündelt nur deren
/// Konfiguration und die Reihenfolge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionPipeline {
    pub mode: ProjectionMode,
    pub rotation: EulerRotation,
    pub orientation: UvOrientation,
    pub density: usize,
    /// Rückseitenpunkte nicht cullen (nur orthographisch sinnvoll)
    pub include_back_faces: bool,
    /// Vorder- und Rückseite getrennt ausgeben statt zu clippen
    pub split_back_faces: bool,
}

impl ProjectionPipeline {
    pub fn new(mode: ProjectionMode) -> Self {
        Self {
            mode,
            rotation: EulerRotation::default(),
            orientation: UvOrientation::default(),
            density: DEFAULT_DENSITY,
            include_back_faces: false,
            split_back_faces: false,
        }
    }

    pub fn with_rotation(mut self, rotation: EulerRotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_orientation(mut self, orientation: UvOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_density(mut self, density: usize) -> Self {
        self.density = density;
        self
    }

    pub fn with_back_faces(mut self, include: bool) -> Self {
        self.include_back_faces = include;
        self
    }

    pub fn with_split_back_faces(mut self, split: bool) -> Self {
        self.split_back_faces = split;
        self
    }

    /// Führt eine Form durch alle Stufen.
    pub fn project_shape(&self, shape: &Shape) -> MathResult<ProjectedShape> {
        let curve = Tessellator::new(self.density)?.tessellate(&shape.geometry)?;

        // UV-Orientierung vor der Kugelabbildung, Rotation danach
        let rotated: Vec<Point3D> = curve
            .points
            .iter()
            .map(|&p| self.rotation.apply(uv_to_sphere(self.orientation.apply(p))))
            .collect();

        if self.split_back_faces {
            return Ok(self.project_split(&rotated, curve.closure, &shape.style));
        }

        let projector =
            SphereProjector::new(self.mode).with_back_faces(self.include_back_faces);

        // Auch mit include_back_faces wird hier geclippt; der Schalter wirkt
        // auf den Projektor selbst und auf den Split-Modus
        let fragments: Vec<Vec<Point3D>> = match curve.closure {
            CurveClosure::Open => clip_open(&rotated, false),
            CurveClosure::GreatCircleRing => clip_open(&rotated, true),
            CurveClosure::Closed => {
                let polygon = clip_closed(&rotated);
                if polygon.is_empty() {
                    Vec::new()
                } else {
                    vec![polygon]
                }
            }
        };
        debug!(
            "hemisphere clip: {} fragment(s) from {} points",
            fragments.len(),
            curve.points.len()
        );

        // Nur orthographisch liegt das Limb auf dem Einheitskreis; gefüllte
        // Konturen werden dort zusätzlich in 2D beschnitten
        let silhouette = (matches!(self.mode, ProjectionMode::Orthographic)
            && curve.closure == CurveClosure::Closed)
            .then(SilhouetteClipper::new);

        let mut front = Vec::new();
        for fragment in &fragments {
            let mut points = projector.project_points(fragment);
            if let Some(clipper) = &silhouette {
                points = clipper.clip(&points);
            }
            if points.len() < 2 {
                continue;
            }
            let closed = match curve.closure {
                CurveClosure::Closed => true,
                // Ringfragmente sind nur geschlossen, wenn der Ring ganz
                // sichtbar blieb
                CurveClosure::GreatCircleRing => {
                    points[0].distance(*points.last().unwrap()) < constants::EPSILON
                }
                CurveClosure::Open => false,
            };
            front.push(ProjectedCurve { points, closed });
        }

        Ok(ProjectedShape {
            front,
            back: Vec::new(),
            style: shape.style.clone(),
        })
    }

    /// Projiziert alle Formen; der erste Fehler bricht ab.
    pub fn project_shapes(&self, shapes: &[Shape]) -> MathResult<Vec<ProjectedShape>> {
        shapes.iter().map(|shape| self.project_shape(shape)).collect()
    }

    /// Split-Modus: Punkte nach Vorzeichen von z partitionieren und beide
    /// Hälften ungeclippt projizieren (für gestrichelte Rückseiten o. Ä.).
    fn project_split(
        &self,
        rotated: &[Point3D],
        closure: CurveClosure,
        style: &ShapeStyle,
    ) -> ProjectedShape {
        let projector = SphereProjector::new(self.mode).with_back_faces(true);
        let (front3d, back3d): (Vec<Point3D>, Vec<Point3D>) =
            rotated.iter().copied().partition(|p| p.z >= 0.0);

        let closed = closure.is_closed();
        let to_curve = |points3d: Vec<Point3D>| {
            let points = projector.project_points(&points3d);
            (points.len() >= 2).then_some(ProjectedCurve { points, closed })
        };

        ProjectedShape {
            front: to_curve(front3d).into_iter().collect(),
            back: to_curve(back3d).into_iter().collect(),
            style: style.clone(),
        }
    }
}

impl Default for ProjectionPipeline {
    fn default() -> Self {
        Self::new(ProjectionMode::Orthographic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{
        geometry::shape::ShapeGeometry,
        types::Point2D,
        utils::{angles, comparison},
    };
    use approx::assert_abs_diff_eq;

    fn ortho() -> ProjectionPipeline {
        ProjectionPipeline::new(ProjectionMode::Orthographic).with_density(64)
    }

    #[test]
    fn test_equator_ring_projects_onto_limb() {
        let shape = Shape::new(ShapeGeometry::LatitudeRing { v: 0.5 });
        let projected = ortho().project_shape(&shape).unwrap();

        assert_eq!(projected.front.len(), 1);
        let ring = &projected.front[0];
        assert!(ring.closed);
        for p in &ring.points {
            assert_abs_diff_eq!(p.length(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_meridian_ring_clips_to_single_arc() {
        // u = 0.25 liegt in der Ebene x = 0; sichtbar bleibt genau der
        // vordere Halbbogen von (0,−1) über den Nordpol nach (0,1)
        let shape = Shape::new(ShapeGeometry::LongitudeRing { u: 0.25 });
        let projected = ortho().project_shape(&shape).unwrap();

        assert_eq!(projected.front.len(), 1);
        let arc = &projected.front[0];
        assert!(!arc.closed);
        assert_abs_diff_eq!(arc.points[0].x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(arc.points[0].y, -1.0, epsilon = 1e-9);
        let last = arc.points.last().unwrap();
        assert_abs_diff_eq!(last.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(last.y, 1.0, epsilon = 1e-9);
        assert!(arc.points.iter().all(|p| comparison::nearly_zero(p.x)));
    }

    #[test]
    fn test_small_circle_near_pole_stays_closed() {
        let shape = Shape::new(ShapeGeometry::Circle {
            center: Point2D::new(0.5, 0.85),
            radius: 0.05,
        });
        let projected = ortho().project_shape(&shape).unwrap();

        assert_eq!(projected.front.len(), 1);
        let contour = &projected.front[0];
        assert!(contour.closed);
        assert_eq!(contour.points.first(), contour.points.last());
        assert!(contour.points.iter().all(|p| p.length() < 1.0));
    }

    #[test]
    fn test_straddling_rect_is_bounded_by_limb() {
        // Rechteck über den Äquator hinweg; nach Hemisphären- und
        // Silhouetten-Clipping ragt nichts über den Einheitskreis
        let shape = Shape::new(ShapeGeometry::Rect {
            min: Point2D::new(0.1, 0.35),
            max: Point2D::new(0.9, 0.9),
        });
        let projected = ortho().with_density(128).project_shape(&shape).unwrap();

        assert_eq!(projected.front.len(), 1);
        let contour = &projected.front[0];
        assert!(contour.closed);
        assert!(contour.points.iter().all(|p| p.length() <= 1.0 + 1e-6));
        assert!(contour.points.iter().any(|p| p.length() > 0.99));
    }

    #[test]
    fn test_rotation_changes_visibility() {
        // Ein Kreis am Südpol ist unsichtbar, bis die Kugel gedreht wird
        let shape = Shape::new(ShapeGeometry::Circle {
            center: Point2D::new(0.5, 0.1),
            radius: 0.05,
        });
        let hidden = ortho().project_shape(&shape).unwrap();
        assert!(hidden.front.is_empty());

        let rotated = ortho()
            .with_rotation(EulerRotation::new(angles::deg_to_rad(180.0), 0.0, 0.0))
            .project_shape(&shape)
            .unwrap();
        assert_eq!(rotated.front.len(), 1);
    }

    #[test]
    fn test_split_mode_partitions_by_depth() {
        let shape = Shape::new(ShapeGeometry::LatitudeRing { v: 0.3 });
        let pipeline = ortho()
            .with_rotation(EulerRotation::new(0.7, 0.0, 0.0))
            .with_split_back_faces(true);
        let projected = pipeline.project_shape(&shape).unwrap();

        assert_eq!(projected.front.len(), 1);
        assert_eq!(projected.back.len(), 1);
        let total = projected.front[0].points.len() + projected.back[0].points.len();
        assert_eq!(total, 64);
    }

    #[test]
    fn test_back_faces_flag_does_not_bypass_clipping() {
        // Ohne Split wird immer gegen die Hemisphäre geclippt; der Schalter
        // betrifft nur den Projektor bzw. den Split-Modus
        let shape = Shape::new(ShapeGeometry::LatitudeRing { v: 0.2 });
        let plain = ortho().project_shape(&shape).unwrap();
        let with_flag = ortho().with_back_faces(true).project_shape(&shape).unwrap();
        assert_eq!(plain, with_flag);
        assert!(plain.front.is_empty());
    }

    #[test]
    fn test_perspective_circle_projects() {
        let shape = Shape::new(ShapeGeometry::Circle {
            center: Point2D::new(0.5, 0.75),
            radius: 0.1,
        });
        let pipeline = ProjectionPipeline::new(ProjectionMode::perspective()).with_density(64);
        let projected = pipeline.project_shape(&shape).unwrap();

        assert_eq!(projected.front.len(), 1);
        assert!(projected.front[0].closed);
    }

    #[test]
    fn test_invalid_geometry_propagates_error() {
        let shape = Shape::new(ShapeGeometry::RegularPolygon {
            center: Point2D::splat(0.5),
            radius: 0.1,
            sides: 2,
            rotation_offset: 0.0,
        });
        assert!(ortho().project_shape(&shape).is_err());

        let shape = Shape::new(ShapeGeometry::Circle {
            center: Point2D::splat(0.5),
            radius: -0.1,
        });
        assert!(ortho().project_shape(&shape).is_err());
    }

    #[test]
    fn test_orientation_flip_mirrors_output() {
        let shape = Shape::new(ShapeGeometry::Circle {
            center: Point2D::new(0.3, 0.75),
            radius: 0.05,
        });
        let plain = ortho().project_shape(&shape).unwrap();
        let flipped = ortho()
            .with_orientation(UvOrientation {
                flip_u: true,
                flip_v: false,
            })
            .project_shape(&shape).unwrap();

        // u-Spiegelung negiert den Längengrad; im Bild kehrt sich y um,
        // während x (gerade in θ) unverändert bleibt
        let mean = |s: &ProjectedShape| {
            let pts = &s.front[0].points;
            pts.iter().copied().sum::<Point2D>() / pts.len() as f64
        };
        let a = mean(&plain);
        let b = mean(&flipped);
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, -b.y, epsilon = 1e-9);
    }
}
