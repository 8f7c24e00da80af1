// src/math/geometry/shape/tessellation.rs

use crate::math::{
    error::*,
    geometry::shape::{CurveClosure, ShapeGeometry},
    types::Point2D,
    utils::constants,
};

/// Geordnete UV-Punktfolge einer tessellierten Form.
///
/// Geschlossene (Nicht-Ring-)Kurven tragen ein Duplikat des ersten Punkts am
/// Ende; bei Ringen ist die Umlaufkante implizit.
#[derive(Debug, Clone, PartialEq)]
pub struct UvCurve {
    pub points: Vec<Point2D>,
    pub closure: CurveClosure,
}

/// Tessellierung von Formen zu UV-Punktfolgen.
///
/// `density` steuert die Abtastdichte; gekrümmte Formen haben ein Minimum von
/// 64 Segmenten, damit die Sehnenabweichung mit steigender Dichte monoton
/// nicht zunimmt.
#[derive(Debug, Clone, Copy)]
pub struct Tessellator {
    density: usize,
}

/// Minimale Segmentzahl für gekrümmte Formen (Kreis, Ringe)
const MIN_CURVE_SEGMENTS: usize = 64;
/// Minimale Abtastungen pro Rechteckkante
const MIN_EDGE_SAMPLES: usize = 2;

impl Tessellator {
    pub fn new(density: usize) -> MathResult<Self> {
        if density == 0 {
            return Err(MathError::InvalidConfiguration {
                message: "Sample density must be positive".to_string(),
            });
        }
        Ok(Self { density })
    }

    pub fn density(&self) -> usize {
        self.density
    }

    pub fn tessellate(&self, geometry: &ShapeGeometry) -> MathResult<UvCurve> {
        match geometry {
            ShapeGeometry::Line { start, end } => Ok(self.tessellate_line(*start, *end)),
            ShapeGeometry::Rect { min, max } => Ok(self.tessellate_rect(*min, *max)),
            ShapeGeometry::Circle { center, radius } => self.tessellate_circle(*center, *radius),
            ShapeGeometry::RegularPolygon {
                center,
                radius,
                sides,
                rotation_offset,
            } => self.tessellate_regular_polygon(*center, *radius, *sides, *rotation_offset),
            ShapeGeometry::LatitudeRing { v } => Ok(self.tessellate_latitude_ring(*v)),
            ShapeGeometry::LongitudeRing { u } => Ok(self.tessellate_longitude_ring(*u)),
            ShapeGeometry::ImportedPath { points, closed } => {
                self.tessellate_imported_path(points, *closed)
            }
        }
    }

    fn tessellate_line(&self, start: Point2D, end: Point2D) -> UvCurve {
        let n = self.density;
        let points = (0..=n)
            .map(|k| start.lerp(end, k as f64 / n as f64))
            .collect();
        UvCurve {
            points,
            closure: CurveClosure::Open,
        }
    }

    fn tessellate_rect(&self, min: Point2D, max: Point2D) -> UvCurve {
        let per_edge = (self.density / 4).max(MIN_EDGE_SAMPLES);
        let corners = [
            min,
            Point2D::new(max.x, min.y),
            max,
            Point2D::new(min.x, max.y),
        ];

        let mut points = Vec::with_capacity(4 * per_edge + 1);
        for i in 0..4 {
            let from = corners[i];
            let to = corners[(i + 1) % 4];
            // Startecke inklusive, Endecke exklusiv (gehört zur nächsten Kante)
            for k in 0..per_edge {
                points.push(from.lerp(to, k as f64 / per_edge as f64));
            }
        }
        points.push(corners[0]);

        UvCurve {
            points,
            closure: CurveClosure::Closed,
        }
    }

    fn tessellate_circle(&self, center: Point2D, radius: f64) -> MathResult<UvCurve> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(MathError::InvalidConfiguration {
                message: format!("Circle radius must be positive and finite, got {radius}"),
            });
        }

        let n = self.density.max(MIN_CURVE_SEGMENTS);
        let points = (0..=n)
            .map(|k| {
                let angle = constants::TAU * k as f64 / n as f64;
                center + radius * Point2D::new(angle.cos(), angle.sin())
            })
            .collect();

        Ok(UvCurve {
            points,
            closure: CurveClosure::Closed,
        })
    }

    fn tessellate_regular_polygon(
        &self,
        center: Point2D,
        radius: f64,
        sides: usize,
        rotation_offset: f64,
    ) -> MathResult<UvCurve> {
        if sides < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: sides,
            });
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(MathError::InvalidConfiguration {
                message: format!("Polygon radius must be positive and finite, got {radius}"),
            });
        }

        let mut points: Vec<Point2D> = (0..sides)
            .map(|k| {
                let angle = rotation_offset + constants::TAU * k as f64 / sides as f64;
                center + radius * Point2D::new(angle.cos(), angle.sin())
            })
            .collect();
        points.push(points[0]);

        Ok(UvCurve {
            points,
            closure: CurveClosure::Closed,
        })
    }

    fn tessellate_latitude_ring(&self, v: f64) -> UvCurve {
        let n = self.density.max(MIN_CURVE_SEGMENTS);
        let points = (0..n)
            .map(|k| Point2D::new(k as f64 / n as f64, v))
            .collect();
        UvCurve {
            points,
            closure: CurveClosure::GreatCircleRing,
        }
    }

    /// Voller Meridian-Großkreis: aufsteigender Ast bei `u`, absteigender Ast
    /// bei `u + 0.5`. Eine halbe Meridianlinie allein wäre kein Ring.
    fn tessellate_longitude_ring(&self, u: f64) -> UvCurve {
        let n = self.density.max(MIN_CURVE_SEGMENTS);
        let half = (n / 2).max(2);
        let u_back = (u + 0.5).rem_euclid(1.0);

        let mut points = Vec::with_capacity(2 * half);
        for k in 0..=half {
            points.push(Point2D::new(u, k as f64 / half as f64));
        }
        for k in 1..half {
            points.push(Point2D::new(u_back, 1.0 - k as f64 / half as f64));
        }

        UvCurve {
            points,
            closure: CurveClosure::GreatCircleRing,
        }
    }

    fn tessellate_imported_path(&self, points: &[Point2D], closed: bool) -> MathResult<UvCurve> {
        if points.len() < 2 {
            return Err(MathError::InsufficientPoints {
                expected: 2,
                actual: points.len(),
            });
        }

        let mut points = points.to_vec();
        let closure = if closed {
            if points.first() != points.last() {
                points.push(points[0]);
            }
            CurveClosure::Closed
        } else {
            CurveClosure::Open
        };

        Ok(UvCurve { points, closure })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::comparison;

    fn max_chord_deviation(points: &[Point2D], center: Point2D, radius: f64) -> f64 {
        points
            .windows(2)
            .map(|pair| {
                let mid = (pair[0] + pair[1]) * 0.5;
                radius - mid.distance(center)
            })
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_line_sample_count() {
        let tess = Tessellator::new(10).unwrap();
        let curve = tess
            .tessellate(&ShapeGeometry::Line {
                start: Point2D::ZERO,
                end: Point2D::new(1.0, 0.5),
            })
            .unwrap();
        assert_eq!(curve.points.len(), 11);
        assert_eq!(curve.closure, CurveClosure::Open);
    }

    #[test]
    fn test_rect_minimum_edge_samples() {
        // density 4 ergäbe 1 Sample pro Kante, Minimum ist 2
        let tess = Tessellator::new(4).unwrap();
        let curve = tess
            .tessellate(&ShapeGeometry::Rect {
                min: Point2D::ZERO,
                max: Point2D::ONE,
            })
            .unwrap();
        assert_eq!(curve.points.len(), 4 * 2 + 1);
        assert_eq!(curve.points.first(), curve.points.last());
        assert_eq!(curve.closure, CurveClosure::Closed);
    }

    #[test]
    fn test_circle_minimum_point_count() {
        let tess = Tessellator::new(8).unwrap();
        let curve = tess
            .tessellate(&ShapeGeometry::Circle {
                center: Point2D::splat(0.5),
                radius: 0.2,
            })
            .unwrap();
        assert_eq!(curve.points.len(), 65);
        assert_eq!(curve.points.first(), curve.points.last());
    }

    #[test]
    fn test_regular_polygon_exact_vertices() {
        let tess = Tessellator::new(100).unwrap();
        let curve = tess
            .tessellate(&ShapeGeometry::RegularPolygon {
                center: Point2D::splat(0.5),
                radius: 0.25,
                sides: 5,
                rotation_offset: 0.3,
            })
            .unwrap();
        assert_eq!(curve.points.len(), 6);
        assert_eq!(curve.points[0], curve.points[5]);
        for p in &curve.points {
            assert!(comparison::nearly_equal(p.distance(Point2D::splat(0.5)), 0.25));
        }
    }

    #[test]
    fn test_regular_polygon_rejects_degenerate_sides() {
        let tess = Tessellator::new(10).unwrap();
        let result = tess.tessellate(&ShapeGeometry::RegularPolygon {
            center: Point2D::ZERO,
            radius: 0.1,
            sides: 2,
            rotation_offset: 0.0,
        });
        assert!(matches!(
            result,
            Err(MathError::InsufficientPoints { expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_zero_density_is_rejected() {
        assert!(Tessellator::new(0).is_err());
    }

    #[test]
    fn test_latitude_ring_has_no_closing_duplicate() {
        let tess = Tessellator::new(64).unwrap();
        let curve = tess.tessellate(&ShapeGeometry::LatitudeRing { v: 0.25 }).unwrap();
        assert_eq!(curve.points.len(), 64);
        assert_ne!(curve.points.first(), curve.points.last());
        assert_eq!(curve.closure, CurveClosure::GreatCircleRing);
        assert!(curve.points.iter().all(|p| p.y == 0.25));
    }

    #[test]
    fn test_longitude_ring_covers_both_branches() {
        let tess = Tessellator::new(64).unwrap();
        let curve = tess.tessellate(&ShapeGeometry::LongitudeRing { u: 0.25 }).unwrap();
        assert_eq!(curve.points.len(), 64);
        assert!(curve.points.iter().any(|p| p.x == 0.25));
        assert!(curve.points.iter().any(|p| p.x == 0.75));
        // Pole werden genau einmal erreicht
        assert_eq!(curve.points.iter().filter(|p| p.y == 1.0).count(), 1);
        assert_eq!(curve.points.iter().filter(|p| p.y == 0.0).count(), 1);
    }

    #[test]
    fn test_imported_path_closing_duplicate() {
        let tess = Tessellator::new(10).unwrap();
        let curve = tess
            .tessellate(&ShapeGeometry::ImportedPath {
                points: vec![Point2D::ZERO, Point2D::X, Point2D::ONE],
                closed: true,
            })
            .unwrap();
        assert_eq!(curve.points.len(), 4);
        assert_eq!(curve.points.first(), curve.points.last());
    }

    #[test]
    fn test_circle_chord_deviation_monotone_in_density() {
        let center = Point2D::splat(0.5);
        let radius = 0.3;
        let geometry = ShapeGeometry::Circle { center, radius };

        let deviations: Vec<f64> = [64, 128, 256, 512]
            .iter()
            .map(|&density| {
                let curve = Tessellator::new(density).unwrap().tessellate(&geometry).unwrap();
                max_chord_deviation(&curve.points, center, radius)
            })
            .collect();

        for pair in deviations.windows(2) {
            assert!(
                pair[1] <= pair[0],
                "chord deviation increased with density: {pair:?}"
            );
        }
    }
}
