// src/math/geometry/shape/mod.rs
pub mod style;
pub mod tessellation;

pub use style::*;
pub use tessellation::*;

use crate::math::types::Point2D;
use serde::{Deserialize, Serialize};

/// Abschluss-Klassifikation einer Kurve.
///
/// Großkreis-Ringe sind geometrisch geschlossen, werden beim Hemisphären-
/// Clipping aber als einmal umlaufende offene Kurve behandelt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveClosure {
    Open,
    Closed,
    GreatCircleRing,
}

impl CurveClosure {
    /// Geschlossen im Sinne der Ausgabe (Ring zählt mit)
    pub fn is_closed(&self) -> bool {
        !matches!(self, CurveClosure::Open)
    }
}

/// Geometrie einer Form im UV-Raum.
///
/// Geschlossene Summe: neue Formarten erzwingen erschöpfendes Matching in
/// Tessellierung und Pipeline statt Tag-Inspektion zur Laufzeit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeGeometry {
    Line {
        start: Point2D,
        end: Point2D,
    },
    Rect {
        min: Point2D,
        max: Point2D,
    },
    Circle {
        center: Point2D,
        radius: f64,
    },
    RegularPolygon {
        center: Point2D,
        radius: f64,
        sides: usize,
        rotation_offset: f64,
    },
    /// Ring konstanter Breite (v fest, u läuft über [0,1])
    LatitudeRing { v: f64 },
    /// Meridian-Großkreis durch beide Pole (u fest)
    LongitudeRing { u: f64 },
    /// Von außen gelieferter Pfad, unverändert übernommen
    ImportedPath { points: Vec<Point2D>, closed: bool },
}

impl ShapeGeometry {
    /// Feste Abschluss-Klassifikation pro Variante
    pub fn closure(&self) -> CurveClosure {
        match self {
            ShapeGeometry::Line { .. } => CurveClosure::Open,
            ShapeGeometry::Rect { .. }
            | ShapeGeometry::Circle { .. }
            | ShapeGeometry::RegularPolygon { .. } => CurveClosure::Closed,
            ShapeGeometry::LatitudeRing { .. } | ShapeGeometry::LongitudeRing { .. } => {
                CurveClosure::GreatCircleRing
            }
            ShapeGeometry::ImportedPath { closed, .. } => {
                if *closed {
                    CurveClosure::Closed
                } else {
                    CurveClosure::Open
                }
            }
        }
    }
}

/// Eine Form: Geometrie plus Zeichenstil.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub geometry: ShapeGeometry,
    pub style: ShapeStyle,
}

impl Shape {
    pub fn new(geometry: ShapeGeometry) -> Self {
        Self {
            geometry,
            style: ShapeStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_classification() {
        let line = ShapeGeometry::Line {
            start: Point2D::ZERO,
            end: Point2D::ONE,
        };
        assert_eq!(line.closure(), CurveClosure::Open);

        let circle = ShapeGeometry::Circle {
            center: Point2D::splat(0.5),
            radius: 0.1,
        };
        assert_eq!(circle.closure(), CurveClosure::Closed);

        let ring = ShapeGeometry::LatitudeRing { v: 0.5 };
        assert_eq!(ring.closure(), CurveClosure::GreatCircleRing);
        assert!(ring.closure().is_closed());

        let path = ShapeGeometry::ImportedPath {
            points: vec![Point2D::ZERO, Point2D::ONE],
            closed: false,
        };
        assert_eq!(path.closure(), CurveClosure::Open);
    }
}
