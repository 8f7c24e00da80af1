// src/math/geometry/mod.rs

// Deklaration der Haupt-Geometriemodule
pub mod clipping;
pub mod shape;
pub mod sphere;

// Re-Exporte für einen schnellen Zugriff auf die Kerntypen,
// falls man nicht das gesamte `math::prelude` importieren möchte.

// Shape-Exporte
pub use self::shape::{
    CurveClosure, Shape, ShapeGeometry, ShapeStyle, Tessellator, UvCurve,
};

// Sphere-Exporte
pub use self::sphere::{
    ProjectionMode, SphereProjector, uv_to_sphere, uv_to_sphere_all,
};

// Clipping-Exporte
pub use self::clipping::{SilhouetteClipper, clip_closed, clip_open};
