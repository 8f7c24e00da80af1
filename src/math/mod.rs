// src/math/mod.rs
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod types;
pub mod utils;

// Re-Exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{MathError, MathResult},
        geometry::{
            clipping::{SilhouetteClipper, clip_closed, clip_open},
            shape::{CurveClosure, Shape, ShapeGeometry, ShapeStyle, Tessellator, UvCurve},
            sphere::{ProjectionMode, SphereProjector, uv_to_sphere, uv_to_sphere_all},
        },
        pipeline::{ProjectedCurve, ProjectedShape, ProjectionPipeline},
        types::*,
    };
}
