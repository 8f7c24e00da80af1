// src/math/geometry/sphere/mapping.rs

use crate::math::{
    types::{Point2D, Point3D},
    utils::constants::{PI, PI_OVER_2, TAU},
};

/// Bildet einen UV-Punkt auf die Einheitskugel ab.
///
/// Längengrad `θ = 2π·u − π`, Breitengrad `φ = π·v − π/2`. Die Polachse liegt
/// auf Z; in der Standardorientierung blickt die Kamera entlang Z auf den
/// Nordpol, der Äquator (`v = 0.5`) fällt mit dem Limb zusammen.
///
/// Das Ergebnis hat für beliebige reelle Eingaben Norm 1; es gibt keine
/// Fehlerfälle.
pub fn uv_to_sphere(p: Point2D) -> Point3D {
    let theta = TAU * p.x - PI;
    let phi = PI * p.y - PI_OVER_2;

    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    Point3D::new(cos_phi * cos_theta, cos_phi * sin_theta, sin_phi)
}

/// Bildet eine UV-Punktfolge auf die Einheitskugel ab.
pub fn uv_to_sphere_all(points: &[Point2D]) -> Vec<Point3D> {
    points.iter().map(|&p| uv_to_sphere(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_unit_norm_everywhere() {
        // Auch deutlich außerhalb des Einheitsquadrats
        for i in -12..=12 {
            for j in -12..=12 {
                let p = Point2D::new(i as f64 / 5.0, j as f64 / 5.0);
                assert_abs_diff_eq!(uv_to_sphere(p).length(), 1.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_poles_and_equator() {
        // v = 0 ist der Südpol, v = 1 der Nordpol, unabhängig von u
        let south = uv_to_sphere(Point2D::new(0.3, 0.0));
        assert_abs_diff_eq!(south.z, -1.0, epsilon = 1e-12);
        let north = uv_to_sphere(Point2D::new(0.8, 1.0));
        assert_abs_diff_eq!(north.z, 1.0, epsilon = 1e-12);

        // Der Äquator liegt in der Ebene z = 0
        let equator = uv_to_sphere(Point2D::new(0.1, 0.5));
        assert_abs_diff_eq!(equator.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_u_is_periodic() {
        let a = uv_to_sphere(Point2D::new(0.2, 0.4));
        let b = uv_to_sphere(Point2D::new(1.2, 0.4));
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-9);
    }
}
