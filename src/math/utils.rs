// src/math/utils.rs

/// Mathematische Konstanten und feste Toleranzen des Kernels
pub mod constants {
    /// Allgemeine Toleranz für Schnittpunkt-Deduplizierung und Koordinatenvergleiche
    pub const EPSILON: f64 = 1e-6;
    /// Toleranz für den Innen/Außen-Test gegen den Einheitskreis (Limb)
    pub const ON_CIRCLE_EPSILON: f64 = 1e-9;
    /// Unterhalb dieses Nenners gilt die stereographische Projektion als singulär
    pub const STEREOGRAPHIC_EPSILON: f64 = 1e-6;
    /// Kameraabstand der perspektivischen Projektion (Blick auf den Ursprung)
    pub const DEFAULT_CAMERA_Z: f64 = 4.0;

    pub const PI: f64 = std::f64::consts::PI;
    pub const TAU: f64 = std::f64::consts::TAU;
    pub const PI_OVER_2: f64 = std::f64::consts::PI / 2.0;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Prüft ob zwei Floats mit custom Toleranz gleich sind
    pub fn nearly_equal_eps(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    /// Prüft ob Float (nahezu) Null ist
    pub fn nearly_zero(a: f64) -> bool {
        a.abs() < EPSILON
    }

    /// Lineare Interpolation
    pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
        a + (b - a) * t
    }
}

/// Winkel-Hilfsfunktionen
pub mod angles {
    use super::constants::{PI, TAU};

    /// Konvertiert Grad zu Radiant
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * PI / 180.0
    }

    /// Normalisiert einen Winkel auf [0, 2π)
    pub fn normalize_angle(angle: f64) -> f64 {
        let mut result = angle % TAU;
        if result < 0.0 {
            result += TAU;
        }
        result
    }

    /// Normalisiert einen Winkel auf [-π, π)
    pub fn normalize_angle_signed(angle: f64) -> f64 {
        let mut result = angle % TAU;
        if result > PI {
            result -= TAU;
        } else if result < -PI {
            result += TAU;
        }
        result
    }
}
