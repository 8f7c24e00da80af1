//! Geometrie-Kern für Kugelskizzen: Formen im UV-Raum werden auf die
//! Einheitskugel abgebildet, rotiert, gegen die sichtbare Hemisphäre
//! geclippt und in die Bildebene projiziert.
//!
//! Einstiegspunkt ist [`math::pipeline::ProjectionPipeline`]; die einzelnen
//! Stufen (Tessellierung, Mapping, Clipping, Projektion) sind auch direkt
//! nutzbar.

pub mod debug;
pub mod math;

pub use math::prelude::*;
