// src/math/geometry/shape/style.rs

use serde::{Deserialize, Serialize};

/// Zeichenstil einer Form.
///
/// Der Kernel interpretiert den Stil nicht; er wird unverändert an die
/// konsumierende Render-Schicht durchgereicht. Farben sind CSS-Strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: Option<String>,
}

impl ShapeStyle {
    pub fn stroked(stroke: impl Into<String>, stroke_width: f64) -> Self {
        Self {
            stroke: stroke.into(),
            stroke_width,
            fill: None,
        }
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self::stroked("#000000", 1.0)
    }
}
