// src/debug/svg.rs
use crate::math::{pipeline::ProjectedShape, types::Point2D};
use log::info;
use std::io::Write;

/// Rand um den Einheitskreis in der ViewBox
const MARGIN: f64 = 0.1;

/// Ein Helfer zum Aufbau einer SVG-Datei im Bildraum der Projektion.
///
/// Die ViewBox ist auf den Einheitskreis (das Limb) zentriert; die y-Achse
/// wird gespiegelt, da SVG nach unten wächst.
struct SvgBuilder {
    content: String,
    stroke_scale: f64,
}

impl SvgBuilder {
    fn new(svg_pixel_size: f64) -> Self {
        let extent = 1.0 + MARGIN;
        let side = 2.0 * extent;
        // Strichbreiten sind in Bildkoordinaten angegeben; auf die
        // Pixelgröße normieren
        let stroke_scale = side / svg_pixel_size;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{svg_pixel_size}" height="{svg_pixel_size}" viewBox="{min} {min} {side} {side}" xmlns="http://www.w3.org/2000/svg">
"#,
            min = -extent,
        );

        Self {
            content,
            stroke_scale,
        }
    }

    /// Zeichnet das Limb als Referenzkreis.
    fn draw_limb(&mut self) {
        self.content.push_str(&format!(
            r##"  <circle cx="0" cy="0" r="1" fill="none" stroke="#cccccc" stroke-width="{:.5}" />
"##,
            self.stroke_scale
        ));
    }

    /// Zeichnet eine Kurve als Pfad; `dashed` kennzeichnet Rückseiten.
    fn draw_curve(
        &mut self,
        points: &[Point2D],
        closed: bool,
        stroke: &str,
        stroke_width: f64,
        fill: Option<&str>,
        dashed: bool,
    ) {
        if points.len() < 2 {
            return;
        }

        let mut d = String::new();
        for (i, p) in points.iter().enumerate() {
            let command = if i == 0 { 'M' } else { 'L' };
            // y-Spiegelung in den SVG-Raum
            d.push_str(&format!("{command}{:.5},{:.5} ", p.x, -p.y));
        }
        if closed {
            d.push('Z');
        }

        let fill_attr = if closed { fill.unwrap_or("none") } else { "none" };
        let dash_attr = if dashed {
            format!(
                r#" stroke-dasharray="{:.5},{:.5}""#,
                4.0 * self.stroke_scale,
                4.0 * self.stroke_scale
            )
        } else {
            String::new()
        };

        self.content.push_str(&format!(
            r#"  <path d="{}" fill="{}" stroke="{}" stroke-width="{:.5}"{} />
"#,
            d.trim_end(),
            fill_attr,
            stroke,
            stroke_width * self.stroke_scale,
            dash_attr
        ));
    }

    fn finish(mut self) -> String {
        self.content.push_str("</svg>\n");
        self.content
    }
}

/// Rendert projizierte Formen als SVG-Dokument.
///
/// Vorderseitige Kurven werden durchgezogen gezeichnet, rückseitige (aus dem
/// Split-Modus) gestrichelt.
pub fn render_projected_svg(shapes: &[ProjectedShape], svg_pixel_size: f64) -> String {
    let mut svg = SvgBuilder::new(svg_pixel_size);
    svg.draw_limb();

    for shape in shapes {
        for curve in &shape.back {
            svg.draw_curve(
                &curve.points,
                curve.closed,
                &shape.style.stroke,
                shape.style.stroke_width,
                None,
                true,
            );
        }
        for curve in &shape.front {
            svg.draw_curve(
                &curve.points,
                curve.closed,
                &shape.style.stroke,
                shape.style.stroke_width,
                shape.style.fill.as_deref(),
                false,
            );
        }
    }

    svg.finish()
}

/// Schreibt das gerenderte SVG in eine Datei.
pub fn save_projected_svg(
    filename: &str,
    shapes: &[ProjectedShape],
    svg_pixel_size: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = render_projected_svg(shapes, svg_pixel_size);
    let mut file = std::fs::File::create(filename)?;
    file.write_all(content.as_bytes())?;
    info!("Debug SVG '{}' wurde erstellt.", filename);
    Ok(())
}
