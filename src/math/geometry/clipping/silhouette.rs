// src/math/geometry/clipping/silhouette.rs

use crate::math::{
    types::Point2D,
    utils::{angles, constants},
};

/// Zustand des Kantenlaufs: innerhalb des Limbs, außerhalb ohne offenen
/// Bogen, oder außerhalb mit gemerktem Bogenanfang.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ClipState {
    Inside,
    OutsideNoArc,
    OutsidePendingArc(Point2D),
}

/// 2D-Clip eines geschlossenen, vorderseitigen Polygons gegen den
/// Einheitskreis (das Limb der Kugel).
///
/// Das Hemisphären-Clipping allein genügt für Füllungen nicht: eine
/// projizierte Polygonsehne kann über den kreisförmigen Limb hinausragen,
/// obwohl alle Eckpunkte vor der Projektion `z ≥ 0` erfüllen. Hier werden
/// Sehnen außerhalb des Kreises durch abgetastete Kreisbögen ersetzt, sodass
/// Füllungen exakt am Limb enden.
#[derive(Debug, Clone, Copy)]
pub struct SilhouetteClipper {
    angular_step: f64,
    min_arc_steps: usize,
}

impl SilhouetteClipper {
    pub fn new() -> Self {
        Self {
            angular_step: angles::deg_to_rad(2.0),
            min_arc_steps: 4,
        }
    }

    /// Setzt die Winkelschrittweite der Bogenabtastung.
    pub fn with_angular_step(mut self, step: f64) -> Self {
        self.angular_step = step.max(constants::EPSILON);
        self
    }

    /// Clippt das Polygon; Eingabe und Ausgabe tragen das schließende
    /// Duplikat. Ein Polygon ganz außerhalb des Limbs ergibt eine leere
    /// Folge.
    pub fn clip(&self, polygon: &[Point2D]) -> Vec<Point2D> {
        let mut pts = polygon;
        if pts.len() >= 2 && pts[0].distance(*pts.last().unwrap()) < constants::EPSILON {
            pts = &pts[..pts.len() - 1];
        }
        let n = pts.len();
        if n < 3 {
            return pts.iter().copied().filter(|p| is_inside(*p)).collect();
        }

        // Umlaufsinn einmalig aus dem ungeclippten Polygon
        let ccw = signed_area(pts) >= 0.0;

        let mut out: Vec<Point2D> = Vec::with_capacity(n + 2);
        let mut state = if is_inside(pts[0]) {
            out.push(pts[0]);
            ClipState::Inside
        } else {
            ClipState::OutsideNoArc
        };

        for i in 0..n {
            let a = pts[i];
            let b = pts[(i + 1) % n];
            state = self.fold_edge(state, a, b, ccw, &mut out);
        }

        // Nie wieder eingetreten: offenen Bogen zum ersten emittierten
        // Punkt schließen
        if let ClipState::OutsidePendingArc(pending) = state {
            if !out.is_empty() {
                let first = out[0];
                out.extend(self.arc_points(pending, first, ccw));
            }
        }

        if out.len() >= 2 && out[0].distance(*out.last().unwrap()) >= constants::EPSILON {
            let first = out[0];
            out.push(first);
        }
        out
    }

    /// Verarbeitet eine Kante und liefert den Folgezustand.
    fn fold_edge(
        &self,
        state: ClipState,
        a: Point2D,
        b: Point2D,
        ccw: bool,
        out: &mut Vec<Point2D>,
    ) -> ClipState {
        let a_in = is_inside(a);
        let b_in = is_inside(b);

        match (a_in, b_in) {
            // Kante ganz innerhalb: der Kreis ist konvex, die Sehne bleibt drin
            (true, true) => {
                push_unique(out, b);
                ClipState::Inside
            }
            // Austritt: Schnittpunkt emittieren und als Bogenanfang merken
            (true, false) => match edge_circle_roots(a, b).first() {
                Some(&t) => {
                    let exit = a.lerp(b, t);
                    push_unique(out, exit);
                    ClipState::OutsidePendingArc(exit)
                }
                // tangentialer Grenzfall: als "kein Schnitt" werten
                None => {
                    push_unique(out, b);
                    ClipState::Inside
                }
            },
            // Eintritt: offenen Bogen bis zum Eintrittspunkt einspleißen
            (false, true) => {
                let entry = match edge_circle_roots(a, b).last() {
                    Some(&t) => a.lerp(b, t),
                    None => ((a + b) * 0.5).normalize(),
                };
                if let ClipState::OutsidePendingArc(pending) = state {
                    out.extend(self.arc_points(pending, entry, ccw));
                }
                push_unique(out, entry);
                push_unique(out, b);
                ClipState::Inside
            }
            // Kante ganz außerhalb: nur relevant, wenn sie den Kreis
            // zweimal durchsticht
            (false, false) => {
                let roots = edge_circle_roots(a, b);
                if roots.len() == 2 {
                    let c0 = a.lerp(b, roots[0]);
                    let c1 = a.lerp(b, roots[1]);
                    if let ClipState::OutsidePendingArc(pending) = state {
                        out.extend(self.arc_points(pending, c0, ccw));
                    }
                    push_unique(out, c0);
                    push_unique(out, c1);
                    ClipState::OutsidePendingArc(c1)
                } else {
                    state
                }
            }
        }
    }

    /// Tastet den Kreisbogen von `from` nach `to` im Umlaufsinn des Polygons
    /// ab; liefert nur die inneren Stützpunkte.
    fn arc_points(&self, from: Point2D, to: Point2D, ccw: bool) -> Vec<Point2D> {
        let a0 = from.y.atan2(from.x);
        let a1 = to.y.atan2(to.x);

        let mut sweep = a1 - a0;
        if ccw {
            sweep = angles::normalize_angle(sweep);
        } else {
            sweep = angles::normalize_angle(sweep) - constants::TAU;
        }
        if sweep.abs() < constants::EPSILON || (constants::TAU - sweep.abs()) < constants::EPSILON {
            return Vec::new();
        }

        let steps = ((sweep.abs() / self.angular_step).ceil() as usize).max(self.min_arc_steps);
        (1..steps)
            .map(|k| {
                let angle = a0 + sweep * k as f64 / steps as f64;
                Point2D::new(angle.cos(), angle.sin())
            })
            .collect()
    }
}

impl Default for SilhouetteClipper {
    fn default() -> Self {
        Self::new()
    }
}

/// Innen-Test gegen den Einheitskreis
fn is_inside(p: Point2D) -> bool {
    p.length_squared() <= 1.0 + constants::ON_CIRCLE_EPSILON
}

/// Vorzeichenbehaftete Fläche (Shoelace); `≥ 0` bedeutet gegen den
/// Uhrzeigersinn.
fn signed_area(pts: &[Point2D]) -> f64 {
    let n = pts.len();
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += pts[i].x * pts[j].y - pts[j].x * pts[i].y;
    }
    area * 0.5
}

/// Schnittparameter der Kante `a → b` mit dem Einheitskreis: bis zu zwei
/// Wurzeln der Geraden-Kreis-Quadratik in `[0, 1]`, sortiert und innerhalb
/// `EPSILON` dedupliziert. Grenzfälle (tangential, degeneriert) lösen zu
/// "kein Schnitt" auf.
fn edge_circle_roots(a: Point2D, b: Point2D) -> Vec<f64> {
    let d = b - a;
    let qa = d.length_squared();
    if qa < constants::EPSILON * constants::EPSILON {
        return Vec::new();
    }
    let qb = 2.0 * a.dot(d);
    let qc = a.length_squared() - 1.0;

    let disc = qb * qb - 4.0 * qa * qc;
    if disc <= 0.0 {
        return Vec::new();
    }

    let sqrt_disc = disc.sqrt();
    let mut roots: Vec<f64> = [(-qb - sqrt_disc) / (2.0 * qa), (-qb + sqrt_disc) / (2.0 * qa)]
        .into_iter()
        .filter(|t| (0.0..=1.0).contains(t))
        .collect();
    roots.sort_by(|x, y| x.total_cmp(y));
    roots.dedup_by(|x, y| (*x - *y).abs() < constants::EPSILON);
    roots
}

fn push_unique(points: &mut Vec<Point2D>, p: Point2D) {
    if points
        .last()
        .is_none_or(|&last| last.distance(p) >= constants::EPSILON)
    {
        points.push(p);
    }
}
