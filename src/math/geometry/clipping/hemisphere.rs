// src/math/geometry/clipping/hemisphere.rs

use crate::math::{types::Point3D, utils::constants};

/// Exakter Schnittpunkt einer Kante mit der Ebene `z = 0` per linearer
/// Interpolation `t = z0 / (z0 − z1)`.
fn plane_crossing(p0: Point3D, p1: Point3D) -> Point3D {
    let t = p0.z / (p0.z - p1.z);
    p0 + (p1 - p0) * t
}

fn push_unique(points: &mut Vec<Point3D>, p: Point3D) {
    if points
        .last()
        .is_none_or(|&last| last.distance(p) >= constants::EPSILON)
    {
        points.push(p);
    }
}

/// Clippt eine offene Kurve gegen die Vorderhemisphäre `z ≥ 0`.
///
/// Mit `wrap` wird die Kurve als einmal umlaufender Ring behandelt: die Kante
/// vom letzten zurück zum ersten Punkt wird mitgelaufen und die an der Naht
/// getrennten Fragmente werden wieder zusammengeführt. Ein vollständig
/// sichtbarer Ring ergibt genau ein Fragment, dessen letzter Punkt den ersten
/// dupliziert (eine geschlossene Kurve).
///
/// Das Ergebnis sind null, ein oder mehrere disjunkte vorderseitige
/// Fragmente; eine komplett rückseitige Kurve ergibt eine leere Liste.
pub fn clip_open(points: &[Point3D], wrap: bool) -> Vec<Vec<Point3D>> {
    let n = points.len();
    if n == 0 {
        return Vec::new();
    }

    let mut fragments: Vec<Vec<Point3D>> = Vec::new();
    let mut current: Vec<Point3D> = Vec::new();
    if points[0].z >= 0.0 {
        current.push(points[0]);
    }

    let edge_count = if wrap { n } else { n - 1 };
    for i in 0..edge_count {
        let p0 = points[i];
        let p1 = points[(i + 1) % n];
        let front0 = p0.z >= 0.0;
        let front1 = p1.z >= 0.0;

        if front0 && front1 {
            current.push(p1);
        } else if front0 {
            // Austritt: exakten Schnitt einsetzen, Fragment abschließen
            push_unique(&mut current, plane_crossing(p0, p1));
            fragments.push(std::mem::take(&mut current));
        } else if front1 {
            // Eintritt: neues Fragment am Schnittpunkt beginnen
            current.push(plane_crossing(p0, p1));
            push_unique(&mut current, p1);
        }
    }
    if !current.is_empty() {
        fragments.push(current);
    }

    // Naht eines Rings: endet das letzte Fragment, wo das erste beginnt,
    // ist es derselbe zusammenhängende Bogen
    if wrap && fragments.len() > 1 {
        let seam_joins = {
            let first = &fragments[0];
            let last = fragments.last().unwrap();
            last.last().unwrap().distance(first[0]) < constants::EPSILON
        };
        if seam_joins {
            let mut tail = fragments.pop().unwrap();
            let head = fragments.remove(0);
            tail.extend_from_slice(&head[1..]);
            fragments.insert(0, tail);
        }
    }

    fragments.retain(|fragment| fragment.len() >= 2);
    fragments
}

/// Sutherland–Hodgman-Clip eines geschlossenen Polygons gegen den Halbraum
/// `z ≥ 0`.
///
/// Liefert ein einzelnes geschlossenes Polygon (mit schließendem Duplikat),
/// das die sichtbare Kappe annähert; ein komplett rückseitiges Polygon
/// ergibt eine leere Folge.
pub fn clip_closed(points: &[Point3D]) -> Vec<Point3D> {
    let mut pts = points;
    if pts.len() >= 2 && pts[0].distance(*pts.last().unwrap()) < constants::EPSILON {
        pts = &pts[..pts.len() - 1];
    }
    if pts.is_empty() {
        return Vec::new();
    }

    let mut out: Vec<Point3D> = Vec::with_capacity(pts.len() + 2);
    let mut s = pts[pts.len() - 1];
    for &e in pts {
        let e_front = e.z >= 0.0;
        let s_front = s.z >= 0.0;

        if e_front {
            if !s_front {
                push_unique(&mut out, plane_crossing(s, e));
            }
            push_unique(&mut out, e);
        } else if s_front {
            push_unique(&mut out, plane_crossing(s, e));
        }
        s = e;
    }

    if !out.is_empty() {
        let first = out[0];
        out.push(first);
    }
    out
}
