//! Monotone cubic interpolation in x (Steffen's method) as SVG path data.
//!
//! The curve passes through every sample and never overshoots between two
//! neighbouring samples, so a daily temperature line stays inside the range
//! of the readings it connects.

use crate::format::fmt_coord;

fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Tangent at the middle of three points.
fn slope3(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    let s0 = (p1.1 - p0.1) / if h0 != 0.0 { h0 } else { h1.signum() * -0.0 };
    let s1 = (p2.1 - p1.1) / if h1 != 0.0 { h1 } else { h0.signum() * -0.0 };
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_finite() {
        t
    } else {
        0.0
    }
}

/// One-sided tangent at an end point, given the tangent at its neighbour.
fn slope2(p0: (f64, f64), p1: (f64, f64), t: f64) -> f64 {
    let h = p1.0 - p0.0;
    if h != 0.0 {
        (3.0 * (p1.1 - p0.1) / h - t) / 2.0
    } else {
        t
    }
}

/// Path data through `points`, which must be sorted by x.
///
/// Coincident consecutive points are collapsed. One point yields a bare
/// move, two yield a straight segment.
pub fn monotone_x(points: &[(f64, f64)]) -> String {
    let mut pts: Vec<(f64, f64)> = Vec::with_capacity(points.len());
    for &p in points {
        if pts.last() != Some(&p) {
            pts.push(p);
        }
    }

    let coord = |p: (f64, f64)| format!("{},{}", fmt_coord(p.0), fmt_coord(p.1));
    match pts.len() {
        0 => return String::new(),
        1 => return format!("M{}", coord(pts[0])),
        2 => return format!("M{}L{}", coord(pts[0]), coord(pts[1])),
        _ => {}
    }

    let n = pts.len();
    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        tangents[i] = slope3(pts[i - 1], pts[i], pts[i + 1]);
    }
    tangents[0] = slope2(pts[0], pts[1], tangents[1]);
    tangents[n - 1] = slope2(pts[n - 2], pts[n - 1], tangents[n - 2]);

    let mut d = format!("M{}", coord(pts[0]));
    for i in 0..n - 1 {
        let (x0, y0) = pts[i];
        let (x1, y1) = pts[i + 1];
        let dx = (x1 - x0) / 3.0;
        d.push_str(&format!(
            "C{},{},{}",
            coord((x0 + dx, y0 + dx * tangents[i])),
            coord((x1 - dx, y1 - dx * tangents[i + 1])),
            coord((x1, y1))
        ));
    }
    d
}
