//! Vertex angles, arc descriptors, and bisector label positions.
//!
//! All three functions take a vertex and its two neighbors and work on the
//! direction vectors (vertex→n1, vertex→n2). None of them re-validate input:
//! a zero-length direction (coincident points) or anti-parallel directions
//! yield NaN, which the upstream collinearity gate rules out.

use std::f64::consts::PI;

use nalgebra::Vector2;

/// Circular arc segment for a renderer: both endpoints lie at `radius` from
/// the vertex the arc was computed at, and the sweep from `start` to `end` is
/// positive (counter-clockwise in screen coordinates) and at most π.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcPath {
    pub start: Vector2<f64>,
    pub end: Vector2<f64>,
    pub radius: f64,
}

/// Interior angle at `vertex` between the directions to `n1` and `n2`.
///
/// Dot-product formula with the cosine clamped to [-1, 1] so floating-point
/// drift cannot push `acos` out of its domain. Range [0, π].
pub fn angle_at(vertex: Vector2<f64>, n1: Vector2<f64>, n2: Vector2<f64>) -> f64 {
    let u = n1 - vertex;
    let v = n2 - vertex;
    let cos = (u.dot(&v) / (u.norm() * v.norm())).clamp(-1.0, 1.0);
    cos.acos()
}

/// Arc of the shorter angular sweep at `vertex`, or `None` when the sweep is
/// below `eps_sweep` (near-zero angle, e.g. a degenerate vertex).
///
/// The signed sweep is normalized into (−π, π]; a negative sweep swaps the
/// start/end directions so the drawn sweep is always positive.
pub fn arc_path_at(
    vertex: Vector2<f64>,
    n1: Vector2<f64>,
    n2: Vector2<f64>,
    radius: f64,
    eps_sweep: f64,
) -> Option<ArcPath> {
    let u = n1 - vertex;
    let v = n2 - vertex;
    let a0 = u.y.atan2(u.x);
    let a1 = v.y.atan2(v.x);
    let mut sweep = a1 - a0;
    while sweep <= -PI {
        sweep += 2.0 * PI;
    }
    while sweep > PI {
        sweep -= 2.0 * PI;
    }
    let (from, sweep) = if sweep < 0.0 { (a1, -sweep) } else { (a0, sweep) };
    if sweep < eps_sweep {
        return None;
    }
    let at = |angle: f64| vertex + Vector2::new(angle.cos(), angle.sin()) * radius;
    Some(ArcPath {
        start: at(from),
        end: at(from + sweep),
        radius,
    })
}

/// Point at `dist` from `vertex` along the internal angle bisector (the
/// normalized sum of the two unit directions). Positions an angle label
/// inside the triangle.
///
/// Anti-parallel directions (180° apart) make the sum a zero vector and the
/// result NaN; known-undefined input, deliberately not special-cased.
pub fn bisector_point(
    vertex: Vector2<f64>,
    n1: Vector2<f64>,
    n2: Vector2<f64>,
    dist: f64,
) -> Vector2<f64> {
    let u = (n1 - vertex).normalize();
    let v = (n2 - vertex).normalize();
    vertex + (u + v).normalize() * dist
}
