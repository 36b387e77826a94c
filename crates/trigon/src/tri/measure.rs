use nalgebra::Vector2;

/// Euclidean distance between two points.
#[inline]
pub fn distance(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    (q - p).norm()
}

/// Componentwise average of two points.
#[inline]
pub fn midpoint(p: Vector2<f64>, q: Vector2<f64>) -> Vector2<f64> {
    (p + q) * 0.5
}

/// Shoelace area of the triangle (a, b, c), absolute value halved.
#[inline]
pub fn triangle_area(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)).abs() * 0.5
}

/// The sole validity gate for "is this a real triangle": area above `eps`.
#[inline]
pub fn is_non_collinear(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, eps: f64) -> bool {
    triangle_area(a, b, c) > eps
}

/// Arithmetic mean of the three vertices.
#[inline]
pub fn centroid(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Vector2<f64> {
    (a + b + c) / 3.0
}

/// First-line input validator: rejects NaN and ±infinity coordinates.
///
/// Checked before collinearity is even evaluated; the rest of the module does
/// not guard against non-finite propagation.
#[inline]
pub fn is_finite_point(p: Vector2<f64>) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
