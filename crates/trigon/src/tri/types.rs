//! Triangle value type and tolerance configuration.
//!
//! - `TriCfg`: centralizes the epsilons for the collinearity gate, the
//!   side/angle classification ties, and the minimum arc sweep.
//! - `Triangle`: three points labeled A, B, C by role, value semantics only.

use nalgebra::Vector2;

use super::classify::{angle_type, side_type, AngleKind, SideKind};
use super::measure::{centroid, distance, is_finite_point, is_non_collinear, triangle_area};

/// Geometry tolerances.
#[derive(Clone, Copy, Debug)]
pub struct TriCfg {
    /// Minimum area for three points to count as a real triangle.
    pub eps_area: f64,
    /// Slack for side-length and squared-length ties in classification.
    pub eps_len: f64,
    /// Minimum angular sweep below which no arc is emitted.
    pub eps_arc: f64,
}

impl Default for TriCfg {
    fn default() -> Self {
        Self {
            eps_area: 1e-6,
            eps_len: 1e-6,
            eps_arc: 1e-3,
        }
    }
}

/// Three labeled vertices. Compared by value, never by identity.
///
/// Invariant (caller-validated): the points are non-collinear, i.e.
/// `is_non_collinear(a, b, c, cfg.eps_area)` holds before any angle, arc, or
/// bisector computation is trusted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
    pub c: Vector2<f64>,
}

impl Triangle {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Self {
        Self { a, b, c }
    }

    /// Vertices in label order A, B, C.
    #[inline]
    pub fn vertices(&self) -> [Vector2<f64>; 3] {
        [self.a, self.b, self.c]
    }

    /// Side lengths `[|BC|, |CA|, |AB|]`, each opposite the same-index vertex.
    #[inline]
    pub fn side_lengths(&self) -> [f64; 3] {
        [
            distance(self.b, self.c),
            distance(self.c, self.a),
            distance(self.a, self.b),
        ]
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        let [bc, ca, ab] = self.side_lengths();
        bc + ca + ab
    }

    #[inline]
    pub fn area(&self) -> f64 {
        triangle_area(self.a, self.b, self.c)
    }

    #[inline]
    pub fn centroid(&self) -> Vector2<f64> {
        centroid(self.a, self.b, self.c)
    }

    /// Interior angles `[∠A, ∠B, ∠C]` in radians; sums to π for valid input.
    pub fn angles(&self) -> [f64; 3] {
        [
            super::angle_at(self.a, self.b, self.c),
            super::angle_at(self.b, self.c, self.a),
            super::angle_at(self.c, self.a, self.b),
        ]
    }

    /// True iff all three vertices have finite coordinates.
    #[inline]
    pub fn is_finite(&self) -> bool {
        is_finite_point(self.a) && is_finite_point(self.b) && is_finite_point(self.c)
    }

    /// The sole validity gate: area must exceed `cfg.eps_area`.
    #[inline]
    pub fn is_non_collinear(&self, cfg: TriCfg) -> bool {
        is_non_collinear(self.a, self.b, self.c, cfg.eps_area)
    }

    #[inline]
    pub fn side_kind(&self, cfg: TriCfg) -> SideKind {
        let [bc, ca, ab] = self.side_lengths();
        side_type(bc, ca, ab, cfg.eps_len)
    }

    #[inline]
    pub fn angle_kind(&self, cfg: TriCfg) -> AngleKind {
        let [bc, ca, ab] = self.side_lengths();
        angle_type(bc, ca, ab, cfg.eps_len)
    }
}

/// Fixed fallback triangle: used when random generation exhausts its try
/// budget and as the absent-state default in callers.
impl Default for Triangle {
    fn default() -> Self {
        Self {
            a: Vector2::new(100.0, 100.0),
            b: Vector2::new(700.0, 120.0),
            c: Vector2::new(420.0, 650.0),
        }
    }
}
