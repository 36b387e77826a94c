//! Fit an arbitrary point set into a fixed square with padding.
//!
//! A single uniform scale (the smaller of the per-axis fits) preserves the
//! shape's proportions; each point is then translated so the bounding box's
//! minimum corner lands at `(padding, padding)`.
//!
//! Degenerate policy: a bounding-box extent below 1 is floored to 1 before
//! the scale division. All points sharing an x (or y) coordinate therefore
//! produce a very large scale on that axis instead of a division by zero.
//! Kept verbatim for compatibility with existing renderings.

use nalgebra::Vector2;

use crate::tri::Triangle;

/// Target square and interior margin.
#[derive(Clone, Copy, Debug)]
pub struct FitCfg {
    pub size: f64,
    pub padding: f64,
}

impl Default for FitCfg {
    fn default() -> Self {
        Self {
            size: 800.0,
            padding: 32.0,
        }
    }
}

/// Scaled/translated copy of the input points plus the uniform scale used.
#[derive(Clone, Debug, PartialEq)]
pub struct Fitted {
    pub mapped: Vec<Vector2<f64>>,
    pub scale: f64,
}

/// Map `points` into `[padding, size − padding]²` with a uniform scale.
pub fn fit_to_box(points: &[Vector2<f64>], cfg: FitCfg) -> Fitted {
    let mut min = Vector2::new(f64::INFINITY, f64::INFINITY);
    let mut max = Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    let inner = cfg.size - 2.0 * cfg.padding;
    let w = (max.x - min.x).max(1.0);
    let h = (max.y - min.y).max(1.0);
    let scale = (inner / w).min(inner / h);
    let mapped = points
        .iter()
        .map(|p| {
            Vector2::new(
                (p.x - min.x) * scale + cfg.padding,
                (p.y - min.y) * scale + cfg.padding,
            )
        })
        .collect();
    Fitted { mapped, scale }
}

/// Fit a triangle's three vertices; returns the derived triangle and scale.
///
/// A pure derivation of the input: recompute whenever the source triangle
/// changes, never mutate in place.
pub fn fit_triangle(tri: &Triangle, cfg: FitCfg) -> (Triangle, f64) {
    let Fitted { mapped, scale } = fit_to_box(&tri.vertices(), cfg);
    (Triangle::new(mapped[0], mapped[1], mapped[2]), scale)
}
