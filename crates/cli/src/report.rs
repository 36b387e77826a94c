//! Plain-data presentation payload for a validated triangle.
//!
//! Everything a renderer needs, already computed: fitted points and scale,
//! per-vertex angle with arc descriptor and bisector label position, side
//! lengths, perimeter, area, centroid, and the two classification labels.
//! Label strings are resolved here, at the presentation boundary; the
//! geometry core only knows the enums.

use serde::Serialize;
use trigon::fit::{fit_triangle, FitCfg};
use trigon::tri::{arc_path_at, bisector_point, AngleKind, SideKind};
use trigon::{TriCfg, Triangle, Vec2};

/// Arc radius for the angle visualizations, in fitted-box units.
const ARC_RADIUS: f64 = 36.0;
/// Distance of the angle label from its vertex along the bisector.
const LABEL_DIST: f64 = 58.0;

#[derive(Debug, Serialize)]
pub struct PointOut {
    pub x: f64,
    pub y: f64,
}

impl From<Vec2<f64>> for PointOut {
    fn from(v: Vec2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// One vertex of the fitted triangle, ready to annotate.
#[derive(Debug, Serialize)]
pub struct VertexOut {
    pub label: &'static str,
    pub at: PointOut,
    /// Interior angle in radians.
    pub angle: f64,
    /// Absent when the angle sweep is below the arc threshold.
    pub arc: Option<ArcOut>,
    /// Label anchor along the internal bisector.
    pub label_at: PointOut,
}

#[derive(Debug, Serialize)]
pub struct ArcOut {
    pub start: PointOut,
    pub end: PointOut,
    pub radius: f64,
}

#[derive(Debug, Serialize)]
pub struct TriangleReport {
    /// Input vertices, untransformed.
    pub input: [PointOut; 3],
    /// Vertices mapped into the display box.
    pub fitted: [VertexOut; 3],
    /// Uniform scale applied by the fit.
    pub scale: f64,
    /// Side lengths opposite A, B, C, in input units.
    pub sides: [f64; 3],
    pub perimeter: f64,
    pub area: f64,
    pub centroid: PointOut,
    pub side_kind: &'static str,
    pub angle_kind: &'static str,
}

pub fn side_label(kind: SideKind) -> &'static str {
    match kind {
        SideKind::Equilateral => "equilateral",
        SideKind::Isosceles => "isosceles",
        SideKind::Scalene => "scalene",
    }
}

pub fn angle_label(kind: AngleKind) -> &'static str {
    match kind {
        AngleKind::Right => "right",
        AngleKind::Acute => "acute",
        AngleKind::Obtuse => "obtuse",
    }
}

/// Assemble the full payload for a triangle that has already passed the
/// finiteness and collinearity gates.
pub fn build_report(tri: &Triangle, cfg: TriCfg, fit_cfg: FitCfg) -> TriangleReport {
    let (disp, scale) = fit_triangle(tri, fit_cfg);
    let angles = disp.angles();
    let labels = ["A", "B", "C"];
    let verts = disp.vertices();
    let fitted: [VertexOut; 3] = std::array::from_fn(|i| {
        let vertex = verts[i];
        let n1 = verts[(i + 1) % 3];
        let n2 = verts[(i + 2) % 3];
        VertexOut {
            label: labels[i],
            at: vertex.into(),
            angle: angles[i],
            arc: arc_path_at(vertex, n1, n2, ARC_RADIUS, cfg.eps_arc).map(|a| ArcOut {
                start: a.start.into(),
                end: a.end.into(),
                radius: a.radius,
            }),
            label_at: bisector_point(vertex, n1, n2, LABEL_DIST).into(),
        }
    });
    TriangleReport {
        input: tri.vertices().map(PointOut::from),
        fitted,
        scale,
        sides: tri.side_lengths(),
        perimeter: tri.perimeter(),
        area: tri.area(),
        centroid: tri.centroid().into(),
        side_kind: side_label(tri.side_kind(cfg)),
        angle_kind: angle_label(tri.angle_kind(cfg)),
    }
}
