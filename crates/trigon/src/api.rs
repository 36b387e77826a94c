//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a stable public API. It is a convenience surface for
//!   project-internal callers; breaking changes are allowed and expected.
//! - Prefer these re-exports for clarity and consistency across tools.

// Triangle measures and classification
pub use crate::tri::{
    angle_at, angle_type, arc_path_at, bisector_point, centroid, distance, is_finite_point,
    is_non_collinear, midpoint, side_type, triangle_area, AngleKind, ArcPath, SideKind, TriCfg,
    Triangle,
};
// Query-string codec
pub use crate::tri::{build_display_query, parse_display_query, QueryPoints};
// Seeded random triangles
pub use crate::tri::rand::{random_triangle_in_box, BoxCfg, ReplayToken as TriReplay};
// Display fitting
pub use crate::fit::{fit_to_box, fit_triangle, FitCfg, Fitted};
