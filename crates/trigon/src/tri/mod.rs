//! Pure triangle geometry over three labeled points.
//!
//! Purpose
//! - Provide the measures a presentation layer needs for exactly three 2D
//!   points: side lengths, interior angles, area, centroid, arc descriptors,
//!   bisector label positions, and classification by side/angle type.
//! - Keep the API minimal and numerically explicit (eps-aware); validity is a
//!   caller-facing gate (`is_finite_point`, `is_non_collinear`), not an
//!   internal guard.
//!
//! Why gate-not-guard
//! - Degenerate input (collinear points, zero-length direction vectors) has
//!   undefined numeric behavior downstream. Callers refuse to proceed past
//!   the gate instead of every function re-checking.

pub mod rand;

mod angles;
mod classify;
mod measure;
mod query;
mod types;

pub use angles::{angle_at, arc_path_at, bisector_point, ArcPath};
pub use classify::{angle_type, side_type, AngleKind, SideKind};
pub use measure::{centroid, distance, is_finite_point, is_non_collinear, midpoint, triangle_area};
pub use query::{build_display_query, parse_display_query, QueryPoints};
pub use types::{TriCfg, Triangle};

#[cfg(test)]
mod tests;
