//! Triangle geometry core: measures, classification, and display fitting.
//!
//! Two leaf modules compose the crate:
//! - `tri`: pure functions over three labeled points — side lengths, interior
//!   angles, area, centroid, arc descriptors for angle visualization,
//!   classification by side/angle type, seeded random generation, and a
//!   compact query-string codec.
//! - `fit`: maps an arbitrary point set into a fixed square with padding,
//!   preserving aspect ratio via a single uniform scale.
//!
//! Every operation is a synchronous pure function over immutable inputs. The
//! crate owns no storage and performs no I/O; persistence of triangles lives
//! in the application layer (see the `cli` crate's store).
//!
//! Validity is gated, not guarded: callers check `is_finite_point` and
//! `is_non_collinear` before trusting derived geometry. Downstream functions
//! do not re-validate and have undefined numeric behavior on degenerate
//! input.

pub mod api;
pub mod fit;
pub mod tri;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so callers can write `trigon::Vec2`.
pub use nalgebra::Vector2 as Vec2;
pub use tri::{TriCfg, Triangle};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::fit::{fit_to_box, fit_triangle, FitCfg, Fitted};
    pub use crate::tri::rand::{random_triangle_in_box, BoxCfg, ReplayToken};
    pub use crate::tri::{
        angle_at, angle_type, arc_path_at, bisector_point, build_display_query, centroid,
        distance, is_finite_point, is_non_collinear, midpoint, parse_display_query, side_type,
        triangle_area, AngleKind, ArcPath, QueryPoints, SideKind, TriCfg, Triangle,
    };
    pub use nalgebra::Vector2 as Vec2;
}
