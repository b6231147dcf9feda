//! Planar convex hulls built point by point, and their caliper thickness.
//!
//! Layout
//! - `geom2::predicate`: orientation test with an explicit computation ("wide") type.
//! - `geom2::melkman`: incremental hull over a simple polyline (Melkman).
//! - `geom2::calipers`: rotating-caliper sweep and minimal width under two metrics.
//! - `geom2::rand`: reproducible point streams for tests and benches.
//!
//! API Policy
//! - `api` and `prelude` are the curated import surfaces; module paths below them
//!   may move between versions.

pub mod api;
pub mod error;
pub mod geom2;

pub use error::HullError;
pub use geom2::{MelkmanHull, Point, Thickness, ThicknessWitness};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::HullError;
    pub use crate::geom2::rand::{draw_lattice_cloud, draw_star_polyline, ReplayToken, StarCfg};
    pub use crate::geom2::{
        all_thicknesses, caliper_sweep, hull_of_unordered, hull_thickness, orientation,
        AntipodalPair, Coord, HullThickness, MelkmanHull, Orientation, Point, Thickness,
        ThicknessWitness, VertexLoop, Widen,
    };
}
