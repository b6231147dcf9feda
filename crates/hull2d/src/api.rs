//! Curated API surface.
//!
//! Prefer these re-exports in binaries and benches; internal module paths may
//! move.

// Predicate
pub use crate::geom2::{area2, orientation, Coord, Orientation, Point, VertexLoop, Widen};
// Hull construction
pub use crate::geom2::{hull_of_unordered, is_convex_ccw, monotone_chain, MelkmanHull};
// Thickness
pub use crate::geom2::cfg::THICKNESS_TOL;
pub use crate::geom2::{
    all_thicknesses, approx_eq, caliper_sweep, hull_thickness, AntipodalPair, HullThickness,
    Thickness, ThicknessWitness,
};
// Errors
pub use crate::error::HullError;
// Random inputs
pub use crate::geom2::rand::{
    draw_lattice_cloud, draw_star_polyline, ReplayToken, StarCfg, VertexCount,
};
