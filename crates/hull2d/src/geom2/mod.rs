//! Planar hull geometry over generic coordinates.
//!
//! Purpose
//! - Build a counter-clockwise convex hull incrementally (`MelkmanHull`) and
//!   measure its minimal width with rotating calipers (`hull_thickness`).
//! - Every predicate takes two types: the coordinate type `C` and the
//!   computation type `W: Widen<C>` the determinant is evaluated in. Integer
//!   coordinates are exact; floating coordinates carry no tolerance inside the
//!   predicate.
//!
//! Data flow
//! - points → `MelkmanHull::add` → `VertexLoop` → `caliper_sweep` → `ThicknessWitness`.
//!
//! Code cross-refs: `predicate::{area2, orientation}`, `melkman::MelkmanHull`,
//! `calipers::{caliper_sweep, hull_thickness}`, `cfg::THICKNESS_TOL`.

pub mod calipers;
pub mod cfg;
pub mod melkman;
pub mod predicate;
pub mod rand;
mod types;
mod util;

pub use calipers::{
    all_thicknesses, caliper_sweep, hull_thickness, AntipodalPair, CaliperSweep, HullThickness,
    Thickness, ThicknessWitness,
};
pub use melkman::MelkmanHull;
pub use predicate::{area2, orientation, Orientation, Widen};
pub use types::{Coord, Point, VertexLoop};
pub use util::{approx_eq, hull_of_unordered, is_convex_ccw, monotone_chain};
