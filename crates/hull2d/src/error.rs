//! Error types for hull queries.
//!
//! Only the query phase can fail; `MelkmanHull::add` accepts every point.
//! Arithmetic overflow is ruled out at the type level instead: a coordinate
//! type can only be paired with a computation type that implements
//! [`Widen`](crate::geom2::Widen) for it, and no such impl exists for pairs
//! that cannot evaluate the orientation determinant exactly.

use thiserror::Error;

/// Failure of a thickness or caliper query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HullError {
    /// Fewer than three vertices, a repeated vertex, or all vertices on one line.
    #[error("degenerate hull ({vertices} vertices): need at least 3 distinct, non-collinear vertices")]
    DegenerateHull { vertices: usize },
}
