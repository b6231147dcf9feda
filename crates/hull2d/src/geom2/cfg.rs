//! Tolerance defaults for floating thickness results.
//!
//! Policy
//! - The predicates and the analyzer never round; tolerances only apply where
//!   callers compare results. Values are fixed constants to avoid tolerance
//!   juggling at call sites.

/// Absolute band for comparing floating widths (`approx_eq`).
pub const THICKNESS_TOL: f64 = 1e-7;
