//! Basic 2D types: points and cyclic vertex access.
//!
//! - `Point<C>`: alias of `nalgebra::Point2<C>`; equality is exact.
//! - `VertexLoop<C>`: index-addressed closed polygon, `vertex(i)` wraps modulo `len()`.

use nalgebra::{Point2, Scalar};

/// Planar point over coordinate type `C`.
pub type Point<C> = Point2<C>;

/// Coordinate types usable in hulls (integers and floats).
pub trait Coord: Scalar + Copy {}

impl<T: Scalar + Copy> Coord for T {}

/// Closed polygon addressed by index; the vertex after the last one is the first.
///
/// The analyzer only needs `len` and `vertex`, so hulls, slices and vectors are
/// all swept in place without copying or duplicating the closing vertex.
pub trait VertexLoop<C: Coord> {
    fn len(&self) -> usize;

    /// Vertex `i mod len()`. Panics on an empty loop.
    fn vertex(&self, i: usize) -> Point<C>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: Coord> VertexLoop<C> for [Point<C>] {
    #[inline]
    fn len(&self) -> usize {
        <[Point<C>]>::len(self)
    }
    #[inline]
    fn vertex(&self, i: usize) -> Point<C> {
        self[i % <[Point<C>]>::len(self)]
    }
}

impl<C: Coord> VertexLoop<C> for Vec<Point<C>> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
    #[inline]
    fn vertex(&self, i: usize) -> Point<C> {
        self[i % Vec::len(self)]
    }
}
