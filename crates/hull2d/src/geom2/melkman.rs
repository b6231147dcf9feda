//! Incremental convex hull of a simple polyline (Melkman).
//!
//! Model
//! - Points arrive in polyline order; the insertion order drives the algorithm,
//!   there is no pre-sort. For arbitrary point sets use `hull_of_unordered`,
//!   which sorts first (a sorted sequence is a simple polyline).
//! - While all points seen so far are collinear, the hull is the segment between
//!   the two extreme points. The first point off that line closes a triangle.
//! - Closed phase: the deque `[d_b, …, d_t]` satisfies `d_b == d_t` (the last
//!   inserted hull vertex) and `d_b → d_{b+1} → … → d_t` is counter-clockwise
//!   with every turn strictly left. A new point left of or on both end edges is
//!   inside; otherwise the back and the front are popped until the turn into the
//!   new point is strictly left, and the point is pushed at both ends.
//!
//! Cost
//! - Each point is pushed at most twice and popped at most twice: amortized O(1)
//!   per `add`.

use std::collections::VecDeque;
use std::marker::PhantomData;

use super::calipers::{hull_thickness, Thickness, ThicknessWitness};
use super::predicate::{dot2, orientation, Orientation, Widen};
use super::types::{Coord, Point, VertexLoop};
use crate::error::HullError;

/// Counter-clockwise convex hull maintained under point insertion.
///
/// `C` is the coordinate type, `W` the computation type of the orientation
/// determinant (e.g. `MelkmanHull<i32, i128>`, `MelkmanHull<f64, f64>`).
#[derive(Clone, Debug)]
pub struct MelkmanHull<C: Coord, W> {
    dq: VecDeque<Point<C>>,
    closed: bool,
    _wide: PhantomData<fn() -> W>,
}

impl<C: Coord, W: Widen<C>> Default for MelkmanHull<C, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Coord, W: Widen<C>> MelkmanHull<C, W> {
    pub fn new() -> Self {
        Self {
            dq: VecDeque::new(),
            closed: false,
            _wide: PhantomData,
        }
    }

    /// Hull of `points` fed in iteration order.
    pub fn from_points<I: IntoIterator<Item = Point<C>>>(points: I) -> Self {
        let mut hull = Self::new();
        hull.extend(points);
        hull
    }

    /// Incorporate one point. Returns whether the vertex sequence changed.
    pub fn add(&mut self, p: Point<C>) -> bool {
        if self.closed {
            return self.add_closed(p);
        }
        match self.dq.len() {
            0 => {
                self.dq.push_back(p);
                true
            }
            1 => {
                if self.dq[0] == p {
                    false
                } else {
                    self.dq.push_back(p);
                    true
                }
            }
            _ => self.add_to_segment(p),
        }
    }

    fn add_to_segment(&mut self, p: Point<C>) -> bool {
        let a = self.dq[0];
        let b = self.dq[1];
        match orientation::<C, W>(a, b, p) {
            Orientation::Collinear => {
                let t: W = dot2(a, b, p);
                let len2: W = dot2(a, b, b);
                if t < W::ZERO {
                    self.dq[0] = p;
                    true
                } else if t > len2 {
                    self.dq[1] = p;
                    true
                } else {
                    false
                }
            }
            turn => {
                let (first, second) = if turn == Orientation::Left {
                    (a, b)
                } else {
                    (b, a)
                };
                self.dq.clear();
                self.dq.extend([p, first, second, p]);
                self.closed = true;
                tracing::trace!("hull closed into a triangle");
                true
            }
        }
    }

    fn add_closed(&mut self, p: Point<C>) -> bool {
        let n = self.dq.len();
        let inside_front = orientation::<C, W>(self.dq[0], self.dq[1], p) != Orientation::Right;
        let inside_back =
            orientation::<C, W>(self.dq[n - 2], self.dq[n - 1], p) != Orientation::Right;
        if inside_front && inside_back {
            return false;
        }
        while self.dq.len() > 2 {
            let n = self.dq.len();
            if orientation::<C, W>(self.dq[n - 2], self.dq[n - 1], p) == Orientation::Left {
                break;
            }
            self.dq.pop_back();
        }
        self.dq.push_back(p);
        while self.dq.len() > 3 {
            if orientation::<C, W>(self.dq[0], self.dq[1], p) == Orientation::Left {
                break;
            }
            self.dq.pop_front();
        }
        self.dq.push_front(p);
        true
    }

    /// Offset of the first visible vertex: the closed deque repeats its back at the front.
    #[inline]
    fn offset(&self) -> usize {
        usize::from(self.closed)
    }

    /// Number of hull vertices (0, 1, 2 while degenerate, otherwise at least 3).
    #[inline]
    pub fn len(&self) -> usize {
        self.dq.len() - self.offset()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dq.is_empty()
    }

    /// True while the hull is empty, a point, or a segment.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !self.closed
    }

    /// Vertices in counter-clockwise order; restartable by cloning.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Point<C>> + Clone + '_ {
        self.dq.range(self.offset()..).copied()
    }

    pub fn to_vec(&self) -> Vec<Point<C>> {
        self.iter().collect()
    }

    pub fn clear(&mut self) {
        self.dq.clear();
        self.closed = false;
    }

    /// Minimal width under `metric`; see `calipers::hull_thickness`.
    pub fn thickness(&self, metric: Thickness) -> Result<ThicknessWitness<C>, HullError> {
        hull_thickness::<C, W, Self>(self, metric)
    }
}

impl<C: Coord, W: Widen<C>> VertexLoop<C> for MelkmanHull<C, W> {
    #[inline]
    fn len(&self) -> usize {
        MelkmanHull::len(self)
    }
    #[inline]
    fn vertex(&self, i: usize) -> Point<C> {
        self.dq[self.offset() + i % MelkmanHull::len(self)]
    }
}

impl<C: Coord, W: Widen<C>> Extend<Point<C>> for MelkmanHull<C, W> {
    fn extend<I: IntoIterator<Item = Point<C>>>(&mut self, iter: I) {
        for p in iter {
            self.add(p);
        }
    }
}

impl<C: Coord, W: Widen<C>> FromIterator<Point<C>> for MelkmanHull<C, W> {
    fn from_iter<I: IntoIterator<Item = Point<C>>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}
