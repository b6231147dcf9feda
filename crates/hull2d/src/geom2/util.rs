use std::cmp::Ordering;

use super::cfg::THICKNESS_TOL;
use super::melkman::MelkmanHull;
use super::predicate::{orientation, Orientation, Widen};
use super::types::{Coord, Point, VertexLoop};

/// `|a − b| <= THICKNESS_TOL`.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= THICKNESS_TOL
}

#[inline]
fn lex_cmp<C: Coord + PartialOrd>(a: &Point<C>, b: &Point<C>) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

fn sorted_unique<C: Coord + PartialOrd>(points: &[Point<C>]) -> Vec<Point<C>> {
    let mut pts = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    pts
}

/// Hull of an arbitrary point set: lexicographic sort, then Melkman.
///
/// The sorted sequence is an x-monotone, hence simple, polyline.
pub fn hull_of_unordered<C, W>(points: &[Point<C>]) -> MelkmanHull<C, W>
where
    C: Coord + PartialOrd,
    W: Widen<C>,
{
    MelkmanHull::from_points(sorted_unique(points))
}

/// Andrew's monotone chain (CCW, starting at the lexicographically smallest point).
///
/// Reference hull for arbitrary point sets; collinear boundary points are dropped.
pub fn monotone_chain<C, W>(points: &[Point<C>]) -> Vec<Point<C>>
where
    C: Coord + PartialOrd,
    W: Widen<C>,
{
    let pts = sorted_unique(points);
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<Point<C>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2
            && orientation::<C, W>(lower[lower.len() - 2], lower[lower.len() - 1], *p)
                != Orientation::Left
        {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point<C>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2
            && orientation::<C, W>(upper[upper.len() - 2], upper[upper.len() - 1], *p)
                != Orientation::Left
        {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// Every consecutive triple of the loop turns strictly left.
pub fn is_convex_ccw<C, W, L>(hull: &L) -> bool
where
    C: Coord,
    W: Widen<C>,
    L: VertexLoop<C> + ?Sized,
{
    let n = hull.len();
    n >= 3
        && (0..n).all(|i| {
            orientation::<C, W>(hull.vertex(i), hull.vertex(i + 1), hull.vertex(i + 2))
                == Orientation::Left
        })
}
