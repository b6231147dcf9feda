//! Rotating calipers: antipodal pairs and minimal width of a convex polygon.
//!
//! Model
//! - Edges `(v_i, v_{i+1})` are visited in loop order, `i = 0..n`. For each edge
//!   the antipodal index `j` (unwrapped, `i + 1 ≤ j < i + n`) is advanced while
//!   the next vertex is strictly farther from the edge line. `j` never moves
//!   back, so a full sweep costs O(n). Equidistant opposite vertices keep the
//!   earlier one.
//! - Farther is decided on the exact determinant `area2` in the computation type
//!   `W`. Both metrics divide that determinant by a per-edge constant, so the
//!   antipodal vertex is the same for both; only the reported width differs.
//!
//! Metrics for an edge with extent `(dx, dy)` and `A = |area2|`
//! - `HorizontalVertical`: `A / max(|dx|, |dy|)`, the smaller of the horizontal
//!   and the vertical distance from the antipodal vertex to the edge line.
//! - `Euclidean`: `A / sqrt(dx² + dy²)`, the perpendicular distance.
//!
//! Results are unrounded `f64`; compare them with `approx_eq`.

use std::marker::PhantomData;

use super::predicate::{area2, orientation, Orientation, Widen};
use super::types::{Coord, Point, VertexLoop};
use crate::error::HullError;

/// Width definition used by the analyzer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Thickness {
    /// Axis-aligned (digital) thickness.
    HorizontalVertical,
    /// Perpendicular distance.
    Euclidean,
}

impl Thickness {
    pub const ALL: [Thickness; 2] = [Thickness::HorizontalVertical, Thickness::Euclidean];

    /// Per-edge divisor turning `|area2|` into a width.
    #[inline]
    fn edge_scale(self, dx: f64, dy: f64) -> f64 {
        match self {
            Thickness::HorizontalVertical => dx.abs().max(dy.abs()),
            Thickness::Euclidean => (dx * dx + dy * dy).sqrt(),
        }
    }

    /// Distance from `s` to the line through `p → q` under this metric.
    pub fn width<C: Coord, W: Widen<C>>(self, p: Point<C>, q: Point<C>, s: Point<C>) -> f64 {
        let area = area2::<C, W>(p, q, s).magnitude().to_f64();
        let dx = (W::widen(q.x) - W::widen(p.x)).to_f64();
        let dy = (W::widen(q.y) - W::widen(p.y)).to_f64();
        area / self.edge_scale(dx, dy)
    }
}

/// Minimal width and the hull vertices certifying it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThicknessWitness<C: Coord> {
    pub width: f64,
    /// Start of the supporting edge.
    pub p: Point<C>,
    /// End of the supporting edge.
    pub q: Point<C>,
    /// Antipodal vertex.
    pub s: Point<C>,
    /// Loop index of `p`.
    pub edge: usize,
    /// Loop index of `s` (in `0..n`).
    pub antipode: usize,
}

/// Both metrics from a single sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullThickness<C: Coord> {
    pub horizontal_vertical: ThicknessWitness<C>,
    pub euclidean: ThicknessWitness<C>,
}

impl<C: Coord> HullThickness<C> {
    #[inline]
    pub fn get(&self, metric: Thickness) -> &ThicknessWitness<C> {
        match metric {
            Thickness::HorizontalVertical => &self.horizontal_vertical,
            Thickness::Euclidean => &self.euclidean,
        }
    }
}

/// Edge `edge` and its antipodal vertex, as unwrapped loop indices.
///
/// `antipode` lies in `edge + 1 .. edge + n`; the vertex is `antipode % n`.
/// Across a sweep `antipode` is non-decreasing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AntipodalPair {
    pub edge: usize,
    pub antipode: usize,
}

/// Iterator over the `n` (edge, antipodal vertex) pairs of a convex loop.
pub struct CaliperSweep<'a, C: Coord, W, L: ?Sized> {
    hull: &'a L,
    n: usize,
    edge: usize,
    antipode: usize,
    _types: PhantomData<fn() -> (C, W)>,
}

impl<'a, C, W, L> Iterator for CaliperSweep<'a, C, W, L>
where
    C: Coord,
    W: Widen<C>,
    L: VertexLoop<C> + ?Sized,
{
    type Item = AntipodalPair;

    fn next(&mut self) -> Option<AntipodalPair> {
        if self.edge >= self.n {
            return None;
        }
        let i = self.edge;
        let a = self.hull.vertex(i);
        let b = self.hull.vertex(i + 1);
        self.antipode = self.antipode.max(i + 1);
        let mut far: W = area2(a, b, self.hull.vertex(self.antipode));
        while self.antipode + 1 < i + self.n {
            let next: W = area2(a, b, self.hull.vertex(self.antipode + 1));
            if next > far {
                far = next;
                self.antipode += 1;
            } else {
                break;
            }
        }
        self.edge += 1;
        Some(AntipodalPair {
            edge: i,
            antipode: self.antipode,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.n - self.edge;
        (rest, Some(rest))
    }
}

impl<'a, C, W, L> ExactSizeIterator for CaliperSweep<'a, C, W, L>
where
    C: Coord,
    W: Widen<C>,
    L: VertexLoop<C> + ?Sized,
{
}

fn check_polygon<C, W, L>(hull: &L) -> Result<(), HullError>
where
    C: Coord,
    W: Widen<C>,
    L: VertexLoop<C> + ?Sized,
{
    let n = hull.len();
    let degenerate = HullError::DegenerateHull { vertices: n };
    if n < 3 {
        return Err(degenerate);
    }
    if (0..n).any(|i| hull.vertex(i) == hull.vertex(i + 1)) {
        return Err(degenerate);
    }
    let a = hull.vertex(0);
    let b = hull.vertex(1);
    if (2..n).all(|k| orientation::<C, W>(a, b, hull.vertex(k)) == Orientation::Collinear) {
        return Err(degenerate);
    }
    Ok(())
}

/// Antipodal pairs of a convex counter-clockwise loop.
///
/// Errors with `DegenerateHull` for fewer than 3 vertices, a repeated
/// consecutive vertex, or an all-collinear loop. Convexity itself is a
/// precondition and is not checked (see `is_convex_ccw`).
pub fn caliper_sweep<C, W, L>(hull: &L) -> Result<CaliperSweep<'_, C, W, L>, HullError>
where
    C: Coord,
    W: Widen<C>,
    L: VertexLoop<C> + ?Sized,
{
    check_polygon::<C, W, L>(hull)?;
    Ok(CaliperSweep {
        hull,
        n: hull.len(),
        edge: 0,
        antipode: 1,
        _types: PhantomData,
    })
}

/// Minimal width of a convex loop under `metric`, with its witness triple.
///
/// The first edge in loop order reaching the minimum wins ties.
pub fn hull_thickness<C, W, L>(
    hull: &L,
    metric: Thickness,
) -> Result<ThicknessWitness<C>, HullError>
where
    C: Coord,
    W: Widen<C>,
    L: VertexLoop<C> + ?Sized,
{
    let n = hull.len();
    let mut best: Option<ThicknessWitness<C>> = None;
    for pair in caliper_sweep::<C, W, L>(hull)? {
        let candidate = witness::<C, W, L>(hull, pair, metric);
        if best.map_or(true, |b| candidate.width < b.width) {
            best = Some(candidate);
        }
    }
    let found = best.ok_or(HullError::DegenerateHull { vertices: n })?;
    tracing::debug!(
        ?metric,
        width = found.width,
        edge = found.edge,
        antipode = found.antipode,
        "hull thickness"
    );
    Ok(found)
}

/// `HorizontalVertical` and `Euclidean` thickness from one caliper sweep.
pub fn all_thicknesses<C, W, L>(hull: &L) -> Result<HullThickness<C>, HullError>
where
    C: Coord,
    W: Widen<C>,
    L: VertexLoop<C> + ?Sized,
{
    let n = hull.len();
    let mut hv: Option<ThicknessWitness<C>> = None;
    let mut eu: Option<ThicknessWitness<C>> = None;
    for pair in caliper_sweep::<C, W, L>(hull)? {
        let slots = [
            (&mut hv, Thickness::HorizontalVertical),
            (&mut eu, Thickness::Euclidean),
        ];
        for (slot, metric) in slots {
            let candidate = witness::<C, W, L>(hull, pair, metric);
            if slot.map_or(true, |b| candidate.width < b.width) {
                *slot = Some(candidate);
            }
        }
    }
    match (hv, eu) {
        (Some(horizontal_vertical), Some(euclidean)) => Ok(HullThickness {
            horizontal_vertical,
            euclidean,
        }),
        _ => Err(HullError::DegenerateHull { vertices: n }),
    }
}

#[inline]
fn witness<C, W, L>(hull: &L, pair: AntipodalPair, metric: Thickness) -> ThicknessWitness<C>
where
    C: Coord,
    W: Widen<C>,
    L: VertexLoop<C> + ?Sized,
{
    let p = hull.vertex(pair.edge);
    let q = hull.vertex(pair.edge + 1);
    let s = hull.vertex(pair.antipode);
    ThicknessWitness {
        width: metric.width::<C, W>(p, q, s),
        p,
        q,
        s,
        edge: pair.edge,
        antipode: pair.antipode % hull.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_right_triangle() -> Vec<Point<i32>> {
        vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]
    }

    #[test]
    fn sweep_visits_every_edge_once() {
        let tri = unit_right_triangle();
        let pairs: Vec<_> = caliper_sweep::<i32, i128, _>(&tri[..]).unwrap().collect();
        assert_eq!(
            pairs,
            vec![
                AntipodalPair { edge: 0, antipode: 2 },
                AntipodalPair { edge: 1, antipode: 3 },
                AntipodalPair { edge: 2, antipode: 4 },
            ]
        );
    }

    #[test]
    fn parallel_opposite_edge_keeps_first_vertex() {
        // rectangle: the edge opposite (0,0)→(4,0) is parallel; (4,2) comes first
        let rect = vec![
            Point::new(0, 0),
            Point::new(4, 0),
            Point::new(4, 2),
            Point::new(0, 2),
        ];
        let w = hull_thickness::<i32, i128, _>(&rect, Thickness::Euclidean).unwrap();
        assert_eq!(w.width, 2.0);
        assert_eq!((w.p, w.q, w.s), (rect[0], rect[1], rect[2]));
        assert_eq!((w.edge, w.antipode), (0, 2));
    }

    #[test]
    fn metrics_differ_on_slanted_edges() {
        // triangle with a 45° edge: HV divides by max(|dx|,|dy|), Euclidean by the norm
        let p = Point::new(0, 0);
        let q = Point::new(2, 2);
        let s = Point::new(2, 0);
        assert_eq!(Thickness::HorizontalVertical.width::<i32, i128>(p, q, s), 2.0);
        let e = Thickness::Euclidean.width::<i32, i128>(p, q, s);
        assert!((e - 2.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn degenerate_loops_are_rejected() {
        let empty: Vec<Point<i32>> = Vec::new();
        let err = hull_thickness::<i32, i128, _>(&empty, Thickness::Euclidean).unwrap_err();
        assert_eq!(err, HullError::DegenerateHull { vertices: 0 });

        let segment = vec![Point::new(0, 0), Point::new(3, 1)];
        assert!(caliper_sweep::<i32, i128, _>(&segment).is_err());

        let collinear = vec![Point::new(0, 0), Point::new(1, 1), Point::new(3, 3)];
        assert_eq!(
            all_thicknesses::<i32, i128, _>(&collinear).unwrap_err(),
            HullError::DegenerateHull { vertices: 3 }
        );

        let repeated = vec![
            Point::new(0, 0),
            Point::new(0, 0),
            Point::new(1, 1),
            Point::new(0, 1),
        ];
        assert!(hull_thickness::<i32, i128, _>(&repeated, Thickness::HorizontalVertical).is_err());
    }

    #[test]
    fn combined_sweep_matches_single_metric_calls() {
        let hex = vec![
            Point::new(0, 0),
            Point::new(3, -1),
            Point::new(6, 1),
            Point::new(7, 4),
            Point::new(3, 6),
            Point::new(-1, 3),
        ];
        let both = all_thicknesses::<i32, i128, _>(&hex).unwrap();
        for metric in Thickness::ALL {
            let single = hull_thickness::<i32, i128, _>(&hex, metric).unwrap();
            assert_eq!(*both.get(metric), single);
        }
    }
}
