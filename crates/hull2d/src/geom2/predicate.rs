//! Orientation predicate with an explicit computation type.
//!
//! The determinant `(b − a) × (c − a)` is evaluated in `W`, never in the
//! coordinate type itself. `W: Widen<C>` is implemented only for pairs where the
//! evaluation is exact over the whole coordinate range (integers) or at least as
//! precise as the input (floats).
//!
//! A pair without an impl does not compile:
//!
//! ```compile_fail
//! use hull2d::geom2::{orientation, Point};
//! let p = Point::new(0i64, 0i64);
//! let _ = orientation::<i64, i64>(p, p, p);
//! ```
//!
//! `i32` in `i64` is rejected too: coordinate differences reach 2^32, so the
//! products overflow `i64`.
//!
//! ```compile_fail
//! use hull2d::geom2::{orientation, Point};
//! let p = Point::new(0i32, 0i32);
//! let _ = orientation::<i32, i64>(p, p, p);
//! ```

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use super::types::{Coord, Point};

/// Computation type `Self` for determinants over coordinates `C`.
pub trait Widen<C>:
    Copy + Debug + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    const ZERO: Self;

    fn widen(c: C) -> Self;

    fn to_f64(self) -> f64;

    #[inline]
    fn magnitude(self) -> Self {
        if self < Self::ZERO {
            Self::ZERO - self
        } else {
            self
        }
    }
}

macro_rules! widen_int {
    ($($c:ty => $w:ty),* $(,)?) => {$(
        impl Widen<$c> for $w {
            const ZERO: Self = 0;
            #[inline]
            fn widen(c: $c) -> Self {
                <$w>::from(c)
            }
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! widen_float {
    ($($c:ty => $w:ty),* $(,)?) => {$(
        impl Widen<$c> for $w {
            const ZERO: Self = 0.0;
            #[inline]
            fn widen(c: $c) -> Self {
                <$w>::from(c)
            }
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

// A b-bit coordinate gives (b+1)-bit differences and a determinant below 2^(2b+1);
// the wide type needs at least 2b+2 bits.
widen_int!(i8 => i32, i16 => i64, i32 => i128);
widen_float!(f32 => f64, f64 => f64);

/// Side of the directed line `a → b` on which a point lies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Left,
    Right,
    Collinear,
}

/// Twice the signed area of triangle `(a, b, c)`, evaluated in `W`.
///
/// Positive iff `c` is left of `a → b` (counter-clockwise turn).
#[inline]
pub fn area2<C: Coord, W: Widen<C>>(a: Point<C>, b: Point<C>, c: Point<C>) -> W {
    let ax = W::widen(a.x);
    let ay = W::widen(a.y);
    let abx = W::widen(b.x) - ax;
    let aby = W::widen(b.y) - ay;
    let acx = W::widen(c.x) - ax;
    let acy = W::widen(c.y) - ay;
    abx * acy - aby * acx
}

/// Classify `c` against the directed line `a → b`.
#[inline]
pub fn orientation<C: Coord, W: Widen<C>>(a: Point<C>, b: Point<C>, c: Point<C>) -> Orientation {
    let det: W = area2(a, b, c);
    if det > W::ZERO {
        Orientation::Left
    } else if det < W::ZERO {
        Orientation::Right
    } else {
        Orientation::Collinear
    }
}

/// Dot product `(b − a) · (c − a)` in `W`; used to order collinear points.
#[inline]
pub(crate) fn dot2<C: Coord, W: Widen<C>>(a: Point<C>, b: Point<C>, c: Point<C>) -> W {
    let ax = W::widen(a.x);
    let ay = W::widen(a.y);
    (W::widen(b.x) - ax) * (W::widen(c.x) - ax) + (W::widen(b.y) - ay) * (W::widen(c.y) - ay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_triangle_turns() {
        let a = Point::new(0i32, 0);
        let b = Point::new(1i32, 0);
        let c = Point::new(1i32, 1);
        assert_eq!(orientation::<i32, i128>(a, b, c), Orientation::Left);
        assert_eq!(orientation::<i32, i128>(a, c, b), Orientation::Right);
        assert_eq!(
            orientation::<i32, i128>(a, b, Point::new(7, 0)),
            Orientation::Collinear
        );
        assert_eq!(area2::<i32, i128>(a, b, c), 1);
    }

    #[test]
    fn widened_integers_resolve_what_f64_rounds_away() {
        // det = 2^30 (2^30 − 2) − (2^30 − 1)^2 = −1
        let big = 1i32 << 30;
        let a = Point::new(0i32, 0);
        let b = Point::new(big, big - 1);
        let c = Point::new(big - 1, big - 2);
        assert_eq!(area2::<i32, i128>(a, b, c), -1);
        assert_eq!(orientation::<i32, i128>(a, b, c), Orientation::Right);

        let af = Point::new(0.0f64, 0.0);
        let bf = Point::new(big as f64, (big - 1) as f64);
        let cf = Point::new((big - 1) as f64, (big - 2) as f64);
        assert_eq!(orientation::<f64, f64>(af, bf, cf), Orientation::Collinear);
    }

    #[test]
    fn full_i32_range_in_i128() {
        let a = Point::new(i32::MIN, i32::MIN);
        let b = Point::new(i32::MAX, i32::MAX);
        let c = Point::new(i32::MAX, i32::MIN);
        assert_eq!(orientation::<i32, i128>(a, b, c), Orientation::Right);
        assert_eq!(orientation::<i32, i128>(a, c, b), Orientation::Left);
    }

    #[test]
    fn extreme_i32_corners_keep_their_sign() {
        let a = Point::new(i32::MIN, i32::MIN);
        let b = Point::new(i32::MAX, i32::MIN);
        let c = Point::new(i32::MAX, i32::MAX);
        let span = i128::from(i32::MAX) - i128::from(i32::MIN);
        assert_eq!(area2::<i32, i128>(a, b, c), span * span);
        assert_eq!(orientation::<i32, i128>(a, b, c), Orientation::Left);
        assert_eq!(dot2::<i32, i128>(a, b, c), span * span);
    }

    #[test]
    fn small_integer_pairs() {
        let a = Point::new(i8::MIN, i8::MIN);
        let b = Point::new(i8::MAX, i8::MIN);
        let c = Point::new(i8::MIN, i8::MAX);
        assert_eq!(area2::<i8, i32>(a, b, c), 255 * 255);
        let a = Point::new(i16::MIN, i16::MAX);
        let b = Point::new(i16::MAX, i16::MIN);
        assert_eq!(
            orientation::<i16, i64>(a, b, Point::new(0, 0)),
            Orientation::Left
        );
    }

    #[test]
    fn f32_coordinates_widen_to_f64() {
        let a = Point::new(0.0f32, 0.0);
        let b = Point::new(0.1f32, 0.0);
        let c = Point::new(0.05f32, 1e-3);
        assert_eq!(orientation::<f32, f64>(a, b, c), Orientation::Left);
    }

    #[test]
    fn magnitude_is_absolute_value() {
        assert_eq!(<i128 as Widen<i32>>::magnitude(-5), 5);
        assert_eq!(<f64 as Widen<f64>>::magnitude(-0.25), 0.25);
    }
}
