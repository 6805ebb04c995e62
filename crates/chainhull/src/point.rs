//! Input points and the sweep order.

use std::cmp::Ordering;

use nalgebra::Vector2;

/// A planar input point with a caller-assigned id.
///
/// The id only labels the point in traces and output; geometric decisions
/// never look at it, and duplicates are tolerated.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub id: u32,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64, id: u32) -> Self {
        Self { x, y, id }
    }

    #[inline]
    pub fn coords(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Same coordinates, ids ignored.
    #[inline]
    pub fn same_position(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub(crate) fn dist2(&self, other: &Point) -> f64 {
        (other.coords() - self.coords()).norm_squared()
    }
}

/// Sweep order: `x` ascending, ties by `y` ascending.
///
/// Total over all `f64` (so sorting never panics); `+ 0.0` folds `-0.0` into
/// `0.0` so signed zeros tie.
#[inline]
pub fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    (a.x + 0.0)
        .total_cmp(&(b.x + 0.0))
        .then_with(|| (a.y + 0.0).total_cmp(&(b.y + 0.0)))
}
