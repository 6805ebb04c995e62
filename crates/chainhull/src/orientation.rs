//! Three-point orientation predicate.
//!
//! Sign convention (do not flip; both sweeps rely on it):
//! `val = (q.y - p.y)(r.x - q.x) - (q.x - p.x)(r.y - q.y)`,
//! `val == 0` collinear, `val > 0` clockwise, `val < 0` counter-clockwise
//! (with the y axis pointing up).

use crate::point::Point;

/// Rotational sense of the ordered triple `(p, q, r)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Collinear => "collinear",
            Orientation::Clockwise => "CW",
            Orientation::CounterClockwise => "CCW",
        }
    }
}

/// Raw cross value of `(q - p)` and `(r - q)` under the convention above.
#[inline]
pub fn cross_value(p: &Point, q: &Point, r: &Point) -> f64 {
    let a = q.coords() - p.coords();
    let b = r.coords() - q.coords();
    a.y * b.x - a.x * b.y
}

/// Classify the turn `p → q → r`. Total; coincident points are collinear.
#[inline]
pub fn orientation(p: &Point, q: &Point, r: &Point) -> Orientation {
    let val = cross_value(p, q, r);
    if val > 0.0 {
        Orientation::Clockwise
    } else if val < 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Collinear
    }
}
