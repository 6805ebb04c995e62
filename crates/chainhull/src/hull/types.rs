//! Hull value and algorithm selector.

use crate::orientation::{orientation, Orientation};
use crate::point::Point;
use crate::trace::EventSink;

/// Convex boundary, CCW, no repeated closing vertex.
///
/// Invariants (finite input):
/// - Every vertex is one of the input points.
/// - With three or more vertices, no three consecutive vertices are collinear.
/// - Fewer than three vertices: the input itself (`n <= 2`) or the two
///   extremes of an all-collinear set.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Hull {
    vertices: Vec<Point>,
}

impl Hull {
    #[inline]
    pub(crate) fn from_vertices(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    #[inline]
    pub fn into_vec(self) -> Vec<Point> {
        self.vertices
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    pub fn ids(&self) -> Vec<u32> {
        self.vertices.iter().map(|p| p.id).collect()
    }

    /// Shoelace area; positive for CCW, zero for degenerate hulls.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|k| {
                let p = self.vertices[k].coords();
                let q = self.vertices[(k + 1) % n].coords();
                p.perp(&q)
            })
            .sum();
        0.5 * twice
    }

    /// Is `p` on or inside the hull? Exact for integer-valued coordinates.
    pub fn contains(&self, p: &Point) -> bool {
        match self.vertices.as_slice() {
            [] => false,
            [a] => a.same_position(p),
            [a, b] => on_segment(a, b, p),
            vs => (0..vs.len()).all(|k| {
                let a = &vs[k];
                let b = &vs[(k + 1) % vs.len()];
                orientation(a, b, p) != Orientation::Clockwise
            }),
        }
    }
}

fn on_segment(a: &Point, b: &Point, p: &Point) -> bool {
    orientation(a, b, p) == Orientation::Collinear
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

/// Untrimmed sweep stacks, exactly as the trace leaves them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chains {
    pub lower: Vec<Point>,
    pub upper: Vec<Point>,
}

/// Hull algorithm selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HullAlgorithm {
    /// O(n log n), traced.
    #[default]
    MonotoneChain,
    /// O(n h), untraced; used as an independent cross-check.
    GiftWrap,
}

impl HullAlgorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            HullAlgorithm::MonotoneChain => "monotone-chain",
            HullAlgorithm::GiftWrap => "gift-wrap",
        }
    }

    /// Run the selected algorithm. `GiftWrap` never emits events.
    pub fn compute<S: EventSink + ?Sized>(self, points: &[Point], sink: &mut S) -> Hull {
        match self {
            HullAlgorithm::MonotoneChain => super::build_hull_traced(points, sink),
            HullAlgorithm::GiftWrap => super::gift_wrap(points),
        }
    }
}
