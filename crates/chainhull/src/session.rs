//! Caller-owned point collection (what a click handler feeds into).
//!
//! The hull builder never sees this type: the session hands it a slice and
//! keeps the id counter to itself.

use crate::cfg::FIRST_SESSION_ID;
use crate::hull::{build_hull_traced, Hull};
use crate::point::Point;
use crate::trace::{EventSink, NoTrace};

/// Growing point set with sequential ids.
#[derive(Clone, Debug)]
pub struct PointSession {
    points: Vec<Point>,
    next_id: u32,
}

impl Default for PointSession {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            next_id: FIRST_SESSION_ID,
        }
    }
}

impl PointSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a point and return it with its freshly assigned id.
    pub fn push(&mut self, x: f64, y: f64) -> Point {
        let p = Point::new(x, y, self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.points.push(p);
        p
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Forget all points and restart ids.
    pub fn clear(&mut self) {
        self.points.clear();
        self.next_id = FIRST_SESSION_ID;
    }

    pub fn hull(&self) -> Hull {
        self.hull_traced(&mut NoTrace)
    }

    pub fn hull_traced<S: EventSink + ?Sized>(&self, sink: &mut S) -> Hull {
        build_hull_traced(&self.points, sink)
    }
}
