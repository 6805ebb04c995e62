//! Jarvis march (gift wrapping).
//!
//! Independent of the sweep code path: no sort, no stacks. Starts at the same
//! vertex and walks in the same (CCW) direction as the monotone chain, with
//! the same collinear policy, so the two agree vertex for vertex.

use crate::orientation::{orientation, Orientation};
use crate::point::{lex_cmp, Point};

use super::types::Hull;

/// Hull of `points` by gift wrapping, O(n h).
///
/// Repeated positions are visited once. A set of identical points wraps to a
/// single vertex.
pub fn gift_wrap(points: &[Point]) -> Hull {
    if points.len() <= 1 {
        return Hull::from_vertices(points.to_vec());
    }
    // first minimum in input order, like the stable sort picks
    let Some((start, _)) = points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| lex_cmp(a, b))
    else {
        return Hull::default();
    };

    let mut hull = vec![points[start]];
    let mut cur = start;
    // a hull can't have more vertices than inputs
    while hull.len() < points.len() {
        let Some(next) = next_vertex(points, cur) else {
            break;
        };
        if points[next].same_position(&points[start]) {
            break;
        }
        hull.push(points[next]);
        cur = next;
    }
    Hull::from_vertices(hull)
}

/// The candidate with every other point on its left (or on the edge, nearer).
fn next_vertex(points: &[Point], cur: usize) -> Option<usize> {
    let p = &points[cur];
    let mut best: Option<usize> = None;
    for (r, cand) in points.iter().enumerate() {
        if cand.same_position(p) {
            continue;
        }
        let Some(q) = best else {
            best = Some(r);
            continue;
        };
        let replace = match orientation(p, &points[q], cand) {
            Orientation::Clockwise => true,
            Orientation::Collinear => p.dist2(cand) > p.dist2(&points[q]),
            Orientation::CounterClockwise => false,
        };
        if replace {
            best = Some(r);
        }
    }
    best
}
