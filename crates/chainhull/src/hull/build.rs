//! Andrew's monotone chain with trace emission.

use crate::error::InputError;
use crate::orientation::{orientation, Orientation};
use crate::point::{lex_cmp, Point};
use crate::trace::{Chain, EventSink, NoTrace, TraceEvent};

use super::types::{Chains, Hull};

/// Hull of `points`, tracing disabled.
#[inline]
pub fn build_hull(points: &[Point]) -> Hull {
    build_hull_traced(points, &mut NoTrace)
}

/// Hull of `points`, reporting every decision to `sink`.
pub fn build_hull_traced<S: EventSink + ?Sized>(points: &[Point], sink: &mut S) -> Hull {
    if points.len() <= 1 {
        return Hull::from_vertices(points.to_vec());
    }
    let Chains {
        mut lower,
        mut upper,
    } = monotone_chains(points, sink);
    // Each chain ends where the other one starts.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    Hull::from_vertices(lower)
}

/// Same as `build_hull_traced`, but rejects non-finite coordinates first.
pub fn try_build_hull<S: EventSink + ?Sized>(
    points: &[Point],
    sink: &mut S,
) -> Result<Hull, InputError> {
    check_finite(points)?;
    Ok(build_hull_traced(points, sink))
}

/// First non-finite point, if any, as an `InputError`.
pub fn check_finite(points: &[Point]) -> Result<(), InputError> {
    match points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
        Some((index, p)) => Err(InputError::NonFinite {
            index,
            id: p.id,
            x: p.x,
            y: p.y,
        }),
        None => Ok(()),
    }
}

/// Both untrimmed chains: `lower` from the left-to-right sweep, `upper` from
/// the right-to-left sweep.
///
/// Empty input yields empty chains; a single point appears once in each.
pub fn monotone_chains<S: EventSink + ?Sized>(points: &[Point], sink: &mut S) -> Chains {
    let mut sorted = points.to_vec();
    // stable: equal positions keep input order
    sorted.sort_by(lex_cmp);
    let lower = sweep(sorted.iter(), Chain::Lower, sink);
    let upper = sweep(sorted.iter().rev(), Chain::Upper, sink);
    Chains { lower, upper }
}

/// One monotone sweep: keep only strict left turns.
fn sweep<'a, I, S>(pts: I, chain: Chain, sink: &mut S) -> Vec<Point>
where
    I: ExactSizeIterator<Item = &'a Point>,
    S: EventSink + ?Sized,
{
    let tracing = sink.enabled();
    let mut stack: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in pts {
        if tracing {
            sink.emit(TraceEvent::checking(chain, p.id));
        }
        while let [.., a, b] = stack[..] {
            let turn = orientation(&a, &b, &p);
            if tracing {
                sink.emit(TraceEvent::classified(chain, [a.id, b.id, p.id], turn));
            }
            if turn == Orientation::CounterClockwise {
                break;
            }
            stack.pop();
            if tracing {
                sink.emit(TraceEvent::removing(chain, b.id, p.id));
            }
        }
        if tracing {
            let prev = stack.last().map(|q| q.id);
            sink.emit(TraceEvent::adding(chain, p.id, prev));
        }
        stack.push(p);
    }
    stack
}
