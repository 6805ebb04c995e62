use super::*;
use crate::orientation::{orientation, Orientation};
use crate::point::Point;
use crate::trace::{replay, Chain, EventKind, NoTrace, TraceEvent};
use proptest::prelude::*;

fn pts(raw: &[(f64, f64, u32)]) -> Vec<Point> {
    raw.iter().map(|&(x, y, id)| Point::new(x, y, id)).collect()
}

fn coords(points: &[Point]) -> Vec<(f64, f64)> {
    points.iter().map(|p| (p.x, p.y)).collect()
}

#[test]
fn square_with_interior_diagonal_point() {
    let input = pts(&[
        (0.0, 0.0, 1),
        (1.0, 1.0, 2),
        (2.0, 2.0, 3),
        (0.0, 2.0, 4),
        (2.0, 0.0, 5),
    ]);
    let hull = build_hull(&input);
    assert_eq!(hull.ids(), vec![1, 5, 3, 4]);
    assert_eq!(
        coords(hull.vertices()),
        vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]
    );
    assert!((hull.signed_area() - 4.0).abs() < 1e-12);
}

#[test]
fn collinear_boundary_point_is_dropped() {
    let input = pts(&[
        (0.0, 0.0, 1),
        (4.0, 0.0, 2),
        (4.0, 4.0, 3),
        (0.0, 4.0, 4),
        (2.0, 0.0, 5),
    ]);
    let hull = build_hull(&input);
    assert_eq!(hull.ids(), vec![1, 2, 3, 4]);
    assert!(hull.contains(&input[4]));
}

#[test]
fn contains_rejects_points_outside_polygon() {
    let input = pts(&[
        (0.0, 0.0, 1),
        (4.0, 0.0, 2),
        (4.0, 4.0, 3),
        (0.0, 4.0, 4),
    ]);
    let hull = build_hull(&input);
    assert_eq!(hull.len(), 4);
    assert!(hull.contains(&Point::new(2.0, 2.0, 0)));
    assert!(hull.contains(&Point::new(4.0, 1.0, 0)));
    // beyond an edge
    assert!(!hull.contains(&Point::new(5.0, 1.0, 0)));
    assert!(!hull.contains(&Point::new(-0.5, 2.0, 0)));
    assert!(!hull.contains(&Point::new(2.0, 4.5, 0)));
    // beyond a vertex
    assert!(!hull.contains(&Point::new(4.5, 4.5, 0)));
    assert!(!hull.contains(&Point::new(-1.0, -1.0, 0)));
}

#[test]
fn degenerate_sizes() {
    assert!(build_hull(&[]).is_empty());

    let one = pts(&[(3.0, -1.0, 7)]);
    assert_eq!(build_hull(&one).into_vec(), one);

    // two points come back in sweep order
    let two = pts(&[(5.0, 0.0, 1), (1.0, 2.0, 2)]);
    assert_eq!(build_hull(&two).ids(), vec![2, 1]);
}

#[test]
fn all_collinear_keeps_extremes() {
    let input = pts(&[
        (2.0, 2.0, 1),
        (0.0, 0.0, 2),
        (3.0, 3.0, 3),
        (1.0, 1.0, 4),
        (-1.0, -1.0, 5),
    ]);
    let hull = build_hull(&input);
    assert_eq!(hull.ids(), vec![5, 3]);
    assert_eq!(hull.signed_area(), 0.0);
    for p in &input {
        assert!(hull.contains(p));
    }
    assert!(!hull.contains(&Point::new(4.0, 4.0, 0)));
}

#[test]
fn duplicates_do_not_survive_into_polygon() {
    let input = pts(&[
        (0.0, 0.0, 1),
        (0.0, 0.0, 2),
        (3.0, 0.0, 3),
        (3.0, 0.0, 3),
        (0.0, 3.0, 4),
        (1.0, 1.0, 5),
    ]);
    let hull = build_hull(&input);
    assert_eq!(
        coords(hull.vertices()),
        vec![(0.0, 0.0), (3.0, 0.0), (0.0, 3.0)]
    );
}

#[test]
fn identical_points_collapse_to_a_pair() {
    let input = pts(&[(1.0, 1.0, 1), (1.0, 1.0, 2), (1.0, 1.0, 3)]);
    let hull = build_hull(&input);
    assert_eq!(hull.ids(), vec![1, 3]);
    assert_eq!(gift_wrap(&input).ids(), vec![1]);
}

#[test]
fn gift_wrap_uses_every_point_when_all_are_vertices() {
    let triangle = pts(&[(0.0, 0.0, 1), (2.0, 0.0, 2), (1.0, 1.0, 3)]);
    assert_eq!(gift_wrap(&triangle).ids(), vec![1, 2, 3]);
    let square = pts(&[(0.0, 4.0, 1), (4.0, 4.0, 2), (4.0, 0.0, 3), (0.0, 0.0, 4)]);
    let hull = gift_wrap(&square);
    assert_eq!(hull.ids(), vec![4, 3, 2, 1]);
    assert_eq!(hull.len(), square.len());
}

#[test]
fn try_build_rejects_non_finite_before_work() {
    let input = pts(&[(0.0, 0.0, 1), (f64::NAN, 1.0, 9), (2.0, 0.0, 3)]);
    let mut events: Vec<TraceEvent> = Vec::new();
    let err = try_build_hull(&input, &mut events).unwrap_err();
    assert!(matches!(
        err,
        crate::InputError::NonFinite { index: 1, id: 9, .. }
    ));
    assert!(events.is_empty());

    let inf = pts(&[(0.0, f64::INFINITY, 4)]);
    assert!(try_build_hull(&inf, &mut NoTrace).is_err());

    let ok = pts(&[(0.0, 0.0, 1), (2.0, 0.0, 2), (1.0, 1.0, 3)]);
    assert_eq!(try_build_hull(&ok, &mut NoTrace).unwrap().ids(), vec![1, 2, 3]);
}

#[test]
fn triangle_event_log_is_exact() {
    let input = pts(&[(0.0, 0.0, 1), (2.0, 0.0, 2), (1.0, 1.0, 3)]);
    let mut events = Vec::new();
    let hull = build_hull_traced(&input, &mut events);
    assert_eq!(hull.ids(), vec![1, 2, 3]);

    let lo = Chain::Lower;
    let up = Chain::Upper;
    let expected = vec![
        TraceEvent::checking(lo, 1),
        TraceEvent::adding(lo, 1, None),
        TraceEvent::checking(lo, 3),
        TraceEvent::adding(lo, 3, Some(1)),
        TraceEvent::checking(lo, 2),
        TraceEvent::classified(lo, [1, 3, 2], Orientation::Clockwise),
        TraceEvent::removing(lo, 3, 2),
        TraceEvent::adding(lo, 2, Some(1)),
        TraceEvent::checking(up, 2),
        TraceEvent::adding(up, 2, None),
        TraceEvent::checking(up, 3),
        TraceEvent::adding(up, 3, Some(2)),
        TraceEvent::checking(up, 1),
        TraceEvent::classified(up, [2, 3, 1], Orientation::CounterClockwise),
        TraceEvent::adding(up, 1, Some(3)),
    ];
    assert_eq!(events, expected);
}

#[test]
fn tracing_does_not_change_the_hull() {
    let input = pts(&[
        (0.0, 0.0, 1),
        (1.0, 1.0, 2),
        (2.0, 2.0, 3),
        (0.0, 2.0, 4),
        (2.0, 0.0, 5),
    ]);
    let mut events = Vec::new();
    let traced = build_hull_traced(&input, &mut events);
    assert_eq!(traced, build_hull(&input));
    // every point is checked once per chain
    let checks = events
        .iter()
        .filter(|e| e.kind == EventKind::Checking)
        .count();
    assert_eq!(checks, 2 * input.len());
    let rep = replay(&events).unwrap();
    assert_eq!(rep.adds, 10);
    assert_eq!(rep.removes, 4);
    assert_eq!(rep.last.lower, vec![1, 5, 3]);
    assert_eq!(rep.last.upper, vec![3, 4, 1]);
}

#[test]
fn algorithm_selector_agrees() {
    let input = pts(&[
        (0.0, 0.0, 1),
        (4.0, 0.0, 2),
        (4.0, 4.0, 3),
        (0.0, 4.0, 4),
        (2.0, 0.0, 5),
        (2.0, 2.0, 6),
    ]);
    let mut events = Vec::new();
    let a = HullAlgorithm::MonotoneChain.compute(&input, &mut events);
    let before = events.len();
    let b = HullAlgorithm::GiftWrap.compute(&input, &mut events);
    assert_eq!(a.ids(), b.ids());
    assert_eq!(events.len(), before);
    assert_eq!(HullAlgorithm::default(), HullAlgorithm::MonotoneChain);
}

// ---- properties (integer-valued coordinates keep orientation exact) ----

fn arb_points(max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-20i32..=20, -20i32..=20), 0..max).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (x, y))| Point::new(x as f64, y as f64, i as u32))
            .collect()
    })
}

fn ids_of(points: &[Point]) -> Vec<u32> {
    points.iter().map(|p| p.id).collect()
}

proptest! {
    #[test]
    fn prop_closure_and_containment(input in arb_points(40)) {
        let hull = build_hull(&input);
        for v in hull.vertices() {
            prop_assert!(input.contains(v));
        }
        if !input.is_empty() {
            for p in &input {
                prop_assert!(hull.contains(p), "{:?} outside {:?}", p, hull);
            }
        }
    }

    #[test]
    fn prop_minimal_and_ccw(input in arb_points(40)) {
        let hull = build_hull(&input);
        let vs = hull.vertices();
        if vs.len() >= 3 {
            let n = vs.len();
            for k in 0..n {
                let turn = orientation(&vs[k], &vs[(k + 1) % n], &vs[(k + 2) % n]);
                prop_assert_eq!(turn, Orientation::CounterClockwise);
            }
            prop_assert!(hull.signed_area() > 0.0);
        }
    }

    #[test]
    fn prop_idempotent(input in arb_points(40)) {
        let hull = build_hull(&input);
        let again = build_hull(hull.vertices());
        prop_assert_eq!(coords(again.vertices()), coords(hull.vertices()));
    }

    #[test]
    fn prop_order_invariant(
        (input, shuffled) in arb_points(30)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a = build_hull(&input);
        let b = build_hull(&shuffled);
        prop_assert_eq!(coords(a.vertices()), coords(b.vertices()));
    }

    #[test]
    fn prop_gift_wrap_agrees(input in arb_points(30)) {
        let wrapped = gift_wrap(&input);
        prop_assert!(wrapped.len() <= input.len());
        let mut a = coords(build_hull(&input).vertices());
        let mut b = coords(wrapped.vertices());
        // identical-point sets give a repeated pair from the sweeps
        a.dedup();
        b.dedup();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_trace_complete(input in arb_points(30)) {
        let mut events = Vec::new();
        let chains = monotone_chains(&input, &mut events);
        let rep = replay(&events).unwrap();
        prop_assert_eq!(rep.adds - rep.removes, chains.lower.len() + chains.upper.len());
        prop_assert_eq!(&rep.last.lower, &ids_of(&chains.lower));
        prop_assert_eq!(&rep.last.upper, &ids_of(&chains.upper));

        let hull_ids = build_hull(&input).ids();
        for ev in events.iter().filter(|e| e.kind == EventKind::Removing) {
            if hull_ids.contains(&ev.subject) {
                let other = match ev.chain {
                    Chain::Lower => &rep.last.upper,
                    Chain::Upper => &rep.last.lower,
                };
                prop_assert!(other.contains(&ev.subject));
            }
        }
    }
}
