//! Replay a construction trace as text, the way a renderer would step through it.
//!
//! Usage:
//!   cargo run -p chainhull --example replay_trace -- [count] [seed]
//!
//! Prints each event followed by the chain stacks whenever they change.

use chainhull::prelude::*;
use chainhull::trace::replay;

fn main() {
    let mut args = std::env::args().skip(1);
    let count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(8);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);

    let canvas = CanvasCfg::default();
    let points = match random_points(count, canvas, ReplayToken { seed, index: 0 }) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("replay_trace: {e}");
            return;
        }
    };
    for p in &points {
        println!("point {:>3}: ({:>5}, {:>5})", p.id, p.x, p.y);
    }

    let mut events: Vec<TraceEvent> = Vec::new();
    let hull = build_hull_traced(&points, &mut events);

    let rep = match replay(&events) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("replay_trace: {e}");
            return;
        }
    };
    let mut steps = rep.steps.iter();
    for ev in &events {
        println!("{ev}");
        if matches!(ev.kind, EventKind::Adding | EventKind::Removing) {
            if let Some(s) = steps.next() {
                println!("    lower {:?}  upper {:?}", s.lower, s.upper);
            }
        }
    }
    println!("hull: {:?} (area {})", hull.ids(), hull.signed_area());
}
