//! Planar convex hulls via the monotone chain, with an observable decision trace.
//!
//! Layout
//! - `point`: input points (`x`, `y`, caller-assigned `id`) and the lexicographic order.
//! - `orientation`: the three-point turn predicate driving both sweeps.
//! - `hull`: the monotone-chain builder, the `Hull` value, and a gift-wrapping
//!   cross-check.
//! - `trace`: construction events, sinks, and replay of an event log.
//! - `rand`, `session`: caller-side helpers (random point sets, id assignment).
//!
//! API Policy
//! - The core is synchronous and total over finite input. Pacing, drawing, and
//!   timing belong to whoever consumes the trace.

pub mod cfg;
pub mod error;
pub mod hull;
pub mod orientation;
pub mod point;
pub mod rand;
pub mod session;
pub mod trace;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::InputError;
pub use hull::{
    build_hull, build_hull_traced, gift_wrap, monotone_chains, try_build_hull, Chains, Hull,
    HullAlgorithm,
};
pub use orientation::{orientation, Orientation};
pub use point::Point;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{build_hull, build_hull_traced, try_build_hull, Hull, HullAlgorithm};
    pub use crate::orientation::{orientation, Orientation};
    pub use crate::point::Point;
    pub use crate::rand::{random_points, CanvasCfg, ReplayToken};
    pub use crate::session::PointSession;
    pub use crate::trace::{Chain, EventKind, EventSink, NoTrace, TraceEvent};
    pub use nalgebra::Vector2 as Vec2;
}
