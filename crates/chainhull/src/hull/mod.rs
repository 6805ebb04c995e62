//! Convex hull construction (monotone chain) plus a gift-wrapping cross-check.
//!
//! Purpose
//! - Turn a finite point set into its minimal convex boundary, CCW, starting at
//!   the lexicographically smallest point.
//! - Optionally report every decision through an `EventSink`.
//!
//! Conventions
//! - Collinear boundary points are dropped (only strict vertices are kept).
//! - `n <= 1` returns the input; all-collinear input returns the two extremes.
//! - Points are copied through unchanged (ids included); nothing is synthesized.
//! - Non-finite coordinates are out of contract for `build_hull`; use
//!   `try_build_hull` to reject them up front.

mod build;
mod gift_wrap;
mod types;

pub use build::{build_hull, build_hull_traced, check_finite, monotone_chains, try_build_hull};
pub use gift_wrap::gift_wrap;
pub use types::{Chains, Hull, HullAlgorithm};

#[cfg(test)]
mod tests;
