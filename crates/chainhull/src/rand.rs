//! Random point sets on a padded canvas (replayable).
//!
//! Model
//! - Integer-valued coordinates drawn uniformly from
//!   `[padding, width - padding] x [padding, height - padding]`, ids `0..count`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so the k-th trial of a sweep can be regenerated on its own.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg;
use crate::error::InputError;
use crate::point::Point;

/// Canvas the points are drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasCfg {
    pub width: u32,
    pub height: u32,
    /// Minimum distance from every border.
    pub padding: u32,
}

impl Default for CanvasCfg {
    fn default() -> Self {
        Self {
            width: cfg::CANVAS_WIDTH,
            height: cfg::CANVAS_HEIGHT,
            padding: cfg::CANVAS_PADDING,
        }
    }
}

impl CanvasCfg {
    pub fn validate(&self) -> Result<(), InputError> {
        if self.width < cfg::CANVAS_MIN_SIDE || self.height < cfg::CANVAS_MIN_SIDE {
            return Err(InputError::CanvasTooSmall {
                width: self.width,
                height: self.height,
                min: cfg::CANVAS_MIN_SIDE,
            });
        }
        let twice = self.padding.saturating_mul(2);
        if twice > self.width || twice > self.height {
            return Err(InputError::PaddingTooLarge {
                padding: self.padding,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next trial of the same sweep.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw `count` points on `canvas`.
pub fn random_points(
    count: usize,
    canvas: CanvasCfg,
    tok: ReplayToken,
) -> Result<Vec<Point>, InputError> {
    canvas.validate()?;
    let count = u32::try_from(count).map_err(|_| InputError::TooManyPoints {
        count,
        max: u32::MAX,
    })?;
    let mut rng = tok.to_std_rng();
    let (x_lo, x_hi) = (canvas.padding, canvas.width - canvas.padding);
    let (y_lo, y_hi) = (canvas.padding, canvas.height - canvas.padding);
    let pts = (0..count)
        .map(|i| {
            let x = rng.gen_range(x_lo..=x_hi);
            let y = rng.gen_range(y_lo..=y_hi);
            Point::new(f64::from(x), f64::from(y), i)
        })
        .collect();
    Ok(pts)
}
