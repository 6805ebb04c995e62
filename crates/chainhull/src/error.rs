//! Caller-visible input errors.
//!
//! Hull construction itself cannot fail; these cover precondition checks that
//! callers opt into (`try_build_hull`, `CanvasCfg::validate`, `random_points`).

/// Input rejected before any geometric work was done.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum InputError {
    /// A coordinate is NaN or infinite.
    #[error("point {id} at index {index} has a non-finite coordinate ({x}, {y})")]
    NonFinite { index: usize, id: u32, x: f64, y: f64 },
    /// Canvas side below the supported minimum.
    #[error("canvas {width}x{height} is too small (minimum side is {min})")]
    CanvasTooSmall { width: u32, height: u32, min: u32 },
    /// Padding leaves no room for points.
    #[error("padding {padding} exceeds half of the canvas {width}x{height}")]
    PaddingTooLarge {
        padding: u32,
        width: u32,
        height: u32,
    },
    /// More points than the `u32` id space can number uniquely.
    #[error("{count} points exceed the id space (maximum {max})")]
    TooManyPoints { count: usize, max: u32 },
}
