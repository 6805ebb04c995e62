//! Fixed defaults for point-set generation (internal).
//!
//! Policy
//! - Defaults mirror the interactive canvas the trace is usually replayed on.
//!   Callers override them through `CanvasCfg`, never by editing these.

/// Default canvas width in canvas units.
pub const CANVAS_WIDTH: u32 = 400;
/// Default canvas height in canvas units.
pub const CANVAS_HEIGHT: u32 = 400;
/// Keeps generated points away from the canvas border.
pub const CANVAS_PADDING: u32 = 30;
/// Smallest accepted canvas side.
pub const CANVAS_MIN_SIDE: u32 = 20;
/// Default number of generated points.
pub const DEFAULT_POINT_COUNT: usize = 30;
/// First id handed out by `PointSession::push`.
pub const FIRST_SESSION_ID: u32 = 1;
