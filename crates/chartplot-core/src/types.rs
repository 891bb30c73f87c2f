// File: crates/chartplot-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, line metrics).

/// Default surface width in pixels (12 in at 100 dpi).
pub const WIDTH: i32 = 1200;
/// Default surface height in pixels (8 in at 100 dpi).
pub const HEIGHT: i32 = 800;

/// Series stroke width in pixels.
pub const LINE_WIDTH: f32 = 2.0;
/// Fraction of each data span added on both sides when autoscaling.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // room for title above, y label + tick labels left, x label + tick labels below
        Self::new(96, 32, 64, 80)
    }
}
