// File: crates/chartplot-core/src/axis.rs
// Summary: Axis model with labels, data ranges, and tick placement.

use crate::document::{DEFAULT_X_LABEL, DEFAULT_Y_LABEL};
use crate::grid::nice_ticks;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new(DEFAULT_X_LABEL, 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new(DEFAULT_Y_LABEL, 0.0, 1.0)
    }

    /// Tick values inside `[min, max]`, spaced at a 1/2/5 step for roughly `target` intervals.
    pub fn ticks(&self, target: usize) -> Vec<f64> {
        nice_ticks(self.min, self.max, target)
    }
}
