use serde::{Deserialize, Serialize};

/// Plotting-area bounding box in device pixels.
///
/// Chart layouts position the plot area at fractional pixel offsets
/// (half-pixel borders, device-pixel-ratio scaling), so all fields are f64.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    /// Create new plot rectangle
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge (left + width)
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (top + height)
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}
