use serde::{Deserialize, Serialize};

use crate::RenderError;

/// Visible domain bounds of one chart axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
}

impl Scale {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Reject bounds that would turn position math into NaN.
    pub fn validate(&self) -> Result<(), RenderError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(RenderError::DegenerateScale {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Value→pixel mapping for one axis, supplied by the charting host.
///
/// The renderer never assumes the mapping is linear: tile sizes are derived
/// by probing the transform at 0 and at one bin increment and differencing
/// the two positions. Any monotonic mapping works.
pub trait AxisTransform {
    /// Map a domain value to a pixel position within `dim` pixels of plot
    /// area starting at `offset`.
    fn val_to_pos(&self, value: f64, scale: &Scale, dim: f64, offset: f64) -> f64;
}

/// Linear axis. `inverted` flips the direction for screen-y axes, where the
/// scale maximum sits at the top of the plot area.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearAxis {
    pub inverted: bool,
}

impl LinearAxis {
    /// Conventional horizontal axis (min at the left edge).
    pub fn horizontal() -> Self {
        Self { inverted: false }
    }

    /// Conventional vertical axis (max at the top edge).
    pub fn vertical() -> Self {
        Self { inverted: true }
    }
}

impl AxisTransform for LinearAxis {
    fn val_to_pos(&self, value: f64, scale: &Scale, dim: f64, offset: f64) -> f64 {
        let pct = (value - scale.min) / (scale.max - scale.min);
        let pct = if self.inverted { 1.0 - pct } else { pct };
        offset + dim * pct
    }
}

/// Base-10 logarithmic axis. Only meaningful for positive scale bounds;
/// non-positive values map through `log10` as-is (−∞ for zero), which is
/// the host chart convention for out-of-domain values on a log scale.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogAxis {
    pub inverted: bool,
}

impl AxisTransform for LogAxis {
    fn val_to_pos(&self, value: f64, scale: &Scale, dim: f64, offset: f64) -> f64 {
        let log_min = scale.min.log10();
        let log_max = scale.max.log10();
        let pct = (value.log10() - log_min) / (log_max - log_min);
        let pct = if self.inverted { 1.0 - pct } else { pct };
        offset + dim * pct
    }
}
