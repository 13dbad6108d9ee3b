//! Columnar histogram dataset and raster-layout inference.

use serde::{Deserialize, Serialize};

use crate::RenderError;

/// A dense 2D histogram in columnar form.
///
/// Three parallel columns of equal length: x-bucket coordinate, y-bucket
/// coordinate, and observation count per cell. Cells are laid out in raster
/// order — row-major by x, with y as the minor (fastest-varying) axis — on a
/// uniformly spaced, complete grid. That layout is what lets [`GridLayout`]
/// recover the bucket quantities from the data itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeatmapData {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub counts: Vec<f64>,
}

impl HeatmapData {
    /// Create a dataset, validating that all three columns have equal length.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, counts: Vec<f64>) -> Result<Self, RenderError> {
        if xs.len() != ys.len() || xs.len() != counts.len() {
            return Err(RenderError::ColumnLengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
                counts: counts.len(),
            });
        }
        Ok(Self { xs, ys, counts })
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Bucket quantities and increments recovered from a raster-ordered dataset.
///
/// `y_bin_qty` is detected from layout repetition: the y column cycles
/// through all distinct y buckets before x advances, so the distance from
/// the last occurrence of `ys[0]` to the end of the data is one full cycle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub x_bin_qty: usize,
    pub y_bin_qty: usize,
    pub x_bin_incr: f64,
    pub y_bin_incr: f64,
}

impl GridLayout {
    /// Infer the grid layout from the raw columns.
    ///
    /// Fails fast on input that is not a dense row-major grid: the cell
    /// count must divide evenly into columns of `y_bin_qty` cells.
    /// Single-row and single-column grids get a zero increment along the
    /// degenerate axis, which later collapses tile size to zero there.
    pub fn infer(data: &HeatmapData) -> Result<Self, RenderError> {
        let dlen = data.len();
        if dlen == 0 {
            return Err(RenderError::EmptyDataset);
        }

        let first_y = data.ys[0];
        let last_first_y = data
            .ys
            .iter()
            .rposition(|&y| y == first_y)
            .unwrap_or_default();
        let y_bin_qty = dlen - last_first_y;

        if dlen % y_bin_qty != 0 {
            return Err(RenderError::RaggedGrid { dlen, y_bin_qty });
        }
        let x_bin_qty = dlen / y_bin_qty;

        let y_bin_incr = if y_bin_qty >= 2 {
            data.ys[1] - data.ys[0]
        } else {
            0.0
        };
        let x_bin_incr = if x_bin_qty >= 2 {
            data.xs[y_bin_qty] - data.xs[0]
        } else {
            0.0
        };

        Ok(Self {
            x_bin_qty,
            y_bin_qty,
            x_bin_incr,
            y_bin_incr,
        })
    }

    /// Column index of cell `i`.
    pub fn column_of(&self, i: usize) -> usize {
        i / self.y_bin_qty
    }

    /// Row index of cell `i`.
    pub fn row_of(&self, i: usize) -> usize {
        i % self.y_bin_qty
    }
}
