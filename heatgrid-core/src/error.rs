//! Renderer error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("dataset columns have mismatched lengths: xs={xs}, ys={ys}, counts={counts}")]
    ColumnLengthMismatch { xs: usize, ys: usize, counts: usize },

    #[error("cannot infer grid layout from an empty dataset")]
    EmptyDataset,

    #[error("dataset is not a dense row-major grid: {dlen} cells do not divide into rows of {y_bin_qty}")]
    RaggedGrid { dlen: usize, y_bin_qty: usize },

    #[error("palette has {len} colors, maximum is {max}", max = crate::palette::MAX_BUCKETS)]
    PaletteTooLarge { len: usize },

    #[error("scale bounds are degenerate: min={min}, max={max}")]
    DegenerateScale { min: f64, max: f64 },

    #[error("fill indices length {got} does not match dataset length {expected}")]
    FillsLengthMismatch { expected: usize, got: usize },
}
