//! Drawing-surface capability traits.
//!
//! The renderer never talks to a concrete backend. It accumulates
//! rectangles into paths and issues fills through these traits, so the same
//! pipeline drives an HTML canvas, a recording double in tests, or any
//! other backend the host supplies.

use crate::palette::Color;
use crate::plot_rect::PlotRect;

/// One batched drawable geometry: all tiles sharing a palette bucket.
pub trait TilePath {
    /// Append one tile rectangle. Width/height may be negative (inverted
    /// axes); the backend's rect semantics must accept either sign.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}

/// A paintable target for one render invocation.
pub trait Surface {
    type Path: TilePath;

    /// Start an empty path for one palette bucket.
    fn begin_path(&self) -> Self::Path;

    /// Restrict subsequent fills to the plot area. Always paired with
    /// [`Surface::end_clip`].
    fn clip_to(&mut self, area: &PlotRect);

    /// Fill one accumulated path with one color.
    fn fill_path(&mut self, path: &Self::Path, color: &Color);

    /// Lift the clip installed by [`Surface::clip_to`].
    fn end_clip(&mut self);
}
