//! Screen-space tile geometry.

use crate::data::{GridLayout, HeatmapData};
use crate::plot_rect::PlotRect;
use crate::scale::{AxisTransform, Scale};

/// Per-render tile geometry: one tile size for the whole grid plus
/// precomputed per-column and per-row top-left offsets.
///
/// Sizes are signed. On an inverted (screen-y) axis the y size comes out
/// negative, and rectangles are emitted with that negative extent; canvas
/// rect semantics handle either sign. Offsets are rounded to whole pixels
/// so adjacent tiles butt against each other without seams.
#[derive(Clone, Debug, PartialEq)]
pub struct TileGeometry {
    pub x_size: f64,
    pub y_size: f64,
    pub cxs: Vec<f64>,
    pub cys: Vec<f64>,
}

impl TileGeometry {
    /// Compute tile geometry for one render invocation.
    ///
    /// The tile size probes each transform at 0 and at one bin increment and
    /// differences the positions, so nonlinear axis mappings are honored
    /// without any linearity assumption. The per-cell hot loop then only
    /// does array lookups; the transforms are never called per cell.
    #[allow(clippy::too_many_arguments)]
    pub fn compute<X, Y>(
        data: &HeatmapData,
        layout: &GridLayout,
        scale_x: &Scale,
        scale_y: &Scale,
        x_axis: &X,
        y_axis: &Y,
        area: &PlotRect,
    ) -> Self
    where
        X: AxisTransform + ?Sized,
        Y: AxisTransform + ?Sized,
    {
        let x_size = x_axis.val_to_pos(layout.x_bin_incr, scale_x, area.width, area.left)
            - x_axis.val_to_pos(0.0, scale_x, area.width, area.left);
        let y_size = y_axis.val_to_pos(layout.y_bin_incr, scale_y, area.height, area.top)
            - y_axis.val_to_pos(0.0, scale_y, area.height, area.top);

        // One transform call per distinct row and column, centered on the
        // bucket coordinate.
        let cys = data.ys[..layout.y_bin_qty]
            .iter()
            .map(|&y| (y_axis.val_to_pos(y, scale_y, area.height, area.top) - y_size / 2.0).round())
            .collect();
        let cxs = (0..layout.x_bin_qty)
            .map(|k| {
                let x = data.xs[k * layout.y_bin_qty];
                (x_axis.val_to_pos(x, scale_x, area.width, area.left) - x_size / 2.0).round()
            })
            .collect();

        Self {
            x_size,
            y_size,
            cxs,
            cys,
        }
    }

    /// Screen rectangle of cell `i` as (x, y, width, height).
    pub fn rect_for(&self, layout: &GridLayout, i: usize) -> (f64, f64, f64, f64) {
        (
            self.cxs[layout.column_of(i)],
            self.cys[layout.row_of(i)],
            self.x_size,
            self.y_size,
        )
    }
}
