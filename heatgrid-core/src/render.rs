//! Heatmap tile-path renderer.

use crate::data::{GridLayout, HeatmapData};
use crate::fills::counts_to_fills;
use crate::geometry::TileGeometry;
use crate::palette::Palette;
use crate::plot_rect::PlotRect;
use crate::scale::{AxisTransform, Scale};
use crate::surface::{Surface, TilePath};
use crate::RenderError;

/// Renders a dense 2D histogram as batched tile paths.
///
/// One render invocation is a single synchronous pass: infer the grid
/// layout, quantize counts into palette buckets, compute tile geometry,
/// cull invisible cells, batch the rest into one path per bucket, and fill
/// each non-empty path once inside a clip matching the plot area. Cells
/// are O(rectangle appends); fills are O(palette size).
///
/// Nothing persists across invocations. Given identical inputs and
/// viewport, two calls issue identical operations.
pub struct HeatmapTileRenderer {
    palette: Palette,
}

impl HeatmapTileRenderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Render with the stock count quantizer ([`counts_to_fills`]).
    #[allow(clippy::too_many_arguments)]
    pub fn render<S, X, Y>(
        &self,
        data: &HeatmapData,
        scale_x: &Scale,
        scale_y: &Scale,
        x_axis: &X,
        y_axis: &Y,
        area: &PlotRect,
        surface: &mut S,
    ) -> Result<(), RenderError>
    where
        S: Surface,
        X: AxisTransform + ?Sized,
        Y: AxisTransform + ?Sized,
    {
        let fills = counts_to_fills(&data.counts, self.palette.len());
        self.render_with_fills(data, &fills, scale_x, scale_y, x_axis, y_axis, area, surface)
    }

    /// Render with caller-precomputed fill indices, one per cell.
    ///
    /// Negative indices mean "no fill" and are skipped; so are indices past
    /// the end of the palette. A fills slice of the wrong length is a
    /// structural error.
    #[allow(clippy::too_many_arguments)]
    pub fn render_with_fills<S, X, Y>(
        &self,
        data: &HeatmapData,
        fills: &[i32],
        scale_x: &Scale,
        scale_y: &Scale,
        x_axis: &X,
        y_axis: &Y,
        area: &PlotRect,
        surface: &mut S,
    ) -> Result<(), RenderError>
    where
        S: Surface,
        X: AxisTransform + ?Sized,
        Y: AxisTransform + ?Sized,
    {
        scale_x.validate()?;
        scale_y.validate()?;
        if fills.len() != data.len() {
            return Err(RenderError::FillsLengthMismatch {
                expected: data.len(),
                got: fills.len(),
            });
        }

        if data.is_empty() {
            log::debug!("heatmap render skipped: empty dataset");
            return Ok(());
        }
        if self.palette.is_empty() {
            log::debug!("heatmap render skipped: empty palette");
            return Ok(());
        }

        let layout = GridLayout::infer(data)?;
        let geometry =
            TileGeometry::compute(data, &layout, scale_x, scale_y, x_axis, y_axis, area);

        let mut paths: Vec<S::Path> = (0..self.palette.len())
            .map(|_| surface.begin_path())
            .collect();
        let mut rect_counts = vec![0usize; paths.len()];

        for i in 0..data.len() {
            // filter out zero counts and cells outside the visible range
            if data.counts[i] > 0.0 && scale_x.contains(data.xs[i]) && scale_y.contains(data.ys[i])
            {
                let Ok(bucket) = usize::try_from(fills[i]) else {
                    continue;
                };
                let Some(path) = paths.get_mut(bucket) else {
                    continue;
                };
                let (x, y, width, height) = geometry.rect_for(&layout, i);
                path.rect(x, y, width, height);
                rect_counts[bucket] += 1;
            }
        }

        surface.clip_to(area);
        for (bucket, path) in paths.iter().enumerate() {
            if rect_counts[bucket] == 0 {
                continue;
            }
            if let Some(color) = self.palette.get(bucket) {
                surface.fill_path(path, color);
            }
        }
        surface.end_clip();

        log::debug!(
            "heatmap render: {} cells, {}x{} grid, {} fills",
            data.len(),
            layout.x_bin_qty,
            layout.y_bin_qty,
            rect_counts.iter().filter(|&&n| n > 0).count()
        );
        Ok(())
    }
}
