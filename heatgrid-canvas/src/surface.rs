//! Canvas-backed drawing surface.

use heatgrid_core::{
    AxisTransform, Color, HeatmapData, HeatmapTileRenderer, PlotRect, Scale, Surface, TilePath,
};
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Path2d};

use crate::canvas_utils::get_2d_context;

/// A batched tile path backed by a `Path2D` object.
pub struct CanvasPath(Path2d);

impl TilePath for CanvasPath {
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.0.rect(x, y, width, height);
    }
}

/// [`Surface`] implementation over a 2D canvas context.
///
/// Fills are issued through `fill(Path2D)`, so each palette bucket costs one
/// canvas call regardless of how many tiles it holds. The clip follows the
/// save/rect/clip/restore discipline, leaving the context state untouched
/// after the render.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        Ok(Self::new(get_2d_context(canvas)?))
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

impl Surface for CanvasSurface {
    type Path = CanvasPath;

    fn begin_path(&self) -> CanvasPath {
        CanvasPath(Path2d::new().expect("should allocate Path2D"))
    }

    fn clip_to(&mut self, area: &PlotRect) {
        self.ctx.save();
        self.ctx.begin_path();
        self.ctx.rect(area.left, area.top, area.width, area.height);
        self.ctx.clip();
    }

    fn fill_path(&mut self, path: &CanvasPath, color: &Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_with_path_2d(&path.0);
    }

    fn end_clip(&mut self) {
        self.ctx.restore();
    }
}

/// Render a heatmap straight onto a canvas element.
#[allow(clippy::too_many_arguments)]
pub fn render_to_canvas<X, Y>(
    renderer: &HeatmapTileRenderer,
    data: &HeatmapData,
    scale_x: &Scale,
    scale_y: &Scale,
    x_axis: &X,
    y_axis: &Y,
    area: &PlotRect,
    canvas: &HtmlCanvasElement,
) -> Result<(), JsValue>
where
    X: AxisTransform + ?Sized,
    Y: AxisTransform + ?Sized,
{
    let mut surface = CanvasSurface::from_canvas(canvas)?;
    renderer
        .render(data, scale_x, scale_y, x_axis, y_axis, area, &mut surface)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod browser_tests {
    use super::*;
    use heatgrid_core::{LinearAxis, Palette};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn make_canvas(width: u32, height: u32) -> HtmlCanvasElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .unwrap()
            .dyn_into()
            .unwrap();
        canvas.set_width(width);
        canvas.set_height(height);
        canvas
    }

    fn pixel_at(ctx: &CanvasRenderingContext2d, x: f64, y: f64) -> [u8; 4] {
        let data = ctx.get_image_data(x, y, 1.0, 1.0).unwrap().data();
        [data[0], data[1], data[2], data[3]]
    }

    fn reference_data() -> HeatmapData {
        HeatmapData::new(
            vec![0.0, 0.0, 1.0, 1.0],
            vec![0.0, 1.0, 0.0, 1.0],
            vec![0.0, 5.0, 10.0, 2.0],
        )
        .unwrap()
    }

    fn blue_red_renderer() -> HeatmapTileRenderer {
        let palette =
            Palette::new(vec![Color::new(0, 0, 255), Color::new(255, 0, 0)]).unwrap();
        HeatmapTileRenderer::new(palette)
    }

    #[wasm_bindgen_test]
    fn reference_scenario_paints_expected_tiles() {
        let canvas = make_canvas(200, 200);
        let ctx = get_2d_context(&canvas).unwrap();
        let mut surface = CanvasSurface::new(ctx.clone());

        blue_red_renderer()
            .render(
                &reference_data(),
                &Scale::new(-0.5, 1.5),
                &Scale::new(-0.5, 1.5),
                &LinearAxis::horizontal(),
                &LinearAxis::vertical(),
                &PlotRect::new(0.0, 0.0, 200.0, 200.0),
                &mut surface,
            )
            .unwrap();

        // (x=0, y=1) is bucket 0: blue tile in the top-left quadrant
        assert_eq!(pixel_at(&ctx, 50.0, 50.0), [0, 0, 255, 255]);
        // (x=1, y=0) is bucket 1: red tile in the bottom-right quadrant
        assert_eq!(pixel_at(&ctx, 150.0, 150.0), [255, 0, 0, 255]);
        // zero-count and no-fill cells stay transparent
        assert_eq!(pixel_at(&ctx, 50.0, 150.0)[3], 0);
        assert_eq!(pixel_at(&ctx, 150.0, 50.0)[3], 0);
    }

    #[wasm_bindgen_test]
    fn fills_are_clipped_to_the_plot_area() {
        let canvas = make_canvas(200, 200);
        let ctx = get_2d_context(&canvas).unwrap();
        let mut surface = CanvasSurface::new(ctx.clone());

        // Scale bounds sit on the bucket centers, so edge tiles extend half
        // a tile past the 100x100 plot area into the canvas.
        blue_red_renderer()
            .render(
                &reference_data(),
                &Scale::new(0.0, 1.0),
                &Scale::new(0.0, 1.0),
                &LinearAxis::horizontal(),
                &LinearAxis::vertical(),
                &PlotRect::new(0.0, 0.0, 100.0, 100.0),
                &mut surface,
            )
            .unwrap();

        // inside the plot area the red tile is painted
        assert_eq!(pixel_at(&ctx, 75.0, 75.0), [255, 0, 0, 255]);
        // its overflow past the plot area is clipped away
        assert_eq!(pixel_at(&ctx, 120.0, 75.0)[3], 0);
    }

    #[wasm_bindgen_test]
    fn render_to_canvas_reaches_the_element() {
        let canvas = make_canvas(100, 100);

        render_to_canvas(
            &blue_red_renderer(),
            &reference_data(),
            &Scale::new(-0.5, 1.5),
            &Scale::new(-0.5, 1.5),
            &LinearAxis::horizontal(),
            &LinearAxis::vertical(),
            &PlotRect::new(0.0, 0.0, 100.0, 100.0),
            &canvas,
        )
        .unwrap();

        let ctx = get_2d_context(&canvas).unwrap();
        assert_eq!(pixel_at(&ctx, 25.0, 25.0), [0, 0, 255, 255]);
    }
}
