//! Recording surface for tests and headless verification.

use crate::palette::Color;
use crate::plot_rect::PlotRect;
use crate::surface::{Surface, TilePath};

/// A path that remembers every rectangle appended to it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedPath {
    pub rects: Vec<(f64, f64, f64, f64)>,
}

impl TilePath for RecordedPath {
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.rects.push((x, y, width, height));
    }
}

/// One fill operation as observed by the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedFill {
    pub color: Color,
    pub rects: Vec<(f64, f64, f64, f64)>,
    /// Whether a clip region was active when the fill was issued.
    pub clipped: bool,
}

/// A [`Surface`] that captures operations instead of painting.
///
/// Used by the integration tests to assert on batching behavior (fill
/// counts, rectangle assignments, clip discipline) without a canvas.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub fills: Vec<RecordedFill>,
    pub clip: Option<PlotRect>,
    clip_depth: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fill operations issued so far.
    pub fn fill_count(&self) -> usize {
        self.fills.len()
    }

    /// True when every `clip_to` has been matched by an `end_clip`.
    pub fn clips_balanced(&self) -> bool {
        self.clip_depth == 0
    }

    /// All rectangles across all fills, flattened.
    pub fn all_rects(&self) -> Vec<(f64, f64, f64, f64)> {
        self.fills
            .iter()
            .flat_map(|fill| fill.rects.iter().copied())
            .collect()
    }
}

impl Surface for RecordingSurface {
    type Path = RecordedPath;

    fn begin_path(&self) -> RecordedPath {
        RecordedPath::default()
    }

    fn clip_to(&mut self, area: &PlotRect) {
        self.clip = Some(*area);
        self.clip_depth += 1;
    }

    fn fill_path(&mut self, path: &RecordedPath, color: &Color) {
        self.fills.push(RecordedFill {
            color: *color,
            rects: path.rects.clone(),
            clipped: self.clip_depth > 0,
        });
    }

    fn end_clip(&mut self) {
        self.clip_depth = self.clip_depth.saturating_sub(1);
    }
}
