pub mod data;
pub mod error;
pub mod fills;
pub mod geometry;
pub mod palette;
pub mod plot_rect;
pub mod recording;
pub mod render;
pub mod scale;
pub mod surface;

pub use data::{GridLayout, HeatmapData};
pub use error::RenderError;
pub use fills::{counts_to_fills, NO_FILL};
pub use geometry::TileGeometry;
pub use palette::{Color, Palette, MAX_BUCKETS};
pub use plot_rect::PlotRect;
pub use recording::{RecordedFill, RecordedPath, RecordingSurface};
pub use render::HeatmapTileRenderer;
pub use scale::{AxisTransform, LinearAxis, LogAxis, Scale};
pub use surface::{Surface, TilePath};
