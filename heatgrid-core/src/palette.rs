//! Discrete color palettes for bucket quantization.

use serde::{Deserialize, Serialize};

use crate::RenderError;

/// Hard cap on palette size. Bucket quantization is only readable up to a
/// few dozen levels; in practice 16 or fewer is typical.
pub const MAX_BUCKETS: usize = 64;

/// An sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#ff8800`, usable as a canvas fill style.
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// An ordered sequence of discrete colors, one per intensity bucket.
///
/// Index 0 is the lowest-intensity bucket, the last index the highest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette from an explicit color list. Rejects lists larger
    /// than [`MAX_BUCKETS`].
    pub fn new(colors: Vec<Color>) -> Result<Self, RenderError> {
        if colors.len() > MAX_BUCKETS {
            return Err(RenderError::PaletteTooLarge { len: colors.len() });
        }
        Ok(Self { colors })
    }

    /// Quantize a multi-stop ramp into `steps` discrete colors.
    ///
    /// Stops are spaced evenly across [0, 1]; each bucket samples the ramp
    /// at its center with linear sRGB interpolation between stops.
    pub fn quantize(stops: &[Color], steps: usize) -> Result<Self, RenderError> {
        if steps > MAX_BUCKETS {
            return Err(RenderError::PaletteTooLarge { len: steps });
        }
        if stops.is_empty() || steps == 0 {
            return Ok(Self { colors: Vec::new() });
        }
        if stops.len() == 1 {
            return Ok(Self {
                colors: vec![stops[0]; steps],
            });
        }

        let colors = (0..steps)
            .map(|i| {
                let t = (i as f64 + 0.5) / steps as f64;
                sample_ramp(stops, t)
            })
            .collect();
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Classic heat ramp: black through red and yellow to white.
    pub fn heat(steps: usize) -> Result<Self, RenderError> {
        Self::quantize(
            &[
                Color::new(0, 0, 0),
                Color::new(128, 0, 0),
                Color::new(255, 64, 0),
                Color::new(255, 200, 0),
                Color::new(255, 255, 255),
            ],
            steps,
        )
    }

    /// Full-spectrum ramp: blue through green to red.
    pub fn spectrum(steps: usize) -> Result<Self, RenderError> {
        Self::quantize(
            &[
                Color::new(0, 0, 160),
                Color::new(0, 160, 255),
                Color::new(0, 200, 80),
                Color::new(255, 220, 0),
                Color::new(220, 0, 0),
            ],
            steps,
        )
    }

    /// Single-hue blues ramp, dark to light.
    pub fn blues(steps: usize) -> Result<Self, RenderError> {
        Self::quantize(
            &[
                Color::new(8, 24, 88),
                Color::new(40, 96, 168),
                Color::new(120, 176, 216),
                Color::new(224, 240, 255),
            ],
            steps,
        )
    }

    /// Grayscale ramp, black to white.
    pub fn grayscale(steps: usize) -> Result<Self, RenderError> {
        Self::quantize(&[Color::new(0, 0, 0), Color::new(255, 255, 255)], steps)
    }
}

/// Sample an evenly spaced stop ramp at `t` in [0, 1].
fn sample_ramp(stops: &[Color], t: f64) -> Color {
    let segments = stops.len() - 1;
    let scaled = t.clamp(0.0, 1.0) * segments as f64;
    let seg = (scaled as usize).min(segments - 1);
    let seg_t = scaled - seg as f64;

    let a = stops[seg];
    let b = stops[seg + 1];
    Color::new(
        lerp_channel(a.r, b.r, seg_t),
        lerp_channel(a.g, b.g, seg_t),
        lerp_channel(a.b, b.b, seg_t),
    )
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_oversized_palette() {
        let colors = vec![Color::new(0, 0, 0); MAX_BUCKETS + 1];

        assert_eq!(
            Palette::new(colors),
            Err(RenderError::PaletteTooLarge {
                len: MAX_BUCKETS + 1
            })
        );
    }

    #[test]
    fn new_accepts_max_size_palette() {
        let colors = vec![Color::new(0, 0, 0); MAX_BUCKETS];

        assert_eq!(Palette::new(colors).unwrap().len(), MAX_BUCKETS);
    }

    #[test]
    fn quantize_produces_requested_step_count() {
        let palette = Palette::heat(16).unwrap();

        assert_eq!(palette.len(), 16);
    }

    #[test]
    fn quantize_is_monotonic_for_grayscale() {
        let palette = Palette::grayscale(8).unwrap();

        for pair in palette.colors().windows(2) {
            assert!(pair[0].r < pair[1].r);
        }
    }

    #[test]
    fn quantize_single_stop_repeats_color() {
        let palette = Palette::quantize(&[Color::new(10, 20, 30)], 4).unwrap();

        assert_eq!(palette.colors(), &[Color::new(10, 20, 30); 4]);
    }

    #[test]
    fn quantize_empty_stops_yields_empty_palette() {
        let palette = Palette::quantize(&[], 8).unwrap();

        assert!(palette.is_empty());
    }

    #[test]
    fn color_to_css_hex() {
        assert_eq!(Color::new(255, 136, 0).to_css(), "#ff8800");
        assert_eq!(Color::new(0, 0, 0).to_css(), "#000000");
    }

    #[test]
    fn palette_serialization_roundtrip() {
        let original = Palette::spectrum(12).unwrap();

        let json = serde_json::to_string(&original).unwrap();
        let restored: Palette = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, original);
    }
}
