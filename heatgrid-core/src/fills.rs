//! Count → palette bucket quantization.

/// Bucket index meaning "do not draw this cell".
pub const NO_FILL: i32 = -1;

/// Quantize cell counts into palette bucket indices.
///
/// Each count maps to `trunc((count / max_count) * palette_len) - 1`, so the
/// maximum count always lands in the last (highest-intensity) bucket, and a
/// nonzero count whose ratio truncates to 0 maps to [`NO_FILL`]. The latter
/// is deliberate quantization behavior: a cell negligible relative to the
/// maximum silently does not render. Callers must skip negative indices
/// rather than treat them as errors.
///
/// When every count is zero there is no meaningful maximum; all cells map to
/// [`NO_FILL`] so the renderer draws nothing instead of propagating NaN.
pub fn counts_to_fills(counts: &[f64], palette_len: usize) -> Vec<i32> {
    // Explicit reduction; the input can be arbitrarily large.
    let mut max_count = 0.0_f64;
    for &count in counts {
        if count > max_count {
            max_count = count;
        }
    }

    if max_count <= 0.0 {
        return vec![NO_FILL; counts.len()];
    }

    let cols = palette_len as f64;
    counts
        .iter()
        .map(|&count| ((count / max_count) * cols) as i32 - 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantizes_reference_scenario() {
        // counts [0, 5, 10, 2] against a 2-color palette:
        // trunc((0/10)*2)-1 = -1, trunc((5/10)*2)-1 = 0,
        // trunc((10/10)*2)-1 = 1, trunc((2/10)*2)-1 = -1
        let fills = counts_to_fills(&[0.0, 5.0, 10.0, 2.0], 2);

        assert_eq!(fills, vec![-1, 0, 1, -1]);
    }

    #[test]
    fn maximum_count_saturates_to_last_bucket() {
        let fills = counts_to_fills(&[1.0, 3.0, 9.0, 4.0], 16);

        assert_eq!(fills[2], 15);
    }

    #[test]
    fn uniform_nonzero_counts_share_one_bucket() {
        let fills = counts_to_fills(&[7.0; 50], 8);

        assert!(fills.iter().all(|&f| f == 7));
    }

    #[test]
    fn negligible_count_gets_no_fill() {
        // 1/1000 of the max truncates to bucket 0 - 1
        let fills = counts_to_fills(&[1.0, 1000.0], 8);

        assert_eq!(fills, vec![NO_FILL, 7]);
    }

    #[test]
    fn all_zero_counts_get_no_fill() {
        let fills = counts_to_fills(&[0.0, 0.0, 0.0], 16);

        assert_eq!(fills, vec![NO_FILL; 3]);
    }

    #[test]
    fn empty_palette_gets_no_fill() {
        let fills = counts_to_fills(&[1.0, 2.0], 0);

        assert_eq!(fills, vec![NO_FILL, NO_FILL]);
    }

    #[test]
    fn handles_large_inputs() {
        // Big enough to break call-argument-spread approaches to max()
        let counts: Vec<f64> = (0..100_000).map(|i| (i % 97) as f64).collect();

        let fills = counts_to_fills(&counts, 16);

        assert_eq!(fills.len(), counts.len());
        assert!(fills.iter().all(|&f| (-1..16).contains(&f)));
    }
}
