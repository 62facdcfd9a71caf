//! Linear interpolation resampling
//!
//! Converts a mono signal from its source rate to the caller's target rate.
//! There is no anti-aliasing filter: downsampling aliases and upsampling is
//! piecewise linear. Output is reproducible bit-for-bit from the algorithm
//! below.
//!
//! For N input samples the output has `N' = round(N * target / source)`
//! samples, and output `i` reads source position `p = i * N / N'`, blending
//! `x[floor(p)]` and `x[floor(p) + 1]` by `p - floor(p)`. Both indices are
//! clamped to the last input sample.

use tracing::debug;

/// Mono linear-interpolation resampler.
pub struct Resampler;

impl Resampler {
    /// Resample `input` from `source_rate` to `target_rate`.
    ///
    /// Equal rates return `input` unchanged without copying. Both rates must
    /// be non-zero.
    pub fn resample(input: Vec<f32>, source_rate: u32, target_rate: u32) -> Vec<f32> {
        debug_assert!(source_rate > 0 && target_rate > 0);

        if source_rate == target_rate {
            debug!("Sample rate already at {}Hz, skipping resample", target_rate);
            return input;
        }

        let output_len = Self::output_len(input.len(), source_rate, target_rate);
        debug!(
            "Resampling {} samples from {}Hz to {}Hz ({} output samples)",
            input.len(),
            source_rate,
            target_rate,
            output_len
        );

        Self::interpolate(&input, output_len)
    }

    /// `round(input_len * target_rate / source_rate)`, halves rounded away
    /// from zero
    pub fn output_len(input_len: usize, source_rate: u32, target_rate: u32) -> usize {
        if source_rate == target_rate {
            return input_len;
        }
        let exact = input_len as f64 * target_rate as f64 / source_rate as f64;
        exact.round() as usize
    }

    /// Stretch or squeeze `input` to exactly `output_len` samples.
    fn interpolate(input: &[f32], output_len: usize) -> Vec<f32> {
        if input.is_empty() || output_len == 0 {
            return Vec::new();
        }

        let last = input.len() - 1;
        let input_len = input.len() as u64;
        let out_len = output_len as u64;

        // p = i * N / N' split into integer and fractional parts exactly
        (0..out_len)
            .map(|i| {
                let scaled = i * input_len;
                let base = scaled / out_len;
                let frac = ((scaled % out_len) as f64 / out_len as f64) as f32;
                let i0 = (base as usize).min(last);
                let i1 = (i0 + 1).min(last);
                input[i0] + (input[i1] - input[i0]) * frac
            })
            .collect()
    }
}
