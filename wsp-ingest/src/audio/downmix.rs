//! Channel downmixing
//!
//! Collapses interleaved frames to one value per frame by equal-weight
//! averaging. The mean is taken in `f64` so large channel counts at full
//! 32-bit scale cannot overflow.

use crate::audio::types::{BitDepth, MonoSequence, SampleMatrix};
use tracing::debug;

/// Reduce `matrix` to mono.
///
/// A single channel passes through (converted to `f64`, which is exact for
/// every `i32`).
pub fn downmix(matrix: SampleMatrix, bit_depth: BitDepth) -> MonoSequence {
    let channels = matrix.channels();

    let samples: Vec<f64> = if channels == 1 {
        matrix.into_samples().into_iter().map(f64::from).collect()
    } else {
        debug!("Downmixing {} channels to mono", channels);
        let divisor = channels as f64;
        matrix
            .frames()
            .map(|frame| frame.iter().map(|&s| f64::from(s)).sum::<f64>() / divisor)
            .collect()
    };

    MonoSequence::new(bit_depth, samples)
}
