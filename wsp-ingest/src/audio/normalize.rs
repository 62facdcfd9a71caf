//! Amplitude normalization
//!
//! Maps integer-scale samples onto floating point by dividing by the full
//! scale of the source bit depth. 8-bit samples are centered but divided by
//! 1.0, so they stay on the [-128, 127] scale. Values are not clamped.

use crate::audio::types::{BitDepth, MonoSequence};

/// Bit depth to normalization divisor
const NORMALIZATION_DIVISORS: [(BitDepth, f32); 3] = [
    (BitDepth::Eight, 1.0),
    (BitDepth::Sixteen, 32768.0),
    (BitDepth::ThirtyTwo, 2147483648.0),
];

fn table_index(bit_depth: BitDepth) -> usize {
    match bit_depth {
        BitDepth::Eight => 0,
        BitDepth::Sixteen => 1,
        BitDepth::ThirtyTwo => 2,
    }
}

/// Divisor applied to samples of `bit_depth`
pub fn divisor(bit_depth: BitDepth) -> f32 {
    NORMALIZATION_DIVISORS[table_index(bit_depth)].1
}

/// Convert to `f32` and scale.
///
/// The value is narrowed to `f32` before dividing, so a mono 16-bit sample
/// `s` comes out bit-identical to `s as f32 / 32768.0`.
pub fn normalize(mono: MonoSequence) -> Vec<f32> {
    let divisor = divisor(mono.bit_depth());
    mono.into_samples()
        .into_iter()
        .map(|s| s as f32 / divisor)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisor_table() {
        assert_eq!(divisor(BitDepth::Eight), 1.0);
        assert_eq!(divisor(BitDepth::Sixteen), 32768.0);
        assert_eq!(divisor(BitDepth::ThirtyTwo), 2147483648.0);
    }

    #[test]
    fn test_table_rows_match_their_index() {
        for (i, (depth, value)) in NORMALIZATION_DIVISORS.iter().enumerate() {
            assert_eq!(table_index(*depth), i);
            assert_eq!(divisor(*depth), *value);
        }
    }

    #[test]
    fn test_16_bit_bit_identical() {
        let raw = [i16::MIN, -12345, -1, 0, 1, 12345, i16::MAX];
        let mono = MonoSequence::new(
            BitDepth::Sixteen,
            raw.iter().map(|&s| s as f64).collect(),
        );
        let out = normalize(mono);
        for (o, r) in out.iter().zip(raw.iter()) {
            assert_eq!(o.to_bits(), (*r as f32 / 32768.0).to_bits());
        }
        assert_eq!(out[0], -1.0);
    }

    #[test]
    fn test_32_bit_full_scale() {
        let mono = MonoSequence::new(
            BitDepth::ThirtyTwo,
            vec![i32::MIN as f64, 0.0, i32::MAX as f64],
        );
        let out = normalize(mono);
        assert_eq!(out[0], -1.0);
        assert_eq!(out[1], 0.0);
        // i32::MAX rounds up to 2^31 in f32; not clamped
        assert_eq!(out[2], 1.0);
    }

    #[test]
    fn test_8_bit_left_on_centered_scale() {
        let mono = MonoSequence::new(BitDepth::Eight, vec![-128.0, 0.0, 127.0]);
        assert_eq!(normalize(mono), vec![-128.0, 0.0, 127.0]);
    }
}
