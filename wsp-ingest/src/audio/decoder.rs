//! PCM sample decoding
//!
//! Turns the raw `data` payload into signed integer samples. Length validity
//! was established by the container parser, so decoding cannot fail.

use crate::audio::types::{AudioStreamDescriptor, BitDepth, RawSamples, SampleMatrix};
use tracing::debug;

/// Offset of unsigned 8-bit PCM's zero level
const U8_CENTER: i32 = 128;

/// Decode the payload described by `descriptor` into a [`SampleMatrix`].
///
/// - 8-bit: unsigned bytes, centered to [-128, 127]
/// - 16-bit: little-endian `i16`
/// - 32-bit: little-endian `i32`
pub fn decode(descriptor: &AudioStreamDescriptor, payload: RawSamples<'_>) -> SampleMatrix {
    let bytes = payload.as_bytes();
    debug_assert_eq!(bytes.len(), descriptor.payload_len());

    let samples: Vec<i32> = match descriptor.bit_depth() {
        BitDepth::Eight => bytes.iter().map(|&b| b as i32 - U8_CENTER).collect(),
        BitDepth::Sixteen => bytes
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]) as i32)
            .collect(),
        BitDepth::ThirtyTwo => bytes
            .chunks_exact(4)
            .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect(),
    };

    debug!(
        "Decoded {} samples ({} frames)",
        samples.len(),
        descriptor.frame_count()
    );

    SampleMatrix::new(descriptor.channels() as usize, samples)
}
