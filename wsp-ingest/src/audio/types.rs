//! Core audio data types
//!
//! Defines the values handed from stage to stage. Each value is created fresh
//! per load, moved into the next stage, and never shared.

use crate::error::{Error, Result};

/// Sample encodings the pipeline accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// Unsigned, offset-encoded around 128
    Eight,
    /// Signed little-endian
    Sixteen,
    /// Signed little-endian
    ThirtyTwo,
}

impl BitDepth {
    pub fn bits(self) -> u16 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
            BitDepth::ThirtyTwo => 32,
        }
    }

    pub fn bytes_per_sample(self) -> usize {
        self.bits() as usize / 8
    }
}

impl TryFrom<u16> for BitDepth {
    type Error = Error;

    fn try_from(bits: u16) -> Result<Self> {
        match bits {
            8 => Ok(BitDepth::Eight),
            16 => Ok(BitDepth::Sixteen),
            32 => Ok(BitDepth::ThirtyTwo),
            _ => Err(Error::UnsupportedBitDepth { bits }),
        }
    }
}

/// Stream metadata read from the container's format and data chunks.
///
/// Construction through [`AudioStreamDescriptor::new`] guarantees
/// `payload_len == frame_count * block_align()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioStreamDescriptor {
    channels: u16,
    bit_depth: BitDepth,
    sample_rate: u32,
    frame_count: usize,
}

impl AudioStreamDescriptor {
    /// Build a descriptor and check it against the payload length.
    ///
    /// # Errors
    /// `MalformedContainer` for zero channels, zero sample rate, or a payload
    /// that is not a whole number of frames.
    pub fn new(
        channels: u16,
        bit_depth: BitDepth,
        sample_rate: u32,
        payload_len: usize,
    ) -> Result<Self> {
        if channels == 0 {
            return Err(Error::MalformedContainer(
                "channel count: expected at least 1, got 0".to_string(),
            ));
        }
        if sample_rate == 0 {
            return Err(Error::MalformedContainer(
                "sample rate: expected a positive rate, got 0".to_string(),
            ));
        }

        let block_align = channels as usize * bit_depth.bytes_per_sample();
        if payload_len % block_align != 0 {
            return Err(Error::MalformedContainer(format!(
                "data length {} is not a multiple of the {}-byte frame size ({} channels x {} bits)",
                payload_len,
                block_align,
                channels,
                bit_depth.bits()
            )));
        }

        Ok(Self {
            channels,
            bit_depth,
            sample_rate,
            frame_count: payload_len / block_align,
        })
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn bit_depth(&self) -> BitDepth {
        self.bit_depth
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Bytes per frame (one sample for every channel)
    pub fn block_align(&self) -> usize {
        self.channels as usize * self.bit_depth.bytes_per_sample()
    }

    /// Expected payload size in bytes
    pub fn payload_len(&self) -> usize {
        self.frame_count * self.block_align()
    }

    pub fn duration_seconds(&self) -> f64 {
        self.frame_count as f64 / self.sample_rate as f64
    }
}

/// Undecoded sample bytes, borrowed from the container image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSamples<'a>(&'a [u8]);

impl<'a> RawSamples<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Interleaved integer samples, one row per frame and one column per channel.
///
/// 8-bit samples are already centered to [-128, 127].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleMatrix {
    channels: usize,
    samples: Vec<i32>,
}

impl SampleMatrix {
    /// `samples.len()` must be a multiple of `channels`.
    pub(crate) fn new(channels: usize, samples: Vec<i32>) -> Self {
        debug_assert!(channels > 0);
        debug_assert_eq!(samples.len() % channels, 0);
        Self { channels, samples }
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels
    }

    /// Iterate frames as `&[i32]` of length `channels()`
    pub fn frames(&self) -> std::slice::ChunksExact<'_, i32> {
        self.samples.chunks_exact(self.channels)
    }

    /// Flat interleaved view: [L, R, L, R, ...]
    pub fn as_interleaved(&self) -> &[i32] {
        &self.samples
    }

    pub(crate) fn into_samples(self) -> Vec<i32> {
        self.samples
    }
}

/// One value per frame, still on the integer scale of the source bit depth
#[derive(Debug, Clone, PartialEq)]
pub struct MonoSequence {
    bit_depth: BitDepth,
    samples: Vec<f64>,
}

impl MonoSequence {
    pub(crate) fn new(bit_depth: BitDepth, samples: Vec<f64>) -> Self {
        Self { bit_depth, samples }
    }

    pub fn bit_depth(&self) -> BitDepth {
        self.bit_depth
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub(crate) fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

/// Final pipeline output: mono f32 samples at `sample_rate`.
///
/// Values are within [-1.0, 1.0] for 16-bit sources and may sit marginally
/// outside for extreme 32-bit values. 8-bit sources stay on the centered
/// [-128.0, 127.0] scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ResampledAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl ResampledAudio {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Largest absolute sample value (0.0 for empty audio)
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |peak, s| peak.max(s.abs()))
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}
