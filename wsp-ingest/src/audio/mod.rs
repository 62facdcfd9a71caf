//! Audio ingestion stages
//!
//! Data flows strictly forward:
//! container → decoder → downmix → normalize → resampler

pub mod container;
pub mod decoder;
pub mod downmix;
pub mod normalize;
pub mod resampler;
pub mod types;

pub use container::WavContainer;
pub use resampler::Resampler;
pub use types::{
    AudioStreamDescriptor, BitDepth, MonoSequence, RawSamples, ResampledAudio, SampleMatrix,
};
