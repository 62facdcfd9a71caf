//! Audio loader seam for speech engines
//!
//! Engines receive an [`AudioLoader`] from their owner instead of building
//! one, so the WAV pipeline can be swapped out without touching the engine.

use crate::audio::ResampledAudio;
use crate::error::Result;
use crate::pipeline;
use std::path::Path;

/// Turns an audio file into mono `f32` samples at a requested rate
pub trait AudioLoader: Send + Sync {
    fn load(&self, path: &Path, target_rate: u32) -> Result<ResampledAudio>;
}

/// [`AudioLoader`] backed by the uncompressed WAV pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct WavLoader;

impl AudioLoader for WavLoader {
    fn load(&self, path: &Path, target_rate: u32) -> Result<ResampledAudio> {
        pipeline::load(path, target_rate)
    }
}

impl<L: AudioLoader + ?Sized> AudioLoader for std::sync::Arc<L> {
    fn load(&self, path: &Path, target_rate: u32) -> Result<ResampledAudio> {
        (**self).load(path, target_rate)
    }
}
