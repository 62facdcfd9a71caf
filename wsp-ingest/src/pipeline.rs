//! Pipeline orchestration
//!
//! Sequences parse → decode → downmix → normalize → resample and stops at the
//! first failing stage. Nothing is cached between calls; every buffer lives
//! only for the duration of one load.

use crate::audio::{container, decoder, downmix, normalize, Resampler, ResampledAudio};
use crate::error::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Load a WAV file as mono `f32` samples at `target_rate`.
///
/// The extension is checked before the file is opened, then the file is read
/// once and run through [`load_bytes`].
///
/// # Errors
/// - `InvalidTargetRate`: `target_rate` is zero
/// - `UnsupportedFormat`: not a `.wav` path, or not uncompressed PCM
/// - `MalformedContainer` / `UnsupportedBitDepth`: see [`load_bytes`]
/// - `Io`: the file could not be read
pub fn load<P: AsRef<Path>>(path: P, target_rate: u32) -> Result<ResampledAudio> {
    let path = path.as_ref();
    check_target_rate(target_rate)?;
    container::ensure_wav_extension(path)?;

    debug!("Loading WAV file: {}", path.display());
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;

    load_bytes(&bytes, target_rate)
}

/// Async variant of [`load`].
///
/// Only the file read suspends; the stages run synchronously afterwards.
pub async fn load_async<P: AsRef<Path>>(path: P, target_rate: u32) -> Result<ResampledAudio> {
    let path = path.as_ref();
    check_target_rate(target_rate)?;
    container::ensure_wav_extension(path)?;

    debug!("Loading WAV file: {}", path.display());
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::io(path, e))?;

    load_bytes(&bytes, target_rate)
}

/// Run the pipeline over an in-memory WAV image.
///
/// # Errors
/// - `InvalidTargetRate`: `target_rate` is zero
/// - `UnsupportedFormat`: not RIFF/WAVE PCM
/// - `UnsupportedBitDepth`: bit depth other than 8, 16 or 32
/// - `MalformedContainer`: truncated or inconsistent header or payload
pub fn load_bytes(bytes: &[u8], target_rate: u32) -> Result<ResampledAudio> {
    check_target_rate(target_rate)?;

    let wav = container::parse(bytes)?;
    let descriptor = wav.descriptor;

    let matrix = decoder::decode(&descriptor, wav.payload);
    let mono = downmix::downmix(matrix, descriptor.bit_depth());
    let normalized = normalize::normalize(mono);
    let samples = Resampler::resample(normalized, descriptor.sample_rate(), target_rate);

    debug!(
        "WAV processed: {} samples at {}Hz",
        samples.len(),
        target_rate
    );

    Ok(ResampledAudio::new(samples, target_rate))
}

fn check_target_rate(target_rate: u32) -> Result<()> {
    if target_rate == 0 {
        return Err(Error::InvalidTargetRate(target_rate));
    }
    Ok(())
}
