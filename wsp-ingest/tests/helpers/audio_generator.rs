//! Audio Test File Generation Utilities
//!
//! Writes deterministic WAV fixtures with hound so tests can compare pipeline
//! output against the exact integers that went in.

use hound::{SampleFormat, WavSpec, WavWriter};
use std::f32::consts::PI;
use std::path::Path;

fn int_spec(channels: u16, sample_rate: u32, bits_per_sample: u16) -> WavSpec {
    WavSpec {
        channels,
        sample_rate,
        bits_per_sample,
        sample_format: SampleFormat::Int,
    }
}

/// Write interleaved 16-bit samples
pub fn write_wav_i16<P: AsRef<Path>>(
    path: P,
    channels: u16,
    sample_rate: u32,
    samples: &[i16],
) -> Result<(), hound::Error> {
    let mut writer = WavWriter::create(path, int_spec(channels, sample_rate, 16))?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()
}

/// Write interleaved 32-bit samples
pub fn write_wav_i32<P: AsRef<Path>>(
    path: P,
    channels: u16,
    sample_rate: u32,
    samples: &[i32],
) -> Result<(), hound::Error> {
    let mut writer = WavWriter::create(path, int_spec(channels, sample_rate, 32))?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()
}

/// Write 8-bit samples; hound stores them offset by 128 on disk
pub fn write_wav_i8<P: AsRef<Path>>(
    path: P,
    channels: u16,
    sample_rate: u32,
    samples: &[i8],
) -> Result<(), hound::Error> {
    let mut writer = WavWriter::create(path, int_spec(channels, sample_rate, 8))?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()
}

/// Write 24-bit samples (a depth the pipeline rejects)
pub fn write_wav_i24<P: AsRef<Path>>(
    path: P,
    sample_rate: u32,
    samples: &[i32],
) -> Result<(), hound::Error> {
    let mut writer = WavWriter::create(path, int_spec(1, sample_rate, 24))?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()
}

/// Write 32-bit IEEE float samples (a codec the pipeline rejects)
pub fn write_wav_f32<P: AsRef<Path>>(
    path: P,
    sample_rate: u32,
    samples: &[f32],
) -> Result<(), hound::Error> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()
}

/// Mono 16-bit sine wave
///
/// # Arguments
/// * `frequency_hz` - Tone frequency (e.g., 440.0 for A4)
/// * `amplitude` - 0.0-1.0 of full scale
pub fn sine_i16(frames: usize, sample_rate: u32, frequency_hz: f32, amplitude: f32) -> Vec<i16> {
    let amplitude_i16 = amplitude * i16::MAX as f32;
    (0..frames)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            ((2.0 * PI * frequency_hz * t).sin() * amplitude_i16) as i16
        })
        .collect()
}
