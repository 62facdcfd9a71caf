//! WAV container parsing
//!
//! Walks the RIFF chunk list of an in-memory WAV image, validates the `fmt `
//! chunk and locates the `data` payload without copying it.
//!
//! Layout handled:
//! ```text
//! "RIFF" <u32 size> "WAVE"
//!   "fmt " <u32 size> <tag, channels, rate, byte rate, block align, bits [, extension]>
//!   ...   <u32 size> <skipped, padded to even length>
//!   "data" <u32 size> <interleaved little-endian samples>
//! ```

use crate::audio::types::{AudioStreamDescriptor, BitDepth, RawSamples};
use crate::error::{Error, Result};
use std::path::Path;
use tracing::debug;

const RIFF_HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;
const FMT_MIN_LEN: usize = 16;
const FMT_EXTENSIBLE_MIN_LEN: usize = 40;

const WAVE_FORMAT_PCM: u16 = 0x0001;
const WAVE_FORMAT_EXTENSIBLE: u16 = 0xFFFE;

/// Tail shared by every KSDATAFORMAT_SUBTYPE GUID; the first two bytes carry
/// the format tag.
const SUBFORMAT_GUID_TAIL: [u8; 14] = [
    0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xAA, 0x00, 0x38, 0x9B, 0x71,
];

/// A parsed WAV image: validated metadata plus the borrowed sample bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavContainer<'a> {
    pub descriptor: AudioStreamDescriptor,
    pub payload: RawSamples<'a>,
}

/// Fields of the `fmt ` chunk that survive validation
#[derive(Debug, Clone, Copy)]
struct FormatChunk {
    channels: u16,
    sample_rate: u32,
    bit_depth: BitDepth,
}

/// Reject paths whose extension is not `.wav` (case-insensitive).
///
/// # Errors
/// `UnsupportedFormat` naming the detected extension.
pub fn ensure_wav_extension(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if ext == "wav" {
        Ok(())
    } else if ext.is_empty() {
        Err(Error::UnsupportedFormat(format!(
            "only .wav files are supported, {} has no extension",
            path.display()
        )))
    } else {
        Err(Error::UnsupportedFormat(format!(
            "only .wav files are supported, got .{}",
            ext
        )))
    }
}

/// Parse a complete WAV image.
///
/// Stops at the first `data` chunk; anything after it is ignored.
///
/// # Errors
/// - `UnsupportedFormat`: not a RIFF/WAVE image, or a non-PCM codec
/// - `UnsupportedBitDepth`: bit depth other than 8, 16 or 32
/// - `MalformedContainer`: truncated header or chunk, missing `fmt `/`data`,
///   inconsistent header fields, or a payload that is not whole frames
pub fn parse(bytes: &[u8]) -> Result<WavContainer<'_>> {
    if bytes.len() < RIFF_HEADER_LEN {
        return Err(Error::MalformedContainer(format!(
            "file is {} bytes, shorter than the {}-byte RIFF header",
            bytes.len(),
            RIFF_HEADER_LEN
        )));
    }

    match &bytes[0..4] {
        b"RIFF" => {}
        b"RIFX" | b"RF64" => {
            return Err(Error::UnsupportedFormat(format!(
                "{} containers are not supported, expected little-endian RIFF",
                fourcc(&bytes[0..4])
            )));
        }
        other => {
            return Err(Error::MalformedContainer(format!(
                "expected RIFF magic, got {}",
                fourcc(other)
            )));
        }
    }

    if &bytes[8..12] != b"WAVE" {
        return Err(Error::UnsupportedFormat(format!(
            "RIFF form type {} is not WAVE",
            fourcc(&bytes[8..12])
        )));
    }

    let mut format: Option<FormatChunk> = None;
    let mut pos = RIFF_HEADER_LEN;

    while bytes.len() - pos >= CHUNK_HEADER_LEN {
        let id = &bytes[pos..pos + 4];
        let size = read_u32(bytes, pos + 4) as usize;
        let body_start = pos + CHUNK_HEADER_LEN;
        let remaining = bytes.len() - body_start;

        if size > remaining {
            return Err(Error::MalformedContainer(format!(
                "{} chunk declares {} bytes but only {} remain",
                fourcc(id),
                size,
                remaining
            )));
        }
        let body = &bytes[body_start..body_start + size];

        match id {
            b"fmt " => {
                format = Some(parse_format_chunk(body)?);
            }
            b"data" => {
                let fmt = format.ok_or_else(|| {
                    Error::MalformedContainer("data chunk appears before fmt chunk".to_string())
                })?;

                let descriptor = AudioStreamDescriptor::new(
                    fmt.channels,
                    fmt.bit_depth,
                    fmt.sample_rate,
                    body.len(),
                )?;

                debug!(
                    "WAV info: channels={}, bits={}, sample_rate={}, frames={}",
                    descriptor.channels(),
                    descriptor.bit_depth().bits(),
                    descriptor.sample_rate(),
                    descriptor.frame_count()
                );

                return Ok(WavContainer {
                    descriptor,
                    payload: RawSamples::new(body),
                });
            }
            _ => {
                debug!("Skipping {} chunk ({} bytes)", fourcc(id), size);
            }
        }

        // Chunk bodies are padded to even length; a missing final pad byte is tolerated.
        pos = (body_start + size + (size & 1)).min(bytes.len());
    }

    Err(Error::MalformedContainer(match format {
        Some(_) => "no data chunk found".to_string(),
        None => "no fmt chunk found".to_string(),
    }))
}

fn parse_format_chunk(body: &[u8]) -> Result<FormatChunk> {
    if body.len() < FMT_MIN_LEN {
        return Err(Error::MalformedContainer(format!(
            "fmt chunk is {} bytes, expected at least {}",
            body.len(),
            FMT_MIN_LEN
        )));
    }

    let format_tag = read_u16(body, 0);
    let channels = read_u16(body, 2);
    let sample_rate = read_u32(body, 4);
    let block_align = read_u16(body, 12);
    let bits = read_u16(body, 14);

    match format_tag {
        WAVE_FORMAT_PCM => {}
        WAVE_FORMAT_EXTENSIBLE => check_extensible_subformat(body)?,
        other => {
            return Err(Error::UnsupportedFormat(format!(
                "format tag 0x{:04X} is not uncompressed PCM (0x0001)",
                other
            )));
        }
    }

    if channels == 0 {
        return Err(Error::MalformedContainer(
            "channel count: expected at least 1, got 0".to_string(),
        ));
    }

    let bit_depth = BitDepth::try_from(bits)?;

    let expected_align = channels as usize * bit_depth.bytes_per_sample();
    if block_align as usize != expected_align {
        return Err(Error::MalformedContainer(format!(
            "block align: expected {} ({} channels x {} bits), got {}",
            expected_align, channels, bits, block_align
        )));
    }

    if sample_rate == 0 {
        return Err(Error::MalformedContainer(
            "sample rate: expected a positive rate, got 0".to_string(),
        ));
    }

    Ok(FormatChunk {
        channels,
        sample_rate,
        bit_depth,
    })
}

fn check_extensible_subformat(body: &[u8]) -> Result<()> {
    if body.len() < FMT_EXTENSIBLE_MIN_LEN {
        return Err(Error::MalformedContainer(format!(
            "extensible fmt chunk is {} bytes, expected at least {}",
            body.len(),
            FMT_EXTENSIBLE_MIN_LEN
        )));
    }

    let guid = &body[24..40];
    let sub_tag = read_u16(guid, 0);
    if guid[2..16] != SUBFORMAT_GUID_TAIL || sub_tag != WAVE_FORMAT_PCM {
        return Err(Error::UnsupportedFormat(format!(
            "extensible sub-format 0x{:04X} is not uncompressed PCM (0x0001)",
            sub_tag
        )));
    }
    Ok(())
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Printable chunk id, e.g. `"LIST"`
fn fourcc(id: &[u8]) -> String {
    format!("{:?}", String::from_utf8_lossy(id))
}
