//! WSP Ingest (wsp-ingest) - Main entry point
//!
//! Loads a WAV file through the ingestion pipeline and reports what the
//! speech engine would receive. With `--output`, the mono samples are written
//! back out as a 32-bit float WAV at the target rate.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wsp_common::config::{ConfigLocation, SampleRateResolver};
use wsp_ingest::ResampledAudio;

/// Command-line arguments for wsp-ingest
#[derive(Parser, Debug)]
#[command(name = "wsp-ingest")]
#[command(about = "Convert a PCM WAV file into mono float samples for speech recognition")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ", ", env!("BUILD_PROFILE"), ", built ", env!("BUILD_TIMESTAMP"), ")"))]
struct Args {
    /// WAV file to load
    input: PathBuf,

    /// Target sample rate in Hz (overrides WSP_TARGET_SAMPLE_RATE and the config file)
    #[arg(short = 'r', long)]
    target_rate: Option<u32>,

    /// Config file (defaults to <config dir>/wsp/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the result as a mono 32-bit float WAV
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    let config_location = ConfigLocation::locate(args.config.as_deref());
    let toml_config = config_location
        .load()
        .context("Failed to load configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| toml_config.log_level().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config_location.warn_if_defaulted();

    let target_rate = SampleRateResolver::default()
        .resolve(args.target_rate, Some(&toml_config))
        .context("Failed to resolve target sample rate")?;

    info!("Loading {} at {}Hz", args.input.display(), target_rate);

    let audio = wsp_ingest::load_async(&args.input, target_rate)
        .await
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    info!(
        "Loaded {} samples ({:.2}s at {}Hz), peak {:.4}",
        audio.len(),
        audio.duration_seconds(),
        audio.sample_rate,
        audio.peak()
    );

    if let Some(output) = &args.output {
        write_float_wav(output, &audio)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        info!("Wrote {}", output.display());
    }

    Ok(())
}

/// Write mono f32 samples with hound
fn write_float_wav(path: &Path, audio: &ResampledAudio) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: audio.sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in &audio.samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}
