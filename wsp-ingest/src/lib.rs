//! # WSP Ingest Library (wsp-ingest)
//!
//! Audio ingestion for the speech recognition service.
//!
//! **Purpose:** Turn an uncompressed PCM WAV file into mono `f32` samples at
//! the rate the recognition engine expects.
//!
//! **Architecture:** container parser → PCM decoder → downmixer → normalizer
//! → linear resampler, orchestrated by [`pipeline::load`].
//!
//! ```no_run
//! let audio = wsp_ingest::load("speech.wav", 16000)?;
//! println!("{} samples", audio.len());
//! # Ok::<(), wsp_ingest::Error>(())
//! ```

pub mod audio;
pub mod error;
pub mod loader;
pub mod pipeline;

pub use audio::ResampledAudio;
pub use error::{Error, Result};
pub use loader::{AudioLoader, WavLoader};
pub use pipeline::{load, load_async, load_bytes};
