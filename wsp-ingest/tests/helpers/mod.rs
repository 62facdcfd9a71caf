//! Shared helpers for wsp-ingest integration tests

#![allow(dead_code)]

pub mod audio_generator;
pub mod wav_bytes;
