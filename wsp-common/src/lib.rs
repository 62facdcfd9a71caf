//! # WSP Common Library
//!
//! Shared code for the speech pipeline services including:
//! - Common error type
//! - Configuration loading (CLI, environment, TOML, compiled defaults)
//! - Model name resolution and the explicit model cache

pub mod config;
pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::ModelCache;
