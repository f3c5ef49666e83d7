//! Error types for the cloning run.
//!
//! `AppError` aggregates the errors that can stop the program before the
//! pipeline starts. Once the pipeline is running, failures are handled
//! per-item through the retry layer and never surface here.

pub mod api;
pub mod config;

use thiserror::Error;

use crate::error::{api::ApiError, config::ConfigError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// HTTP client construction or request error.
    #[error(transparent)]
    ApiErr(#[from] ApiError),
}
