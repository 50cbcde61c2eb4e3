//! Crate error type

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Controller step with a non-positive or non-finite delta time
    #[error("Invalid time step: dt={0} (must be finite and > 0)")]
    InvalidTimeStep(f32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
