//! Error types for the submission flow.

use thiserror::Error;

/// Inputs that can still be missing when the user hits detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInput {
    Crop,
    Image,
    State,
    District,
}

/// Common error type.
///
/// The first two variants are validation outcomes detected before any
/// network traffic; the rest describe a dispatched request that failed.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Please select a crop and upload an image or check your location.")]
    IncompleteSelection(Vec<MissingInput>),

    #[error("A detection is already running. Please wait for the current result.")]
    AlreadyPending,

    #[error("request encoding error: {0}")]
    Encode(String),

    #[error("API error: {0}")]
    ApiStatus(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Result alias.
pub type Result<T> = std::result::Result<T, Error>;
