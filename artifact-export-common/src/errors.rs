//! Module with common error types.

use serde_json::Error as JsonError;
use std::io::Error as IoError;
use thiserror::Error;

/// An error in loading or parsing a contract artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// An IO error occurred when loading a contract artifact from disk.
    #[error("failed to open contract artifact file: {0}")]
    Io(#[from] IoError),

    /// A JSON error occurred while parsing a contract artifact.
    #[error("failed to parse contract artifact JSON: {0}")]
    Json(#[from] JsonError),

    /// The artifact parsed but has no `abi` field.
    #[error("contract artifact has no `abi` field")]
    MissingAbi,
}

/// An error in loading or parsing a deployment broadcast log.
#[derive(Debug, Error)]
pub enum BroadcastError {
    /// An IO error occurred when loading a broadcast log from disk.
    #[error("failed to open broadcast log file: {0}")]
    Io(#[from] IoError),

    /// A JSON error occurred while parsing a broadcast log.
    #[error("failed to parse broadcast log JSON: {0}")]
    Json(#[from] JsonError),
}

/// An error parsing a network identifier.
#[derive(Clone, Debug, Error)]
#[error("'{0}' is not a valid network identifier")]
pub struct ParseNetworkIdError(pub String);
