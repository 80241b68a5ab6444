//! Errors produced while exporting artifacts.

use artifact_export_common::errors::{ArtifactError, BroadcastError};
use artifact_export_common::NetworkId;
use std::io::Error as IoError;
use std::path::PathBuf;
use thiserror::Error;

/// An error that aborts an export run.
///
/// Every variant names the phase that failed and the contract, network or
/// output file it failed on.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The artifact of a contract could not be loaded.
    #[error("an issue occurred trying to process the contract ABI {name}")]
    Contract {
        /// Name of the contract whose artifact failed to load.
        name: String,
        /// The underlying loader error.
        #[source]
        source: ArtifactError,
    },

    /// The generated ABI module could not be written.
    #[error("an issue occurred trying to save ABIs to {}", .path.display())]
    WriteAbis {
        /// Destination of the ABI module.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: IoError,
    },

    /// The broadcast log of a network could not be loaded.
    #[error("an issue occurred trying to process the deployments on network {network}")]
    Network {
        /// The network whose broadcast log failed to load.
        network: NetworkId,
        /// The underlying loader error.
        #[source]
        source: BroadcastError,
    },

    /// The generated deployments module could not be written.
    #[error("an issue occurred trying to save deployments to {}", .path.display())]
    WriteDeployments {
        /// Destination of the deployments module.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: IoError,
    },
}

impl ExportError {
    /// Returns the phase of the run the error happened in.
    pub fn phase(&self) -> Phase {
        match self {
            ExportError::Contract { .. } | ExportError::WriteAbis { .. } => Phase::Abis,
            ExportError::Network { .. } | ExportError::WriteDeployments { .. } => {
                Phase::Deployments
            }
        }
    }
}

/// The two phases of an export run, in execution order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Collecting and writing contract ABIs.
    Abis,
    /// Collecting and writing deployment addresses.
    Deployments,
}
