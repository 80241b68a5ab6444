#![deny(missing_docs, unsafe_code)]

//! Crate for exporting compiled contract ABIs and deployment addresses into
//! TypeScript modules. It reads the artifacts `forge build` writes and the
//! broadcast logs `forge script` writes, and generates:
//!
//! - `generated/abi.ts` exporting `abis`, the ABI of every configured
//!   contract by name;
//! - `generated/networks.ts` exporting `deployments`, the addresses of
//!   every contract created on every configured network.
//!
//! # Examples
//!
//! ```no_run
//! # use artifact_export_generate::ExportBuilder;
//! let summary = ExportBuilder::new()
//!     .root("contracts")
//!     .contract("Token")
//!     .network(1_u64)
//!     .run()
//!     .expect("export failed");
//! ```

pub mod config;
pub mod errors;
pub mod output;

mod generate;

pub use crate::config::ExportConfig;
pub use crate::errors::{ExportError, Phase};
pub use crate::generate::{AbiMapping, DeploymentMapping};
pub use crate::output::GeneratedModule;

/// Convenience re-imports so that you don't have to add
/// `artifact-export-common` as a dependency.
pub mod loaders {
    pub use artifact_export_common::{ArtifactLoader, BroadcastLoader};
}

use artifact_export_common::{ArtifactLoader, BroadcastLoader, NetworkId};
use std::path::{Path, PathBuf};

/// Name of the constant exported from the ABI module.
pub const ABIS_EXPORT: &str = "abis";

/// Name of the constant exported from the deployments module.
pub const DEPLOYMENTS_EXPORT: &str = "deployments";

/// Builder for an export run. Note that nothing is read or written until the
/// builder is used to build or write a mapping, or to `run`.
#[derive(Clone, Debug)]
pub struct ExportBuilder {
    /// Directory all other paths are relative to.
    pub root: PathBuf,

    /// The forge build output directory.
    pub artifacts_dir: PathBuf,

    /// The forge broadcast directory.
    pub broadcast_dir: PathBuf,

    /// File name of the deployment script whose broadcasts are read.
    pub script: String,

    /// Destination of the generated ABI module.
    pub abi_output: PathBuf,

    /// Destination of the generated deployments module.
    pub deployments_output: PathBuf,

    /// Contracts whose ABIs are exported, in output order.
    pub contracts: Vec<String>,

    /// Networks whose deployments are exported.
    pub networks: Vec<NetworkId>,
}

impl ExportBuilder {
    /// Creates a new export builder with default settings and no contracts
    /// or networks.
    pub fn new() -> Self {
        ExportBuilder {
            root: PathBuf::new(),
            artifacts_dir: "out".into(),
            broadcast_dir: "broadcast".into(),
            script: "Deploy.s.sol".to_string(),
            abi_output: "generated/abi.ts".into(),
            deployments_output: "generated/networks.ts".into(),
            contracts: Vec::new(),
            networks: Vec::new(),
        }
    }

    /// Sets the directory all other paths are relative to. Defaults to the
    /// current working directory.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Sets the forge build output directory.
    pub fn artifacts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifacts_dir = dir.into();
        self
    }

    /// Sets the forge broadcast directory.
    pub fn broadcast_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.broadcast_dir = dir.into();
        self
    }

    /// Sets the file name of the deployment script, for example
    /// `Deploy.s.sol`.
    pub fn script(mut self, script: impl Into<String>) -> Self {
        self.script = script.into();
        self
    }

    /// Sets the destination of the generated ABI module.
    pub fn abi_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.abi_output = path.into();
        self
    }

    /// Sets the destination of the generated deployments module.
    pub fn deployments_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.deployments_output = path.into();
        self
    }

    /// Adds a contract to export the ABI of.
    pub fn contract(mut self, name: impl Into<String>) -> Self {
        self.contracts.push(name.into());
        self
    }

    /// Adds contracts to export the ABIs of.
    pub fn contracts<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.contracts.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds a network to export deployments for.
    pub fn network(mut self, network: impl Into<NetworkId>) -> Self {
        self.networks.push(network.into());
        self
    }

    /// Adds networks to export deployments for.
    pub fn networks<I>(mut self, networks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<NetworkId>,
    {
        self.networks.extend(networks.into_iter().map(Into::into));
        self
    }

    /// Returns the artifact loader for the configured output directory.
    pub fn artifact_loader(&self) -> ArtifactLoader {
        ArtifactLoader::new(self.root.join(&self.artifacts_dir))
    }

    /// Returns the broadcast loader for the configured script.
    pub fn broadcast_loader(&self) -> BroadcastLoader {
        BroadcastLoader::new(self.root.join(&self.broadcast_dir), self.script.clone())
    }

    /// Resolved path of the generated ABI module.
    pub fn abi_output_path(&self) -> PathBuf {
        self.root.join(&self.abi_output)
    }

    /// Resolved path of the generated deployments module.
    pub fn deployments_output_path(&self) -> PathBuf {
        self.root.join(&self.deployments_output)
    }

    /// Loads the ABI of every configured contract.
    pub fn build_abis(&self) -> Result<AbiMapping, ExportError> {
        generate::expand_abis(&self.artifact_loader(), &self.contracts)
    }

    /// Collects the deployed addresses on every configured network.
    pub fn build_deployments(&self) -> Result<DeploymentMapping, ExportError> {
        generate::expand_deployments(&self.broadcast_loader(), &self.networks)
    }

    /// Writes the ABI module.
    pub fn write_abis(&self, abis: &AbiMapping) -> Result<PathBuf, ExportError> {
        let path = self.abi_output_path();
        write_module(ABIS_EXPORT, abis, &path)
            .map_err(|source| ExportError::WriteAbis {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }

    /// Writes the deployments module.
    pub fn write_deployments(
        &self,
        deployments: &DeploymentMapping,
    ) -> Result<PathBuf, ExportError> {
        let path = self.deployments_output_path();
        write_module(DEPLOYMENTS_EXPORT, deployments, &path).map_err(|source| {
            ExportError::WriteDeployments {
                path: path.clone(),
                source,
            }
        })?;
        Ok(path)
    }

    /// Runs both phases: builds and writes the ABI module, then builds and
    /// writes the deployments module. The first error aborts the run, so a
    /// failure in the deployments phase leaves the ABI module written.
    pub fn run(&self) -> Result<Summary, ExportError> {
        let abis = self.build_abis()?;
        let abi_output = self.write_abis(&abis)?;
        log::info!(
            "exported {} contract ABIs to {}",
            abis.len(),
            abi_output.display(),
        );

        let deployments = self.build_deployments()?;
        let deployments_output = self.write_deployments(&deployments)?;
        let summary = Summary {
            contracts: abis.len(),
            networks: deployments.len(),
            deployments: deployments
                .values()
                .flat_map(|contracts| contracts.values())
                .map(Vec::len)
                .sum(),
        };
        log::info!(
            "exported {} deployments on {} networks to {}",
            summary.deployments,
            summary.networks,
            deployments_output.display(),
        );

        Ok(summary)
    }
}

impl Default for ExportBuilder {
    fn default() -> Self {
        ExportBuilder::new()
    }
}

/// Totals of a successful export run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// Number of distinct contracts in the ABI module.
    pub contracts: usize,
    /// Number of networks with at least one deployment.
    pub networks: usize,
    /// Number of deployed addresses across all networks.
    pub deployments: usize,
}

fn write_module(
    export_name: &str,
    value: &impl serde::Serialize,
    path: &Path,
) -> std::io::Result<()> {
    let module = GeneratedModule::new(export_name, value)?;
    module.write_to_file(path)?;
    log::debug!("wrote {} to {}", export_name, path.display());
    Ok(())
}
