//! The export configuration file.
//!
//! The list of contracts and networks to export is maintained next to the
//! contracts in `export.config.json`:
//!
//! ```json
//! {
//!   "contracts": ["Token", "Vault"],
//!   "networks": [1, 11155111, "anvil"]
//! }
//! ```
//!
//! Directory and output locations may be overridden with `artifactsDir`,
//! `broadcastDir`, `script`, `abiOutput` and `deploymentsOutput`, all
//! relative to the directory the export runs in.

use crate::ExportBuilder;
use artifact_export_common::NetworkId;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Default file name of the export configuration.
pub const CONFIG_FILE: &str = "export.config.json";

/// Contents of the export configuration file.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ExportConfig {
    /// Contracts whose ABIs get exported, in output order.
    pub contracts: Vec<String>,
    /// Networks whose deployments get exported.
    pub networks: Vec<NetworkId>,
    /// Override for the forge build output directory.
    pub artifacts_dir: Option<PathBuf>,
    /// Override for the forge broadcast directory.
    pub broadcast_dir: Option<PathBuf>,
    /// Override for the deployment script file name.
    pub script: Option<String>,
    /// Override for the generated ABI module path.
    pub abi_output: Option<PathBuf>,
    /// Override for the generated deployments module path.
    pub deployments_output: Option<PathBuf>,
}

impl ExportConfig {
    /// Reads the configuration from a file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = File::open(path)?;
        ExportConfig::from_reader(BufReader::new(file))
    }

    /// Reads the configuration from a reader of JSON text.
    pub fn from_reader(r: impl Read) -> anyhow::Result<Self> {
        Ok(serde_json::from_reader(r)?)
    }

    /// Converts the configuration into a builder rooted at `root`.
    pub fn into_builder(self, root: impl Into<PathBuf>) -> ExportBuilder {
        let mut builder = ExportBuilder::new()
            .root(root)
            .contracts(self.contracts)
            .networks(self.networks);

        if let Some(dir) = self.artifacts_dir {
            builder = builder.artifacts_dir(dir);
        }
        if let Some(dir) = self.broadcast_dir {
            builder = builder.broadcast_dir(dir);
        }
        if let Some(script) = self.script {
            builder = builder.script(script);
        }
        if let Some(path) = self.abi_output {
            builder = builder.abi_output(path);
        }
        if let Some(path) = self.deployments_output {
            builder = builder.deployments_output(path);
        }

        builder
    }
}
