//! Tools for loading compiled contract artifacts.
//!
//! Forge writes one JSON file per compiled contract into its output
//! directory, laid out as `<out>/<Name>.sol/<Name>.json`. The only field we
//! care about is `abi`, which is kept as an opaque JSON value and never
//! validated.

use crate::errors::ArtifactError;
use crate::Abi;
use serde_json::{from_reader, from_slice, from_str, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// A compiled contract: its name and its interface description.
#[derive(Clone, Debug, PartialEq)]
pub struct Contract {
    /// The contract name the artifact was looked up with.
    pub name: String,
    /// The contract ABI, exactly as found in the artifact.
    pub abi: Abi,
}

/// Loads compiled contract artifacts from a forge output directory.
#[derive(Clone, Debug)]
pub struct ArtifactLoader {
    /// Directory containing the per-source artifact directories.
    pub out_dir: PathBuf,
}

impl ArtifactLoader {
    /// Creates a new loader reading from the given output directory.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        ArtifactLoader {
            out_dir: out_dir.into(),
        }
    }

    /// Returns the path of the artifact file for the named contract.
    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.out_dir
            .join(format!("{}.sol", name))
            .join(format!("{}.json", name))
    }

    /// Loads the named contract from its artifact file.
    pub fn load(&self, name: &str) -> Result<Contract, ArtifactError> {
        let path = self.artifact_path(name);
        log::debug!("reading artifact for {} from {}", name, path.display());
        self.load_contract_from_file(name, path)
    }

    /// Loads a contract from an artifact file at an arbitrary path.
    pub fn load_contract_from_file(
        &self,
        name: impl Into<String>,
        p: impl AsRef<Path>,
    ) -> Result<Contract, ArtifactError> {
        let file = File::open(p.as_ref())?;
        let reader = BufReader::new(file);
        self.load_contract(name, reader, from_reader)
    }

    /// Loads a contract from a reader of JSON text.
    pub fn load_contract_from_reader(
        &self,
        name: impl Into<String>,
        v: impl Read,
    ) -> Result<Contract, ArtifactError> {
        self.load_contract(name, v, from_reader)
    }

    /// Loads a contract from bytes of JSON text.
    pub fn load_contract_from_slice(
        &self,
        name: impl Into<String>,
        v: &[u8],
    ) -> Result<Contract, ArtifactError> {
        self.load_contract(name, v, from_slice)
    }

    /// Loads a contract from string of JSON text.
    pub fn load_contract_from_str(
        &self,
        name: impl Into<String>,
        v: &str,
    ) -> Result<Contract, ArtifactError> {
        self.load_contract(name, v, from_str)
    }

    /// Loads a contract from an already parsed JSON value.
    pub fn load_contract_from_value(
        &self,
        name: impl Into<String>,
        v: Value,
    ) -> Result<Contract, ArtifactError> {
        self.load_contract(name, v, Ok)
    }

    fn load_contract<T>(
        &self,
        name: impl Into<String>,
        source: T,
        loader: impl FnOnce(T) -> serde_json::Result<Value>,
    ) -> Result<Contract, ArtifactError> {
        let abi = match loader(source)? {
            Value::Object(mut artifact) => artifact.remove("abi"),
            _ => None,
        }
        .ok_or(ArtifactError::MissingAbi)?;

        Ok(Contract {
            name: name.into(),
            abi,
        })
    }
}

impl Default for ArtifactLoader {
    fn default() -> Self {
        ArtifactLoader::new("out")
    }
}
