//! Deployment broadcast logs written by `forge script`.
//!
//! Every broadcast run records the transactions it sent in
//! `<broadcast>/<Script>.s.sol/<network>/run-latest.json`. We only read the
//! `transactions` list and, from every transaction, its type tag, contract
//! name and contract address.

use crate::errors::BroadcastError;
use crate::NetworkId;
use serde::Deserialize;
use serde_json::{from_reader, from_slice, from_str};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Substring marking contract creation transaction types, such as `CREATE`
/// and `CREATE2`.
pub const CREATE_MARKER: &str = "CREATE";

/// Name of the broadcast log describing the latest run of a script.
pub const LATEST_RUN: &str = "run-latest.json";

/// A parsed broadcast log.
#[derive(Clone, Debug, Deserialize)]
pub struct Broadcast {
    /// Transactions in the order they were broadcast.
    pub transactions: Vec<BroadcastTransaction>,
}

/// A single broadcast transaction.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastTransaction {
    /// Type tag, for example `CREATE`, `CREATE2` or `CALL`.
    pub transaction_type: String,
    /// Name of the contract created or called, when known.
    #[serde(default)]
    pub contract_name: Option<String>,
    /// Address of the contract created or called, when known.
    #[serde(default)]
    pub contract_address: Option<String>,
}

impl BroadcastTransaction {
    /// Returns `true` if this transaction deployed a contract.
    ///
    /// This is a substring check so that every tag of the creation family
    /// matches, including ones we do not know about.
    pub fn is_creation(&self) -> bool {
        self.transaction_type.contains(CREATE_MARKER)
    }
}

/// Key used for creations whose contract forge could not identify.
pub const UNKNOWN_CONTRACT: &str = "null";

/// A contract deployed by a broadcast run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Creation<'a> {
    /// Name of the deployed contract, [`UNKNOWN_CONTRACT`] if the log does
    /// not name it.
    pub contract_name: &'a str,
    /// Address the contract was deployed at, if the log records one.
    pub contract_address: Option<&'a str>,
}

impl Broadcast {
    /// Returns the contract creations of this run in broadcast order.
    ///
    /// Creations are never dropped: a missing or `null` contract name is
    /// recorded under [`UNKNOWN_CONTRACT`] and a missing address is kept as
    /// `None`.
    pub fn creations(&self) -> Vec<Creation> {
        let mut creations = Vec::new();
        for (index, tx) in self.transactions.iter().enumerate() {
            if !tx.is_creation() {
                log::trace!("skipping {} transaction #{}", tx.transaction_type, index);
                continue;
            }

            let contract_name = tx.contract_name.as_deref().unwrap_or_else(|| {
                log::warn!("creation transaction #{} has no contract name", index);
                UNKNOWN_CONTRACT
            });
            if tx.contract_address.is_none() {
                log::warn!("creation transaction #{} has no contract address", index);
            }

            creations.push(Creation {
                contract_name,
                contract_address: tx.contract_address.as_deref(),
            });
        }

        creations
    }
}

/// Loads broadcast logs of a deployment script.
#[derive(Clone, Debug)]
pub struct BroadcastLoader {
    /// Root directory of all broadcast logs.
    pub broadcast_dir: PathBuf,
    /// File name of the deployment script, for example `Deploy.s.sol`.
    pub script: String,
}

impl BroadcastLoader {
    /// Creates a new loader for the given broadcast directory and script.
    pub fn new(broadcast_dir: impl Into<PathBuf>, script: impl Into<String>) -> Self {
        BroadcastLoader {
            broadcast_dir: broadcast_dir.into(),
            script: script.into(),
        }
    }

    /// Returns the path of the latest broadcast log for a network.
    pub fn log_path(&self, network: &NetworkId) -> PathBuf {
        self.broadcast_dir
            .join(&self.script)
            .join(network.as_str())
            .join(LATEST_RUN)
    }

    /// Loads the latest broadcast log for a network.
    pub fn load(&self, network: &NetworkId) -> Result<Broadcast, BroadcastError> {
        let path = self.log_path(network);
        log::debug!(
            "reading broadcast log for network {} from {}",
            network,
            path.display(),
        );
        self.load_from_file(path)
    }

    /// Loads a broadcast log from an arbitrary path.
    pub fn load_from_file(&self, p: impl AsRef<Path>) -> Result<Broadcast, BroadcastError> {
        let file = File::open(p.as_ref())?;
        Ok(from_reader(BufReader::new(file))?)
    }

    /// Loads a broadcast log from a reader of JSON text.
    pub fn load_from_reader(&self, v: impl Read) -> Result<Broadcast, BroadcastError> {
        Ok(from_reader(v)?)
    }

    /// Loads a broadcast log from bytes of JSON text.
    pub fn load_from_slice(&self, v: &[u8]) -> Result<Broadcast, BroadcastError> {
        Ok(from_slice(v)?)
    }

    /// Loads a broadcast log from string of JSON text.
    pub fn load_from_str(&self, v: &str) -> Result<Broadcast, BroadcastError> {
        Ok(from_str(v)?)
    }
}

impl Default for BroadcastLoader {
    fn default() -> Self {
        BroadcastLoader::new("broadcast", "Deploy.s.sol")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn broadcast(json: &str) -> Broadcast {
        BroadcastLoader::default().load_from_str(json).unwrap()
    }

    #[test]
    fn creation_tags_match_by_substring() {
        let tx = |tag: &str| BroadcastTransaction {
            transaction_type: tag.to_string(),
            contract_name: None,
            contract_address: None,
        };

        assert!(tx("CREATE").is_creation());
        assert!(tx("CREATE2").is_creation());
        assert!(tx("CREATE3").is_creation());
        assert!(!tx("CALL").is_creation());
        assert!(!tx("create").is_creation());
    }

    #[test]
    fn creations_in_order() {
        let log = broadcast(
            r#"{
                "transactions": [
                    { "hash": "0x01", "transactionType": "CREATE", "contractName": "Foo", "contractAddress": "0xA" },
                    { "hash": "0x02", "transactionType": "CALL", "contractName": "Bar", "contractAddress": "0xB" },
                    { "hash": "0x03", "transactionType": "CREATE2", "contractName": "Foo", "contractAddress": "0xC" }
                ],
                "receipts": [],
                "chain": 1
            }"#,
        );

        assert_eq!(
            log.creations(),
            vec![
                Creation {
                    contract_name: "Foo",
                    contract_address: Some("0xA"),
                },
                Creation {
                    contract_name: "Foo",
                    contract_address: Some("0xC"),
                },
            ],
        );
    }

    #[test]
    fn calls_may_omit_contract_details() {
        let log = broadcast(
            r#"{ "transactions": [{ "transactionType": "CALL", "contractName": null }] }"#,
        );
        assert!(log.creations().is_empty());
    }

    #[test]
    fn unidentified_creations_are_kept() {
        let log = broadcast(
            r#"{ "transactions": [
                { "transactionType": "CALL" },
                { "transactionType": "CREATE", "contractName": null, "contractAddress": "0xA" },
                { "transactionType": "CREATE2", "contractAddress": "0xB" },
                { "transactionType": "CREATE", "contractName": "Foo", "contractAddress": null }
            ] }"#,
        );

        assert_eq!(
            log.creations(),
            vec![
                Creation {
                    contract_name: UNKNOWN_CONTRACT,
                    contract_address: Some("0xA"),
                },
                Creation {
                    contract_name: UNKNOWN_CONTRACT,
                    contract_address: Some("0xB"),
                },
                Creation {
                    contract_name: "Foo",
                    contract_address: None,
                },
            ],
        );
    }

    #[test]
    fn transactions_are_required() {
        let err = BroadcastLoader::default()
            .load_from_str(r#"{ "receipts": [] }"#)
            .unwrap_err();
        assert!(matches!(err, BroadcastError::Json(_)));
    }

    #[test]
    fn load_latest_run() {
        let dir = tempfile::tempdir().unwrap();
        let loader = BroadcastLoader::new(dir.path(), "Deploy.s.sol");
        let network = NetworkId::from(31337);

        let path = loader.log_path(&network);
        assert!(path.ends_with("Deploy.s.sol/31337/run-latest.json"));

        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{ "transactions": [] }"#).unwrap();
        assert!(loader.load(&network).unwrap().transactions.is_empty());

        let err = loader.load(&NetworkId::from(1)).unwrap_err();
        assert!(matches!(err, BroadcastError::Io(_)));
    }
}
