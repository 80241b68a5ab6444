//! Builds the ABI and deployment mappings from artifacts on disk.

use crate::errors::ExportError;
use artifact_export_common::broadcast::Creation;
use artifact_export_common::{Abi, ArtifactLoader, BroadcastLoader, NetworkId};
use indexmap::IndexMap;

/// Contract ABIs by contract name, in configuration order.
pub type AbiMapping = IndexMap<String, Abi>;

/// Deployed addresses by network, then by contract name, in broadcast order.
///
/// Addresses missing from the broadcast log are kept as `None` and serialize
/// as `null`.
pub type DeploymentMapping = IndexMap<NetworkId, IndexMap<String, Vec<Option<String>>>>;

/// Loads the ABI of every listed contract.
///
/// A name listed twice keeps its first position but the value from its last
/// load. Stops at the first contract that fails to load.
pub(crate) fn expand_abis(
    loader: &ArtifactLoader,
    contracts: &[String],
) -> Result<AbiMapping, ExportError> {
    let mut abis = AbiMapping::new();
    for name in contracts {
        let contract = loader
            .load(name)
            .map_err(|source| ExportError::Contract {
                name: name.clone(),
                source,
            })?;
        abis.insert(contract.name, contract.abi);
    }

    Ok(abis)
}

/// Collects the addresses of contracts created on every listed network.
///
/// Stops at the first network whose broadcast log fails to load.
pub(crate) fn expand_deployments(
    loader: &BroadcastLoader,
    networks: &[NetworkId],
) -> Result<DeploymentMapping, ExportError> {
    let mut deployments = DeploymentMapping::new();
    for network in networks {
        let broadcast = loader
            .load(network)
            .map_err(|source| ExportError::Network {
                network: network.clone(),
                source,
            })?;
        record_creations(&mut deployments, network, &broadcast.creations());
    }

    Ok(deployments)
}

fn record_creations(
    deployments: &mut DeploymentMapping,
    network: &NetworkId,
    creations: &[Creation],
) {
    // networks without creations get no entry at all
    if creations.is_empty() {
        log::debug!("no contracts created on network {}", network);
        return;
    }

    let contracts = deployments.entry(network.clone()).or_default();
    for creation in creations {
        log::debug!(
            "{} deployed at {} on network {}",
            creation.contract_name,
            creation.contract_address.unwrap_or("<unknown>"),
            network,
        );
        contracts
            .entry(creation.contract_name.to_string())
            .or_default()
            .push(creation.contract_address.map(str::to_string));
    }
}
