use anyhow::{Context as _, Result};
use artifact_export_generate::config::{ExportConfig, CONFIG_FILE};
use artifact_export_generate::Summary;
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(summary) => log::info!(
            "done: {} contracts, {} deployments on {} networks",
            summary.contracts,
            summary.deployments,
            summary.networks,
        ),
        Err(err) => {
            eprintln!("{:?}", err);
            process::exit(1);
        }
    }
}

fn run() -> Result<Summary> {
    let config = ExportConfig::load(CONFIG_FILE)
        .with_context(|| format!("failed to load export configuration from {}", CONFIG_FILE))?;
    log::debug!(
        "exporting {} contracts and {} networks",
        config.contracts.len(),
        config.networks.len(),
    );

    let summary = config.into_builder(PathBuf::new()).run()?;
    Ok(summary)
}
