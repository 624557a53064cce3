use alloy::providers::Provider;
use clap::Parser;
use scripts::{
    artifacts::ArtifactStore,
    cli::Cli,
    deployer::Deployer,
    deployments::Deployments,
    errors::ScriptError,
    utils::setup_client,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        priv_key,
        rpc_url,
        artifacts_dir,
        deployments_path,
        network,
        confirmations,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let (signer, client) = setup_client(&priv_key, &rpc_url)?;
    let chain_id = client
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let network = network.unwrap_or_else(|| chain_id.to_string());
    info!(
        "Deploying from {:#x} to chain {chain_id} ({network})",
        signer.address()
    );

    let deployer = Deployer::new(
        client,
        signer.address(),
        ArtifactStore::new(artifacts_dir),
        Deployments::new(deployments_path, network),
        confirmations,
    );

    command.run(&deployer).await
}
