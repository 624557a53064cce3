//! Integration tests for the deploy procedures. These assume that a devnet is already running locally,
//! and that the contracts' compilation artifacts are available.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![deny(unsafe_code)]

mod abis;
mod cli;
mod constants;
mod test_inventory;
mod utils;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use constants::{DEVNET_CONFIRMATIONS, DEVNET_NETWORK};
use eyre::Result;
use scripts::{
    artifacts::ArtifactStore, deployer::Deployer, deployments::Deployments, utils::setup_client,
};
use test_inventory::{IntegrationTest, TestArgs};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let Cli {
        test,
        artifacts_dir,
        deployments_file,
        priv_key,
        rpc_url,
    } = Cli::parse();

    tracing_subscriber::fmt().init();

    let (signer, client) = setup_client(&priv_key, &rpc_url)?;
    let deployer = Deployer::new(
        client,
        signer.address(),
        ArtifactStore::new(artifacts_dir),
        Deployments::new(deployments_file, DEVNET_NETWORK),
        DEVNET_CONFIRMATIONS,
    );
    let args = TestArgs { deployer };

    let tests = inventory::iter::<IntegrationTest>
        .into_iter()
        .filter(|t| test.as_deref().map_or(true, |name| t.name == name))
        .collect::<Vec<_>>();
    if tests.is_empty() {
        eyre::bail!("no test named {}", test.unwrap_or_default());
    }

    let mut failures = 0;
    for t in tests {
        match (t.test_fn)(args.clone()).await {
            Ok(()) => println!("{} {}", t.name, "PASSED".green().bold()),
            Err(e) => {
                failures += 1;
                println!("{} {}: {e:?}", t.name, "FAILED".red().bold());
            }
        }
    }

    if failures > 0 {
        println!("{}", format!("{failures} test(s) failed").red());
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", "All tests passed".green());
    Ok(ExitCode::SUCCESS)
}
