//! Definition of the CLI arguments for integration tests

use clap::Parser;

use crate::constants::{
    DEFAULT_ARTIFACTS_DIR, DEFAULT_DEPLOYMENTS_FILE, DEFAULT_DEVNET_HOSTPORT, DEFAULT_DEVNET_PKEY,
};

/// CLI tool for running integration tests against a running devnet node.
///
/// Each test deploys the contracts it checks, from the artifacts in `artifacts_dir`.
#[derive(Parser)]
pub(crate) struct Cli {
    /// The test to run, all tests are run if omitted
    #[arg(short, long)]
    pub(crate) test: Option<String>,

    /// Directory containing the contracts' compilation artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub(crate) artifacts_dir: String,

    /// Path to the file deployed addresses are recorded in
    #[arg(short, long, default_value = DEFAULT_DEPLOYMENTS_FILE)]
    pub(crate) deployments_file: String,

    /// Devnet private key, defaults to the first Anvil devnet account
    #[arg(short, long, env = "PKEY", default_value = DEFAULT_DEVNET_PKEY)]
    pub(crate) priv_key: String,

    /// Devnet RPC URL, defaults to the default Anvil hostport
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_DEVNET_HOSTPORT)]
    pub(crate) rpc_url: String,
}
