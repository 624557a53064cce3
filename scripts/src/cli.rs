//! Definitions of CLI arguments and commands for deploy scripts

use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{deploy_pool_manager, deploy_reward_pool},
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_CONFIRMATIONS, DEFAULT_DEPLOYMENTS_PATH,
        DEFAULT_REWARD_DURATION, DEFAULT_RPC_URL, DEFAULT_WITHDRAW_PERIOD,
    },
    deployer::Deployer,
    errors::ScriptError,
};

/// Deploy the FilDA reward pool & pool manager contracts to an EVM chain
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Private key of the deployer
    #[arg(short, long, env = "PKEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Directory containing the contracts' compilation artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: String,

    /// Path to a `deployments.json` file
    #[arg(short, long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments_path: String,

    /// Label under which addresses are recorded, defaults to the chain ID
    #[arg(short, long)]
    pub network: Option<String>,

    /// Number of confirmations to wait for on each transaction
    #[arg(short, long, default_value_t = DEFAULT_CONFIRMATIONS)]
    pub confirmations: u64,

    /// The procedure to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy procedures
#[derive(Subcommand)]
pub enum Command {
    /// Deploy a reward pool with its blacklist & lock pool
    DeployRewardPool(DeployRewardPoolArgs),
    /// Deploy the pool manager behind an upgradeable proxy
    DeployPoolManager(DeployPoolManagerArgs),
}

impl Command {
    /// Run the procedure with the given deployer
    pub async fn run(self, deployer: &Deployer) -> Result<(), ScriptError> {
        match self {
            Command::DeployRewardPool(args) => {
                deploy_reward_pool(&args, deployer).await.map(|_| ())
            }
            Command::DeployPoolManager(args) => {
                deploy_pool_manager(&args, deployer).await.map(|_| ())
            }
        }
    }
}

/// Deploy a reward pool.
///
/// Deploys a `BlackList`, a `LockPool` and a `NoMintRewardPool` wired to both,
/// then registers the reward pool & withdrawal period with the lock pool.
#[derive(Args, Clone, Debug)]
pub struct DeployRewardPoolArgs {
    /// Display name of the reward pool
    #[arg(long, default_value = "")]
    pub name: String,

    /// Reward token address in hex
    #[arg(long, env = "REWARD_TOKEN")]
    pub reward_token: String,

    /// Liquidity token address in hex
    #[arg(long, env = "LP_TOKEN")]
    pub lp_token: String,

    /// Reward duration, in seconds
    #[arg(long, default_value_t = DEFAULT_REWARD_DURATION)]
    pub duration: u64,

    /// Reward distribution account address in hex
    #[arg(long, env = "DISTRIBUTION")]
    pub distribution: String,

    /// Governance address in hex
    #[arg(long, env = "GOVERNANCE")]
    pub governance: String,

    /// Governance of the blacklist in hex, defaults to the pool governance
    #[arg(long)]
    pub blacklist_governance: Option<String>,

    /// Withdrawal admin account address in hex
    #[arg(long, env = "WITHDRAW_ADMIN")]
    pub withdraw_admin: String,

    /// Withdrawal period, in seconds
    #[arg(long, default_value_t = DEFAULT_WITHDRAW_PERIOD)]
    pub withdraw_period: u64,

    /// Deploy even if some addresses are the zero address
    #[arg(long)]
    pub allow_zero_address: bool,
}

/// Deploy the pool manager behind an upgradeable proxy.
///
/// Concretely, this is a [`TransparentUpgradeableProxy`](https://docs.openzeppelin.com/contracts/5.x/api/proxy#transparent_proxy),
/// which itself deploys a `ProxyAdmin` contract.
///
/// Calls made directly to the `TransparentUpgradeableProxy` contract will be forwarded to the implementation contract.
/// Upgrade calls can only be made to the `TransparentUpgradeableProxy` through the `ProxyAdmin`.
#[derive(Args, Clone, Debug)]
pub struct DeployPoolManagerArgs {
    /// Governance address in hex, passed to the pool manager's initializer
    #[arg(long, env = "GOVERNANCE")]
    pub governance: String,

    /// Owner of the proxy admin contract in hex, defaults to the deployer
    #[arg(long)]
    pub proxy_owner: Option<String>,

    /// Deploy even if some addresses are the zero address
    #[arg(long)]
    pub allow_zero_address: bool,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};
    use crate::constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_CONFIRMATIONS};

    const PKEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const ADDR: &str = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";

    #[test]
    fn test_parse_deploy_reward_pool() {
        let cli = Cli::try_parse_from([
            "filda-deploy",
            "--priv-key",
            PKEY,
            "--rpc-url",
            "http://localhost:8545",
            "deploy-reward-pool",
            "--reward-token",
            ADDR,
            "--lp-token",
            ADDR,
            "--distribution",
            ADDR,
            "--governance",
            ADDR,
            "--withdraw-admin",
            ADDR,
        ])
        .unwrap();

        assert_eq!(cli.artifacts_dir, DEFAULT_ARTIFACTS_DIR);
        assert_eq!(cli.confirmations, DEFAULT_CONFIRMATIONS);
        assert!(cli.network.is_none());

        let Command::DeployRewardPool(args) = cli.command else {
            panic!("expected the reward pool command");
        };
        assert_eq!(args.duration, 86_400);
        assert_eq!(args.withdraw_period, 300);
        assert!(args.blacklist_governance.is_none());
        assert!(!args.allow_zero_address);
    }

    #[test]
    fn test_parse_deploy_pool_manager() {
        let cli = Cli::try_parse_from([
            "filda-deploy",
            "--priv-key",
            PKEY,
            "--network",
            "devnet",
            "deploy-pool-manager",
            "--governance",
            ADDR,
            "--proxy-owner",
            ADDR,
        ])
        .unwrap();

        assert_eq!(cli.network.as_deref(), Some("devnet"));
        let Command::DeployPoolManager(args) = cli.command else {
            panic!("expected the pool manager command");
        };
        assert_eq!(args.governance, ADDR);
        assert_eq!(args.proxy_owner.as_deref(), Some(ADDR));
    }

    #[test]
    fn test_reject_unknown_command() {
        assert!(Cli::try_parse_from(["filda-deploy", "--priv-key", PKEY, "upgrade"]).is_err());
    }
}
