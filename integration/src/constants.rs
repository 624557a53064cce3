//! Constants used in the integration tests

use alloy::primitives::{address, Address};

/// The default hostport that the Anvil devnet node runs on
pub(crate) const DEFAULT_DEVNET_HOSTPORT: &str = "http://127.0.0.1:8545";

/// The default private key that the Anvil devnet is seeded with
pub(crate) const DEFAULT_DEVNET_PKEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// The default directory of the contracts' compilation artifacts, relative to
/// the directory the tests are run from, as for `filda-deploy`
pub(crate) const DEFAULT_ARTIFACTS_DIR: &str = "build/contracts";

/// The default file deployed addresses are recorded in
pub(crate) const DEFAULT_DEPLOYMENTS_FILE: &str = "deployments.devnet.json";

/// The network label addresses are recorded under
pub(crate) const DEVNET_NETWORK: &str = "devnet";

/// The number of confirmations to wait for on the devnet
pub(crate) const DEVNET_CONFIRMATIONS: u64 = 1;

/// The name given to the reward pools deployed in the tests
pub(crate) const TEST_POOL_NAME: &str = "Test LP Pool";

/// The reward duration the reward pools are deployed with
pub(crate) const EXPECTED_DURATION: u64 = 86_400;

/// The withdrawal period the reward & lock pools are deployed with
pub(crate) const EXPECTED_WITHDRAW_PERIOD: u64 = 300;

// The devnet has no tokens or governance deployed, so the reward pool is
// parameterized with the other funded Anvil accounts

/// Stands in for the reward token
pub(crate) const REWARD_TOKEN: Address = address!("70997970c51812dc3a010c7d01b50e0d17dc79c8");

/// Stands in for the liquidity token
pub(crate) const LP_TOKEN: Address = address!("3c44cdddb6a900fa2b585dd299e03d12fa4293bc");

/// Stands in for the reward distribution account
pub(crate) const DISTRIBUTION: Address = address!("90f79bf6eb2c4f870365e785982e1f101e93b906");

/// Stands in for the governance
pub(crate) const GOVERNANCE: Address = address!("15d34aaf54267db7d7c367839aaf71a00a2c6a65");

/// Stands in for the withdrawal admin
pub(crate) const WITHDRAW_ADMIN: Address = address!("9965507d1a55bcc2695c58ba16fb37d819b0a4dc");
