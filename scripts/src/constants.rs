//! Constants used in the deploy scripts

/// The default reward duration of the reward pool, in seconds (one day)
pub const DEFAULT_REWARD_DURATION: u64 = 24 * 60 * 60;

/// The default withdrawal period of the reward & lock pools, in seconds (five minutes)
pub const DEFAULT_WITHDRAW_PERIOD: u64 = 5 * 60;

/// The default number of confirmations to wait for on each transaction
pub const DEFAULT_CONFIRMATIONS: u64 = 1;

/// The default RPC url, that of a local devnet node
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The default directory in which compilation artifacts are looked up
pub const DEFAULT_ARTIFACTS_DIR: &str = "build/contracts";

/// The default path of the deployments record
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The extension of a compilation artifact
pub const ARTIFACT_EXTENSION: &str = "json";

/// The extension of the per-source directories foundry writes artifacts into
pub const SOLIDITY_EXTENSION: &str = "sol";

/// The name of the initializer invoked through the upgradeable proxy
pub const INITIALIZER_NAME: &str = "initialize";

/// The storage slot containing the proxy admin contract address in the upgradeable proxy.
///
/// This is specified in EIP1967: https://eips.ethereum.org/EIPS/eip-1967#admin-address
pub const PROXY_ADMIN_STORAGE_SLOT: &str =
    "0xb53127684a568b3173ae13b9f8a6016e243e63b6e8ee1178d6a717850b5d6103";

/// The number of bytes stored in a single storage slot
pub const NUM_BYTES_STORAGE_SLOT: usize = 32;

/// The number of bytes in an Ethereum address
pub const NUM_BYTES_ADDRESS: usize = 20;

/// The line printed above and below the addresses a procedure outputs
pub const BANNER: &str = "***********************************************";

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The blacklist contract key in the `deployments.json` file
pub const BLACK_LIST_CONTRACT_KEY: &str = "black_list_contract";

/// The lock pool contract key in the `deployments.json` file
pub const LOCK_POOL_CONTRACT_KEY: &str = "lock_pool_contract";

/// The reward pool contract key in the `deployments.json` file
pub const NO_MINT_REWARD_POOL_CONTRACT_KEY: &str = "no_mint_reward_pool_contract";

/// The pool manager implementation contract key in the `deployments.json` file
pub const POOL_MANAGER_CONTRACT_KEY: &str = "pool_manager_contract";

/// The pool manager proxy contract key in the `deployments.json` file
pub const POOL_MANAGER_PROXY_CONTRACT_KEY: &str = "pool_manager_proxy_contract";

/// The pool manager proxy admin contract key in the `deployments.json` file
pub const POOL_MANAGER_PROXY_ADMIN_CONTRACT_KEY: &str = "pool_manager_proxy_admin_contract";
