//! Type definitions used throughout the scripts

use std::fmt::{self, Display};

use alloy::primitives::Address;

/// The contracts the scripts know how to deploy
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PoolContract {
    /// The blacklist registry consulted by the reward pool
    BlackList,
    /// The lock pool holding withdrawn stake during the withdrawal period
    LockPool,
    /// The non-minting reward pool
    NoMintRewardPool,
    /// The pool manager, deployed behind an upgradeable proxy
    PoolManager,
    /// The OpenZeppelin v5 transparent upgradeable proxy
    TransparentUpgradeableProxy,
}

impl PoolContract {
    /// The name of the contract's compilation artifact, without extension
    pub fn artifact_name(&self) -> &'static str {
        match self {
            PoolContract::BlackList => "BlackList",
            PoolContract::LockPool => "LockPool",
            PoolContract::NoMintRewardPool => "NoMintRewardPool",
            PoolContract::PoolManager => "PoolManager",
            PoolContract::TransparentUpgradeableProxy => "TransparentUpgradeableProxy",
        }
    }

    /// The number of constructor arguments the scripts pass to the contract
    pub fn constructor_arity(&self) -> usize {
        match self {
            PoolContract::BlackList => 1,
            PoolContract::LockPool | PoolContract::PoolManager => 0,
            PoolContract::NoMintRewardPool => 10,
            PoolContract::TransparentUpgradeableProxy => 3,
        }
    }
}

impl Display for PoolContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.artifact_name())
    }
}

/// The validated parameters of the reward pool deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardPoolConfig {
    /// The display name of the reward pool
    pub name: String,
    /// The token paid out as reward
    pub reward_token: Address,
    /// The liquidity token staked into the pool
    pub lp_token: Address,
    /// The reward duration, in seconds
    pub duration: u64,
    /// The account allowed to notify reward amounts
    pub distribution: Address,
    /// The governance of the reward pool
    pub governance: Address,
    /// The governance of the blacklist registry
    pub blacklist_governance: Address,
    /// The account allowed to administer withdrawals
    pub withdraw_admin: Address,
    /// The withdrawal period, in seconds
    pub withdraw_period: u64,
}

/// The validated parameters of the pool manager deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolManagerConfig {
    /// The governance passed to the pool manager's initializer
    pub governance: Address,
    /// The owner of the proxy admin, `None` for the deployer
    pub proxy_owner: Option<Address>,
}

/// The contracts deployed when bringing up a reward pool
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RewardPoolDeployment {
    /// The blacklist registry
    pub black_list: Address,
    /// The lock pool
    pub lock_pool: Address,
    /// The reward pool
    pub reward_pool: Address,
}

/// The contracts deployed when bringing up a contract behind an upgradeable proxy
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProxyDeployment {
    /// The proxy, through which the implementation is called
    pub proxy: Address,
    /// The proxy admin, deployed by the proxy's constructor
    pub proxy_admin: Address,
    /// The implementation (logic) contract
    pub implementation: Address,
}
