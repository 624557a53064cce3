//! Implementations of the deploy procedures

use alloy::primitives::{Address, U256};
use alloy_sol_types::{SolCall, SolConstructor};
use tracing::info;

use crate::{
    cli::{DeployPoolManagerArgs, DeployRewardPoolArgs},
    constants::{
        BANNER, BLACK_LIST_CONTRACT_KEY, LOCK_POOL_CONTRACT_KEY, NO_MINT_REWARD_POOL_CONTRACT_KEY,
        POOL_MANAGER_CONTRACT_KEY, POOL_MANAGER_PROXY_ADMIN_CONTRACT_KEY,
        POOL_MANAGER_PROXY_CONTRACT_KEY,
    },
    deployer::Deployer,
    errors::ScriptError,
    solidity::{initializeCall, BlackList, LockPool, NoMintRewardPool},
    types::{
        PoolContract, PoolManagerConfig, ProxyDeployment, RewardPoolConfig, RewardPoolDeployment,
    },
    utils::{parse_address, send_tx, validate_period},
};

impl TryFrom<&DeployRewardPoolArgs> for RewardPoolConfig {
    type Error = ScriptError;

    fn try_from(args: &DeployRewardPoolArgs) -> Result<Self, Self::Error> {
        let allow_zero = args.allow_zero_address;
        let governance = parse_address("governance", &args.governance, allow_zero)?;
        let blacklist_governance = match &args.blacklist_governance {
            Some(addr) => parse_address("blacklist_governance", addr, allow_zero)?,
            None => governance,
        };

        Ok(Self {
            name: args.name.clone(),
            reward_token: parse_address("reward_token", &args.reward_token, allow_zero)?,
            lp_token: parse_address("lp_token", &args.lp_token, allow_zero)?,
            duration: validate_period("duration", args.duration)?,
            distribution: parse_address("distribution", &args.distribution, allow_zero)?,
            governance,
            blacklist_governance,
            withdraw_admin: parse_address("withdraw_admin", &args.withdraw_admin, allow_zero)?,
            withdraw_period: validate_period("withdraw_period", args.withdraw_period)?,
        })
    }
}

impl TryFrom<&DeployPoolManagerArgs> for PoolManagerConfig {
    type Error = ScriptError;

    fn try_from(args: &DeployPoolManagerArgs) -> Result<Self, Self::Error> {
        let allow_zero = args.allow_zero_address;
        let proxy_owner = args
            .proxy_owner
            .as_deref()
            .map(|addr| parse_address("proxy_owner", addr, allow_zero))
            .transpose()?;

        Ok(Self {
            governance: parse_address("governance", &args.governance, allow_zero)?,
            proxy_owner,
        })
    }
}

/// Prepare the constructor arguments of the blacklist
pub fn black_list_constructor_args(config: &RewardPoolConfig) -> Vec<u8> {
    BlackList::constructorCall {
        governance: config.blacklist_governance,
    }
    .abi_encode()
}

/// Prepare the constructor arguments of the reward pool, wired to the
/// already-deployed blacklist & lock pool
pub fn reward_pool_constructor_args(
    config: &RewardPoolConfig,
    black_list: Address,
    lock_pool: Address,
) -> Vec<u8> {
    NoMintRewardPool::constructorCall {
        name: config.name.clone(),
        rewardToken: config.reward_token,
        lpToken: config.lp_token,
        duration: U256::from(config.duration),
        rewardDistribution: config.distribution,
        governance: config.governance,
        blackList: black_list,
        withdrawAdmin: config.withdraw_admin,
        withdrawPeriod: U256::from(config.withdraw_period),
        lockPool: lock_pool,
    }
    .abi_encode()
}

/// Prepare calldata for the pool manager's `initialize` method
pub fn pool_manager_initialize_calldata(config: &PoolManagerConfig) -> Vec<u8> {
    initializeCall {
        governance: config.governance,
    }
    .abi_encode()
}

/// Bring up a reward pool: deploy the blacklist, the lock pool and the reward
/// pool, then point the lock pool at the reward pool.
///
/// Each step waits for its transaction to be confirmed before the next is sent.
/// A failure aborts the procedure, leaving already-deployed contracts in place.
pub async fn deploy_reward_pool(
    args: &DeployRewardPoolArgs,
    deployer: &Deployer,
) -> Result<RewardPoolDeployment, ScriptError> {
    // Validate every parameter before sending any transaction
    let config = RewardPoolConfig::try_from(args)?;

    let black_list = deployer
        .deploy(PoolContract::BlackList, &black_list_constructor_args(&config))
        .await?;
    deployer.record(BLACK_LIST_CONTRACT_KEY, black_list)?;

    let lock_pool = deployer.deploy(PoolContract::LockPool, &[]).await?;
    deployer.record(LOCK_POOL_CONTRACT_KEY, lock_pool)?;

    let reward_pool = deployer
        .deploy(
            PoolContract::NoMintRewardPool,
            &reward_pool_constructor_args(&config, black_list, lock_pool),
        )
        .await?;
    deployer.record(NO_MINT_REWARD_POOL_CONTRACT_KEY, reward_pool)?;

    info!("Configuring lock pool at {lock_pool:#x}");
    let lock_pool_contract = LockPool::new(lock_pool, deployer.client().clone());
    send_tx(
        lock_pool_contract.setRewardPool(reward_pool, config.lp_token),
        deployer.confirmations(),
    )
    .await?;
    send_tx(
        lock_pool_contract.setWithdrawPeriod(U256::from(config.withdraw_period)),
        deployer.confirmations(),
    )
    .await?;

    println!("{BANNER}");
    println!("Pool address: {reward_pool:#x}");
    println!("{BANNER}");

    Ok(RewardPoolDeployment {
        black_list,
        lock_pool,
        reward_pool,
    })
}

/// Bring up the pool manager behind an upgradeable proxy, initialized with the
/// given governance
pub async fn deploy_pool_manager(
    args: &DeployPoolManagerArgs,
    deployer: &Deployer,
) -> Result<ProxyDeployment, ScriptError> {
    // Validate every parameter before sending any transaction
    let config = PoolManagerConfig::try_from(args)?;

    let deployment = deployer
        .deploy_proxy(
            PoolContract::PoolManager,
            pool_manager_initialize_calldata(&config).into(),
            config.proxy_owner,
        )
        .await?;

    deployer.record(POOL_MANAGER_CONTRACT_KEY, deployment.implementation)?;
    deployer.record(POOL_MANAGER_PROXY_CONTRACT_KEY, deployment.proxy)?;
    deployer.record(POOL_MANAGER_PROXY_ADMIN_CONTRACT_KEY, deployment.proxy_admin)?;

    println!("{BANNER}");
    println!("PoolManager address: {:#x}", deployment.proxy);
    println!("{BANNER}");

    Ok(deployment)
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{Address, U256};
    use alloy_sol_types::{SolCall, SolValue};

    use super::{
        black_list_constructor_args, pool_manager_initialize_calldata,
        reward_pool_constructor_args,
    };
    use crate::{
        cli::DeployPoolManagerArgs,
        errors::ScriptError,
        solidity::initializeCall,
        test_utils::{reward_pool_args, GOVERNANCE, LP_TOKEN},
        types::{PoolManagerConfig, RewardPoolConfig},
    };


    #[test]
    fn test_reward_pool_config() {
        let config = RewardPoolConfig::try_from(&reward_pool_args()).unwrap();

        assert_eq!(config.lp_token, LP_TOKEN);
        assert_eq!(config.duration, 86_400);
        assert_eq!(config.withdraw_period, 300);
        // The blacklist governance falls back to the pool governance
        assert_eq!(config.blacklist_governance, GOVERNANCE);
    }

    #[test]
    fn test_reward_pool_config_rejects_placeholders() {
        let mut args = reward_pool_args();
        args.withdraw_admin = "0x".to_string();
        assert!(matches!(
            RewardPoolConfig::try_from(&args),
            Err(ScriptError::Configuration(_))
        ));

        let mut args = reward_pool_args();
        args.distribution = format!("{:#x}", Address::ZERO);
        assert!(RewardPoolConfig::try_from(&args).is_err());
        args.allow_zero_address = true;
        assert!(RewardPoolConfig::try_from(&args).is_ok());

        let mut args = reward_pool_args();
        args.withdraw_period = 0;
        assert!(RewardPoolConfig::try_from(&args).is_err());
    }

    #[test]
    fn test_black_list_constructor_args() {
        let config = RewardPoolConfig::try_from(&reward_pool_args()).unwrap();
        let encoded = black_list_constructor_args(&config);

        assert_eq!(encoded, GOVERNANCE.abi_encode());
    }

    #[test]
    fn test_reward_pool_constructor_args() {
        let config = RewardPoolConfig::try_from(&reward_pool_args()).unwrap();
        let black_list = Address::with_last_byte(0xb1);
        let lock_pool = Address::with_last_byte(0x10);
        let encoded = reward_pool_constructor_args(&config, black_list, lock_pool);

        let word = |i: usize| &encoded[i * 32..(i + 1) * 32];
        let address_word = |addr: Address| addr.into_word().0;
        let uint_word = |v: u64| U256::from(v).to_be_bytes::<32>();

        // The name is dynamic, its head is an offset past the ten head words
        assert_eq!(word(0), uint_word(10 * 32));
        assert_eq!(word(2), address_word(LP_TOKEN));
        assert_eq!(word(3), uint_word(86_400));
        assert_eq!(word(5), address_word(GOVERNANCE));
        assert_eq!(word(6), address_word(black_list));
        assert_eq!(word(8), uint_word(300));
        assert_eq!(word(9), address_word(lock_pool));
        // Followed by the length-prefixed name
        assert_eq!(word(10), uint_word(config.name.len() as u64));
        assert_eq!(&word(11)[..config.name.len()], config.name.as_bytes());
    }

    #[test]
    fn test_pool_manager_initialize_calldata() {
        let args = DeployPoolManagerArgs {
            governance: format!("{GOVERNANCE:#x}"),
            proxy_owner: None,
            allow_zero_address: false,
        };
        let config = PoolManagerConfig::try_from(&args).unwrap();
        assert_eq!(config.proxy_owner, None);

        let calldata = pool_manager_initialize_calldata(&config);
        assert_eq!(calldata[..4], initializeCall::SELECTOR);

        let decoded = initializeCall::abi_decode(&calldata).unwrap();
        assert_eq!(decoded.governance, GOVERNANCE);
    }

    #[test]
    fn test_pool_manager_config_rejects_invalid_owner() {
        let args = DeployPoolManagerArgs {
            governance: format!("{GOVERNANCE:#x}"),
            proxy_owner: Some("0xnot-an-address".to_string()),
            allow_zero_address: false,
        };

        assert!(matches!(
            PoolManagerConfig::try_from(&args),
            Err(ScriptError::Configuration(_))
        ));
    }
}
