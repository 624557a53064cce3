//! Utilities for running integration tests

use alloy::providers::Provider;
use eyre::Result;
use scripts::{
    cli::{DeployPoolManagerArgs, DeployRewardPoolArgs},
    deployer::Deployer,
};

use crate::constants::{
    DISTRIBUTION, EXPECTED_DURATION, EXPECTED_WITHDRAW_PERIOD, GOVERNANCE, LP_TOKEN,
    REWARD_TOKEN, TEST_POOL_NAME, WITHDRAW_ADMIN,
};

/// The reward pool parameters the tests deploy with
pub(crate) fn reward_pool_args() -> DeployRewardPoolArgs {
    DeployRewardPoolArgs {
        name: TEST_POOL_NAME.to_string(),
        reward_token: format!("{REWARD_TOKEN:#x}"),
        lp_token: format!("{LP_TOKEN:#x}"),
        duration: EXPECTED_DURATION,
        distribution: format!("{DISTRIBUTION:#x}"),
        governance: format!("{GOVERNANCE:#x}"),
        blacklist_governance: None,
        withdraw_admin: format!("{WITHDRAW_ADMIN:#x}"),
        withdraw_period: EXPECTED_WITHDRAW_PERIOD,
        allow_zero_address: false,
    }
}

/// The pool manager parameters the tests deploy with
pub(crate) fn pool_manager_args() -> DeployPoolManagerArgs {
    DeployPoolManagerArgs {
        governance: format!("{GOVERNANCE:#x}"),
        proxy_owner: None,
        allow_zero_address: false,
    }
}

/// The number of transactions the deployer has sent
pub(crate) async fn deployer_nonce(deployer: &Deployer) -> Result<u64> {
    let nonce = deployer
        .client()
        .get_transaction_count(deployer.address())
        .await?;
    Ok(nonce)
}
