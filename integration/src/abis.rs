//! Bindings for the view methods the integration tests check deployments with

use alloy::sol;

sol! {
    #[sol(rpc)]
    contract LockPool {
        function rewardPool() external view returns (address);
        function withdrawPeriod() external view returns (uint256);
    }
}

sol! {
    #[sol(rpc)]
    contract NoMintRewardPool {
        function duration() external view returns (uint256);
        function withdrawPeriod() external view returns (uint256);
    }
}

sol! {
    #[sol(rpc)]
    contract PoolManager {
        function governance() external view returns (address);
    }
}
