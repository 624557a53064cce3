//! Definitions of the Solidity constructors and functions called during deployment

use alloy::sol;

sol! {
    contract BlackList {
        constructor(address governance);
    }
}

sol! {
    #[sol(rpc)]
    contract LockPool {
        function setRewardPool(address rewardPool, address lpToken) external;
        function setWithdrawPeriod(uint256 withdrawPeriod) external;
    }
}

sol! {
    contract NoMintRewardPool {
        constructor(
            string name,
            address rewardToken,
            address lpToken,
            uint256 duration,
            address rewardDistribution,
            address governance,
            address blackList,
            address withdrawAdmin,
            uint256 withdrawPeriod,
            address lockPool
        );
    }
}

sol! {
    function initialize(address governance) external;
}

sol! {
    contract TransparentUpgradeableProxy {
        constructor(address logic, address initialOwner, bytes data);
    }
}
