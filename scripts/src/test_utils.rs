//! Helpers shared by the unit tests

use std::{fs, path::Path};

use alloy::{
    primitives::{address, Address, B256},
    providers::{DynProvider, ProviderBuilder},
    rpc::types::TransactionReceipt,
    transports::mock::Asserter,
};
use serde_json::json;

use crate::{cli::DeployRewardPoolArgs, types::PoolContract, utils::LocalWalletHttpClient};

/// The governance the reward pools are deployed with
pub(crate) const GOVERNANCE: Address = address!("70997970c51812dc3a010c7d01b50e0d17dc79c8");
/// The liquidity token the reward pools are deployed with
pub(crate) const LP_TOKEN: Address = address!("3c44cdddb6a900fa2b585dd299e03d12fa4293bc");

/// Valid reward pool arguments
pub(crate) fn reward_pool_args() -> DeployRewardPoolArgs {
    DeployRewardPoolArgs {
        name: "FilDA HFIL-FIL LP".to_string(),
        reward_token: "0x90f79bf6eb2c4f870365e785982e1f101e93b906".to_string(),
        lp_token: format!("{LP_TOKEN:#x}"),
        duration: 86_400,
        distribution: "0x15d34aaf54267db7d7c367839aaf71a00a2c6a65".to_string(),
        governance: format!("{GOVERNANCE:#x}"),
        blacklist_governance: None,
        withdraw_admin: "0x9965507d1a55bcc2695c58ba16fb37d819b0a4dc".to_string(),
        withdraw_period: 300,
        allow_zero_address: false,
    }
}

/// A client whose RPC responses are served from the returned asserter's queue.
///
/// Any request made while the queue is empty fails.
pub(crate) fn mocked_client() -> (Asserter, LocalWalletHttpClient) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone());
    (asserter, DynProvider::new(provider))
}

/// A receipt as returned by `eth_getTransactionReceipt`
pub(crate) fn receipt(success: bool, contract_address: Option<Address>) -> TransactionReceipt {
    let receipt = json!({
        "type": "0x2",
        "status": if success { "0x1" } else { "0x0" },
        "cumulativeGasUsed": "0x5208",
        "logs": [],
        "logsBloom": format!("0x{}", "00".repeat(256)),
        "transactionHash": format!("{:#x}", B256::repeat_byte(0x11)),
        "transactionIndex": "0x0",
        "blockHash": format!("{:#x}", B256::repeat_byte(0x22)),
        "blockNumber": "0x1",
        "gasUsed": "0x5208",
        "effectiveGasPrice": "0x3b9aca00",
        "from": format!("{:#x}", Address::repeat_byte(0x33)),
        "to": null,
        "contractAddress": contract_address.map(|addr| format!("{addr:#x}")),
    });

    serde_json::from_value(receipt).unwrap()
}

/// Write a truffle artifact for `contract` whose constructor takes `num_inputs` addresses
pub(crate) fn write_artifact(dir: &Path, contract: PoolContract, num_inputs: usize) {
    let inputs = (0..num_inputs)
        .map(|i| json!({ "name": format!("arg{i}"), "type": "address" }))
        .collect::<Vec<_>>();
    let artifact = json!({
        "contractName": contract.artifact_name(),
        "abi": [{ "type": "constructor", "inputs": inputs, "stateMutability": "nonpayable" }],
        "bytecode": "0x6080604052",
    });

    fs::write(
        dir.join(format!("{}.json", contract.artifact_name())),
        artifact.to_string(),
    )
    .unwrap();
}
