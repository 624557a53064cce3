//! The deployer: deploys named contracts from their artifacts, optionally behind
//! an upgradeable proxy, and records their addresses

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes},
    providers::Provider,
    rpc::types::{TransactionReceipt, TransactionRequest},
};
use alloy_sol_types::SolConstructor;
use tracing::info;

use crate::{
    artifacts::ArtifactStore,
    constants::INITIALIZER_NAME,
    deployments::Deployments,
    errors::ScriptError,
    solidity::TransparentUpgradeableProxy,
    types::{PoolContract, ProxyDeployment},
    utils::{fetch_proxy_admin_contract, LocalWalletHttpClient},
};

/// Deploys contracts on behalf of a single deployer account
#[derive(Clone)]
pub struct Deployer {
    /// The signing client
    client: LocalWalletHttpClient,
    /// The address of the deployer account
    address: Address,
    /// The compilation artifacts of the deployable contracts
    artifacts: ArtifactStore,
    /// The record deployed addresses are written to
    deployments: Deployments,
    /// The number of confirmations to wait for on each transaction
    confirmations: u64,
}

impl Deployer {
    /// Create a deployer
    pub fn new(
        client: LocalWalletHttpClient,
        address: Address,
        artifacts: ArtifactStore,
        deployments: Deployments,
        confirmations: u64,
    ) -> Self {
        Self {
            client,
            address,
            artifacts,
            deployments,
            confirmations,
        }
    }

    /// The signing client, used to instantiate deployed contracts
    pub fn client(&self) -> &LocalWalletHttpClient {
        &self.client
    }

    /// The address of the deployer account
    pub fn address(&self) -> Address {
        self.address
    }

    /// The deployments record
    pub fn deployments(&self) -> &Deployments {
        &self.deployments
    }

    /// The number of confirmations waited for on each transaction
    pub fn confirmations(&self) -> u64 {
        self.confirmations
    }

    /// Deploy a contract with the given ABI-encoded constructor arguments,
    /// returning its address once the creation transaction is confirmed
    pub async fn deploy(
        &self,
        contract: PoolContract,
        constructor_args: &[u8],
    ) -> Result<Address, ScriptError> {
        let artifact = self.artifacts.load(contract)?;
        artifact.check_constructor_arity(contract.constructor_arity())?;

        info!("Deploying {contract}");
        let tx = TransactionRequest::default()
            .with_from(self.address)
            .with_deploy_code(artifact.creation_code(constructor_args));

        let receipt = self
            .client
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(format!("{contract}: {e}")))?
            .with_required_confirmations(self.confirmations)
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractDeployment(format!("{contract}: {e}")))?;

        let address = deployed_address(contract, &receipt)?;
        info!(
            "{contract} deployed at {address:#x} (tx {:#x})",
            receipt.transaction_hash
        );
        Ok(address)
    }

    /// Deploy a contract behind an OpenZeppelin v5 `TransparentUpgradeableProxy`.
    ///
    /// The implementation is deployed without constructor arguments, then the
    /// proxy is deployed pointing at it, forwarding `initializer_calldata` to it.
    /// The proxy's constructor deploys a `ProxyAdmin` owned by `proxy_owner`
    /// (the deployer if `None`).
    pub async fn deploy_proxy(
        &self,
        contract: PoolContract,
        initializer_calldata: Bytes,
        proxy_owner: Option<Address>,
    ) -> Result<ProxyDeployment, ScriptError> {
        // Fail before sending anything if the implementation can't be initialized
        let artifact = self.artifacts.load(contract)?;
        if !artifact.has_function(INITIALIZER_NAME) {
            return Err(ScriptError::ArtifactParsing(format!(
                "{contract} has no `{INITIALIZER_NAME}` function to call through the proxy"
            )));
        }

        let implementation = self.deploy(contract, &[]).await?;

        let proxy_args = TransparentUpgradeableProxy::constructorCall {
            logic: implementation,
            initialOwner: proxy_owner.unwrap_or(self.address),
            data: initializer_calldata,
        }
        .abi_encode();
        let proxy = self
            .deploy(PoolContract::TransparentUpgradeableProxy, &proxy_args)
            .await?;

        let proxy_admin = fetch_proxy_admin_contract(&self.client, proxy).await?;
        info!("Proxy admin contract deployed at {proxy_admin:#x}");

        Ok(ProxyDeployment {
            proxy,
            proxy_admin,
            implementation,
        })
    }

    /// Record the address of a deployed contract in the deployments record
    pub fn record(&self, contract_key: &str, address: Address) -> Result<(), ScriptError> {
        self.deployments.write_address(contract_key, address)
    }
}

/// The address of the contract created by a confirmed creation transaction
fn deployed_address(
    contract: PoolContract,
    receipt: &TransactionReceipt,
) -> Result<Address, ScriptError> {
    if !receipt.status() {
        return Err(ScriptError::ContractDeployment(format!(
            "{contract}: creation transaction {:#x} reverted",
            receipt.transaction_hash
        )));
    }

    receipt.contract_address.ok_or_else(|| {
        ScriptError::ContractDeployment(format!(
            "{contract}: no contract address in receipt of {:#x}",
            receipt.transaction_hash
        ))
    })
}
