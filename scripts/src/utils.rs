//! Utilities for the deploy scripts.

use std::str::FromStr;

use alloy::{
    network::Ethereum,
    primitives::{Address, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionReceipt,
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use alloy_contract::{CallBuilder, CallDecoder};
use tracing::warn;

use crate::{
    constants::{NUM_BYTES_ADDRESS, NUM_BYTES_STORAGE_SLOT, PROXY_ADMIN_STORAGE_SLOT},
    errors::ScriptError,
};

/// The signing client the scripts deploy & configure contracts with
pub type LocalWalletHttpClient = DynProvider<Ethereum>;

/// The call builder type used for post-deployment configuration calls
pub type ScriptCallBuilder<'a, C> = CallBuilder<&'a LocalWalletHttpClient, C, Ethereum>;

/// Sets up the signer and the signing client with which contracts are deployed,
/// from the deployer's private key and the RPC url
pub fn setup_client(
    priv_key: &str,
    rpc_url: &str,
) -> Result<(PrivateKeySigner, LocalWalletHttpClient), ScriptError> {
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let provider = ProviderBuilder::new()
        .wallet(signer.clone())
        .connect_http(url);

    Ok((signer, DynProvider::new(provider)))
}

/// Parse a deployment parameter as an address.
///
/// The zero address is refused unless `allow_zero` is set, in which case
/// a warning is logged instead.
pub fn parse_address(field: &str, value: &str, allow_zero: bool) -> Result<Address, ScriptError> {
    let address = Address::from_str(value.trim()).map_err(|e| {
        ScriptError::Configuration(format!("`{field}` is not a valid address ({value:?}): {e}"))
    })?;

    if address.is_zero() {
        if !allow_zero {
            return Err(ScriptError::Configuration(format!(
                "`{field}` is the zero address, pass `--allow-zero-address` to deploy anyway"
            )));
        }
        warn!("`{field}` is the zero address");
    }

    Ok(address)
}

/// Ensure a period expressed in seconds is non-zero
pub fn validate_period(field: &str, seconds: u64) -> Result<u64, ScriptError> {
    if seconds == 0 {
        return Err(ScriptError::Configuration(format!("`{field}` must be non-zero")));
    }

    Ok(seconds)
}

/// Send a transaction and wait for its receipt, failing if it reverted
pub async fn send_tx<C: CallDecoder>(
    tx: ScriptCallBuilder<'_, C>,
    confirmations: u64,
) -> Result<TransactionReceipt, ScriptError> {
    let receipt = tx
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .with_required_confirmations(confirmations)
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    ensure_success(&receipt)?;
    Ok(receipt)
}

/// Fail if the receipt of a contract call reports a revert
pub fn ensure_success(receipt: &TransactionReceipt) -> Result<(), ScriptError> {
    if !receipt.status() {
        return Err(ScriptError::ContractInteraction(format!(
            "transaction {:#x} reverted",
            receipt.transaction_hash
        )));
    }

    Ok(())
}

/// Extract the address stored in the low-order bytes of a storage slot
pub fn address_from_storage_word(word: U256) -> Address {
    let bytes = word.to_be_bytes::<NUM_BYTES_STORAGE_SLOT>();
    Address::from_slice(&bytes[NUM_BYTES_STORAGE_SLOT - NUM_BYTES_ADDRESS..])
}

/// Read the address of the admin of an EIP-1967 proxy.
///
/// This is the recommended way to get the proxy admin address:
/// https://github.com/OpenZeppelin/openzeppelin-contracts/blob/v5.0.0/contracts/proxy/ERC1967/ERC1967Utils.sol#L104-L106
pub async fn read_proxy_admin(
    client: &LocalWalletHttpClient,
    proxy: Address,
) -> Result<Address, ScriptError> {
    let slot = U256::from_str(PROXY_ADMIN_STORAGE_SLOT)
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    let word = client
        .get_storage_at(proxy, slot)
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    Ok(address_from_storage_word(word))
}

/// Read the admin of an EIP-1967 proxy, ensuring it is a deployed contract.
///
/// An OpenZeppelin v4 proxy stores the admin passed to its constructor as is,
/// so deploying one in place of a v5 proxy leaves an EOA in the admin slot.
pub async fn fetch_proxy_admin_contract(
    client: &LocalWalletHttpClient,
    proxy: Address,
) -> Result<Address, ScriptError> {
    let proxy_admin = read_proxy_admin(client, proxy).await?;
    if proxy_admin.is_zero() {
        return Err(ScriptError::ContractDeployment(format!(
            "proxy at {proxy:#x} has no admin, is the proxy artifact an EIP-1967 proxy?"
        )));
    }

    let code = client
        .get_code_at(proxy_admin)
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    if code.is_empty() {
        return Err(ScriptError::ContractDeployment(format!(
            "admin {proxy_admin:#x} of proxy {proxy:#x} is not a contract, \
             is the proxy artifact an OpenZeppelin v5 TransparentUpgradeableProxy?"
        )));
    }

    Ok(proxy_admin)
}
