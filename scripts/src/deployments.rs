//! Reading and writing of the `deployments.json` record, in which the address of
//! every deployed contract is stored per network

use std::{
    fs::{self, File},
    io::Read,
    path::{Path, PathBuf},
    str::FromStr,
};

use alloy::primitives::Address;
use json::JsonValue;

use crate::{constants::DEPLOYMENTS_KEY, errors::ScriptError};

/// Parse the JSON contents of a file
pub fn get_json_from_file(file_path: &Path) -> Result<JsonValue, ScriptError> {
    let mut file_contents = String::new();
    File::open(file_path)
        .map_err(|e| ScriptError::ReadFile(e.to_string()))?
        .read_to_string(&mut file_contents)
        .map_err(|e| ScriptError::ReadFile(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::ReadFile(e.to_string()))
}

/// The deployments record of a single network
#[derive(Debug, Clone)]
pub struct Deployments {
    /// The path of the deployments file
    path: PathBuf,
    /// The network under which addresses are recorded
    network: String,
}

impl Deployments {
    /// Create a handle to the record of `network` in the file at `path`
    pub fn new(path: impl Into<PathBuf>, network: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            network: network.into(),
        }
    }

    /// Record the address of a deployed contract, creating the file if needed
    pub fn write_address(&self, contract_key: &str, address: Address) -> Result<(), ScriptError> {
        // If the file doesn't exist, create it
        if !self.path.exists() {
            fs::write(&self.path, "{}").map_err(|e| ScriptError::WriteFile(e.to_string()))?;
        }
        let mut parsed_json = get_json_from_file(&self.path)?;

        parsed_json[DEPLOYMENTS_KEY][self.network.as_str()][contract_key] =
            JsonValue::String(format!("{address:#x}"));

        fs::write(&self.path, json::stringify_pretty(parsed_json, 4))
            .map_err(|e| ScriptError::WriteFile(e.to_string()))
    }

    /// Read the recorded address of a contract
    pub fn read_address(&self, contract_key: &str) -> Result<Address, ScriptError> {
        let parsed_json = get_json_from_file(&self.path)?;

        let address = parsed_json[DEPLOYMENTS_KEY][self.network.as_str()][contract_key]
            .as_str()
            .ok_or_else(|| {
                ScriptError::ReadFile(format!(
                    "no `{contract_key}` address recorded for network `{}`",
                    self.network
                ))
            })?;

        Address::from_str(address).map_err(|e| ScriptError::ReadFile(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use alloy::primitives::{address, Address};
    use tempfile::tempdir;

    use super::{get_json_from_file, Deployments};
    use crate::errors::ScriptError;

    const LOCK_POOL: Address = address!("5fbdb2315678afecb367f032d93f642f64180aa3");
    const REWARD_POOL: Address = address!("e7f1725e7734ce288f8367e1bb143e90bb3f0512");

    #[test]
    fn test_write_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        let deployments = Deployments::new(&path, "devnet");

        deployments.write_address("lock_pool_contract", LOCK_POOL).unwrap();

        let parsed = get_json_from_file(&path).unwrap();
        assert_eq!(
            parsed["deployments"]["devnet"]["lock_pool_contract"].as_str(),
            Some("0x5fbdb2315678afecb367f032d93f642f64180aa3")
        );
    }

    #[test]
    fn test_write_preserves_other_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deployments.json");
        fs::write(
            &path,
            r#"{ "deployments": { "mainnet": { "lock_pool_contract": "0x0000000000000000000000000000000000000001" } } }"#,
        )
        .unwrap();

        let devnet = Deployments::new(&path, "devnet");
        devnet.write_address("lock_pool_contract", LOCK_POOL).unwrap();
        devnet.write_address("no_mint_reward_pool_contract", REWARD_POOL).unwrap();

        let mainnet = Deployments::new(&path, "mainnet");
        assert_eq!(
            mainnet.read_address("lock_pool_contract").unwrap(),
            Address::with_last_byte(1)
        );
        assert_eq!(devnet.read_address("lock_pool_contract").unwrap(), LOCK_POOL);
        assert_eq!(
            devnet.read_address("no_mint_reward_pool_contract").unwrap(),
            REWARD_POOL
        );
    }

    #[test]
    fn test_rewrite_overwrites_address() {
        let dir = tempdir().unwrap();
        let deployments = Deployments::new(dir.path().join("deployments.json"), "devnet");

        deployments.write_address("lock_pool_contract", LOCK_POOL).unwrap();
        deployments.write_address("lock_pool_contract", REWARD_POOL).unwrap();

        assert_eq!(deployments.read_address("lock_pool_contract").unwrap(), REWARD_POOL);
    }

    #[test]
    fn test_read_missing_key() {
        let dir = tempdir().unwrap();
        let deployments = Deployments::new(dir.path().join("deployments.json"), "devnet");
        deployments.write_address("lock_pool_contract", LOCK_POOL).unwrap();

        assert!(matches!(
            deployments.read_address("pool_manager_contract"),
            Err(ScriptError::ReadFile(_))
        ));
    }
}
