//! Loading of the compilation artifacts of the deployed contracts.
//!
//! Both the truffle/hardhat layout (`"bytecode": "0x..."`) and the foundry layout
//! (`"bytecode": { "object": "0x..." }`) are accepted.

use std::{fs, path::PathBuf, str::FromStr};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::Deserialize;

use crate::{
    constants::{ARTIFACT_EXTENSION, SOLIDITY_EXTENSION},
    errors::ScriptError,
    types::PoolContract,
};

/// A compilation artifact as found on disk
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    /// The contract name, absent from foundry artifacts
    contract_name: Option<String>,
    /// The contract ABI
    abi: JsonAbi,
    /// The creation bytecode
    bytecode: RawBytecode,
}

/// The creation bytecode in either of the supported layouts
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    /// Truffle & hardhat store the hex string directly
    Hex(String),
    /// Foundry nests it in an object alongside source maps & link references
    Object {
        /// The hex-encoded bytecode
        object: String,
    },
}

impl RawBytecode {
    /// The hex-encoded bytecode
    fn hex(&self) -> &str {
        match self {
            RawBytecode::Hex(hex) => hex,
            RawBytecode::Object { object } => object,
        }
    }
}

/// A parsed compilation artifact
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    /// The name of the contract
    pub contract_name: String,
    /// The ABI of the contract
    pub abi: JsonAbi,
    /// The creation bytecode of the contract, without constructor arguments
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Parse an artifact from its JSON representation, using `default_name`
    /// when the artifact does not carry a contract name
    pub fn from_json(json: &str, default_name: &str) -> Result<Self, ScriptError> {
        let raw: RawArtifact =
            serde_json::from_str(json).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;
        let contract_name = raw.contract_name.unwrap_or_else(|| default_name.to_string());

        let bytecode = Bytes::from_str(raw.bytecode.hex()).map_err(|e| {
            ScriptError::ArtifactParsing(format!(
                "invalid bytecode for {contract_name} (unlinked library?): {e}"
            ))
        })?;
        if bytecode.is_empty() {
            return Err(ScriptError::ArtifactParsing(format!(
                "{contract_name} has no creation bytecode, is it abstract or an interface?"
            )));
        }

        Ok(Self {
            contract_name,
            abi: raw.abi,
            bytecode,
        })
    }

    /// The number of inputs the contract's constructor takes
    pub fn constructor_inputs(&self) -> usize {
        self.abi
            .constructor()
            .map(|constructor| constructor.inputs.len())
            .unwrap_or_default()
    }

    /// Ensure the constructor takes exactly `expected` inputs
    pub fn check_constructor_arity(&self, expected: usize) -> Result<(), ScriptError> {
        let found = self.constructor_inputs();
        if found != expected {
            return Err(ScriptError::ArtifactParsing(format!(
                "{} constructor takes {found} arguments, but {expected} are supplied",
                self.contract_name
            )));
        }

        Ok(())
    }

    /// Whether the ABI exposes a function of the given name
    pub fn has_function(&self, name: &str) -> bool {
        self.abi.function(name).is_some_and(|overloads| !overloads.is_empty())
    }

    /// The code sent in a creation transaction: the bytecode followed by the
    /// ABI-encoded constructor arguments
    pub fn creation_code(&self, constructor_args: &[u8]) -> Bytes {
        [&self.bytecode[..], constructor_args].concat().into()
    }
}

/// A directory of compilation artifacts
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    /// The directory artifacts are looked up in
    dir: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve the artifact file of a contract, trying `<dir>/<Name>.json`
    /// then `<dir>/<Name>.sol/<Name>.json`
    pub fn artifact_path(&self, contract: PoolContract) -> Result<PathBuf, ScriptError> {
        let name = contract.artifact_name();
        let file_name = format!("{name}.{ARTIFACT_EXTENSION}");
        let candidates = [
            self.dir.join(&file_name),
            self.dir
                .join(format!("{name}.{SOLIDITY_EXTENSION}"))
                .join(&file_name),
        ];

        candidates
            .into_iter()
            .find(|path| path.is_file())
            .ok_or_else(|| {
                ScriptError::ReadFile(format!(
                    "no artifact for {name} in {}",
                    self.dir.display()
                ))
            })
    }

    /// Load and parse the artifact of a contract
    pub fn load(&self, contract: PoolContract) -> Result<ContractArtifact, ScriptError> {
        let path = self.artifact_path(contract)?;
        let json = fs::read_to_string(&path)
            .map_err(|e| ScriptError::ReadFile(format!("{}: {e}", path.display())))?;

        ContractArtifact::from_json(&json, contract.artifact_name())
    }
}
