//! Scripts for deploying and configuring the FilDA reward pool & pool manager contracts.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod artifacts;
pub mod cli;
pub mod commands;
pub mod constants;
pub mod deployer;
pub mod deployments;
pub mod errors;
mod solidity;
#[cfg(test)]
mod test_utils;
pub mod types;
pub mod utils;
