//! NEP-6 style wallet container for KeyVault
//!
//! This crate provides:
//! - Wallets as named collections of accounts with shared scrypt settings
//! - Accounts with NEP-2 encrypted keys or watch-only addresses
//! - Verification contracts with typed parameters
//! - JSON persistence with owner-only file permissions

pub mod account;
pub mod contract;
pub mod error;
pub mod wallet;

pub use account::Account;
pub use contract::{Contract, Parameter, ParameterType};
pub use error::WalletError;
pub use wallet::Wallet;
