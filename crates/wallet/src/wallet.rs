//! The wallet container.
//!
//! A wallet is a named collection of accounts plus the scrypt parameters
//! used to encrypt their keys, serialized as JSON. Files are written with
//! owner-only permissions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use keyvault_crypto::{decrypt_key, KeyPair, ScryptParams};

use crate::account::Account;
use crate::error::WalletError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    pub name: String,
    pub scrypt: ScryptParams,
    pub accounts: Vec<Account>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,
}

impl Wallet {
    /// An empty wallet with the given name and encryption parameters.
    pub fn new(name: impl Into<String>, scrypt: ScryptParams) -> Self {
        Self {
            name: name.into(),
            scrypt,
            accounts: Vec::new(),
            extra: None,
        }
    }

    /// Generate a fresh account and add it.
    pub fn add_new_account(
        &mut self,
        rng: &mut (impl rand::CryptoRng + rand::RngCore),
        passphrase: &str,
        label: Option<String>,
    ) -> Result<&Account, WalletError> {
        let account = Account::create(rng, passphrase, &self.scrypt, label)?;
        self.add_account(account)
    }

    /// Add an existing account, rejecting duplicate addresses.
    pub fn add_account(&mut self, account: Account) -> Result<&Account, WalletError> {
        if self.accounts.iter().any(|a| a.address == account.address) {
            return Err(WalletError::DuplicateAddress(account.address));
        }
        info!(address = %account.address, wallet = %self.name, "added account");
        self.accounts.push(account);
        Ok(self.accounts.last().expect("just pushed"))
    }

    /// Find an account by its label.
    pub fn account_by_label(&self, label: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.label.as_deref() == Some(label))
    }

    /// Remove the account with the given label.
    pub fn remove_account(&mut self, label: &str) -> Result<Account, WalletError> {
        let index = self
            .accounts
            .iter()
            .position(|a| a.label.as_deref() == Some(label))
            .ok_or_else(|| WalletError::AccountNotFound(label.to_string()))?;
        let removed = self.accounts.remove(index);
        info!(address = %removed.address, wallet = %self.name, "removed account");
        Ok(removed)
    }

    /// Decrypt the key pair of the account at `address`.
    pub fn decrypt_account(
        &self,
        address: &str,
        passphrase: &str,
    ) -> Result<KeyPair, WalletError> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.address == address)
            .ok_or_else(|| WalletError::AccountNotFound(address.to_string()))?;
        let encrypted = account
            .key
            .as_deref()
            .ok_or_else(|| WalletError::WatchOnlyAccount(address.to_string()))?;
        Ok(decrypt_key(encrypted, passphrase, &self.scrypt)?)
    }

    /// Save the wallet as JSON with restricted permissions (0600).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), WalletError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, &json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(path, permissions)?;
        }

        Ok(())
    }

    /// Load a wallet from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WalletError> {
        let contents = fs::read_to_string(path)?;
        let wallet: Self = serde_json::from_str(&contents)?;
        Ok(wallet)
    }
}
