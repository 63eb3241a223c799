//! Wallet accounts.
//!
//! An account holds an address, an optional NEP-2 encrypted key and the
//! verification contract. Watch-only accounts carry no key at all; raw
//! private keys never appear in the serialized form.

use serde::{Deserialize, Serialize};
use tracing::debug;

use keyvault_crypto::{decode_wif, encrypt_key, AddressCodec, KeyPair, ScryptParams};

use crate::contract::Contract;
use crate::error::WalletError;

/// A single wallet entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "isDefault")]
    pub is_default: bool,
    pub lock: bool,
    /// NEP-2 encrypted private key; absent for watch-only accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<Contract>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,
}

impl Account {
    /// Create an account from a key pair, encrypting the private key
    /// under `passphrase`.
    pub fn from_key_pair(
        key_pair: &KeyPair,
        passphrase: &str,
        params: &ScryptParams,
        label: Option<String>,
    ) -> Result<Self, WalletError> {
        let codec = AddressCodec::mainnet();
        let address = codec.address_of(key_pair.public_key());
        let encrypted = encrypt_key(passphrase, key_pair, params)?;
        let script = codec.verification_script(key_pair.public_key());
        let contract = Contract::single_signature(&script)?;
        debug!(address = %address, "created account");
        Ok(Self {
            address,
            label,
            is_default: false,
            lock: false,
            key: Some(encrypted),
            contract: Some(contract),
            extra: None,
        })
    }

    /// Create an account with a freshly generated key pair.
    pub fn create(
        rng: &mut (impl rand::CryptoRng + rand::RngCore),
        passphrase: &str,
        params: &ScryptParams,
        label: Option<String>,
    ) -> Result<Self, WalletError> {
        let key_pair = KeyPair::generate(rng)?;
        Self::from_key_pair(&key_pair, passphrase, params, label)
    }

    /// Import an account from a WIF-encoded private key.
    pub fn from_wif(
        wif: &str,
        passphrase: &str,
        params: &ScryptParams,
        label: Option<String>,
    ) -> Result<Self, WalletError> {
        let key = decode_wif(wif)?;
        let key_pair = KeyPair::from_private_key(&key)?;
        Self::from_key_pair(&key_pair, passphrase, params, label)
    }

    /// Create a watch-only account for an existing address.
    ///
    /// The address is decoded to confirm its version byte and checksum.
    pub fn watch_only(address: &str, label: Option<String>) -> Result<Self, WalletError> {
        AddressCodec::mainnet().decode(address)?;
        Ok(Self {
            address: address.to_string(),
            label,
            is_default: false,
            lock: false,
            key: None,
            contract: None,
            extra: None,
        })
    }

    /// Whether the account has no key material.
    pub fn is_watch_only(&self) -> bool {
        self.key.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_params() -> ScryptParams {
        ScryptParams::new(2, 1, 1).unwrap()
    }

    #[test]
    fn test_from_key_pair_sets_address_and_contract() {
        let pair = KeyPair::from_private_key(&[0x11u8; 32]).unwrap();
        let account =
            Account::from_key_pair(&pair, "passphrase", &fast_params(), None).unwrap();
        let codec = AddressCodec::mainnet();
        assert_eq!(account.address, codec.address_of(pair.public_key()));
        assert!(account.key.is_some());
        let contract = account.contract.unwrap();
        assert_eq!(
            contract.script,
            hex::encode(codec.verification_script(pair.public_key()))
        );
    }

    #[test]
    fn test_create_is_not_watch_only() {
        let account = Account::create(
            &mut rand::thread_rng(),
            "passphrase",
            &fast_params(),
            Some("main".into()),
        )
        .unwrap();
        assert!(!account.is_watch_only());
        assert_eq!(account.label.as_deref(), Some("main"));
    }

    #[test]
    fn test_from_wif_matches_direct_import() {
        let key = [0x11u8; 32];
        let wif = keyvault_crypto::encode_wif(&key);
        let account = Account::from_wif(&wif, "passphrase", &fast_params(), None).unwrap();
        let pair = KeyPair::from_private_key(&key).unwrap();
        assert_eq!(
            account.address,
            AddressCodec::mainnet().address_of(pair.public_key())
        );
        assert!(Account::from_wif("bad wif", "passphrase", &fast_params(), None).is_err());
    }

    #[test]
    fn test_watch_only_validates_address() {
        let codec = AddressCodec::mainnet();
        let address = codec.encode(&[7u8; 20]);
        let account = Account::watch_only(&address, None).unwrap();
        assert!(account.is_watch_only());
        assert!(Account::watch_only("not-an-address", None).is_err());
    }

    #[test]
    fn test_serialized_form_has_no_raw_key() {
        let pair = KeyPair::from_private_key(&[0x11u8; 32]).unwrap();
        let account =
            Account::from_key_pair(&pair, "passphrase", &fast_params(), None).unwrap();
        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains(&hex::encode(pair.private_key_bytes())));
        assert!(json.contains("6P")); // NEP-2 strings start with 6P
    }
}
