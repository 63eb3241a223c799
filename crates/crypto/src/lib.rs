//! Cryptographic core for KeyVault
//!
//! This crate provides:
//! - NEP-2 passphrase-based private-key encryption (scrypt + AES-256)
//! - Base58Check encoding and checksummed account addresses
//! - secp256r1 key pairs with zeroize-on-drop secret storage
//! - WIF import/export for raw private keys

pub mod address;
pub mod base58check;
pub mod error;
pub mod hash;
pub mod keys;
pub mod nep2;
pub mod secure;
pub mod wif;

// Address exports
pub use address::{AddressCodec, AddressError, ADDRESS_VERSION};

// Base58Check exports
pub use base58check::{base58check_decode, base58check_encode, Base58CheckError};

// Hash exports
pub use hash::{hash160, sha256d, HashSuite, Sha256Suite};

// Key exports
pub use keys::{Curve, KeyPair, NistP256, PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH};

// NEP-2 exports
pub use nep2::{
    decrypt_key, encrypt_key, Nep2Error, Nep2Scheme, ScryptParams, NEP2_PAYLOAD_LENGTH,
    NEP2_PREFIX,
};

// Error exports
pub use error::CryptoError;

// Secure memory exports
pub use secure::SecretArray;

// WIF exports
pub use wif::{decode_wif, encode_wif, WifError};
