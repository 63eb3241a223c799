//! NEP-2 passphrase-based private-key encryption.
//!
//! A 32-byte private key is bound to its account and a passphrase:
//!
//! 1. derive the account address from the key and take the first 4 bytes
//!    of the address's double hash (the address hash)
//! 2. stretch the passphrase with scrypt, salted by the address hash,
//!    into a 64-byte key split as halfA ‖ halfB
//! 3. XOR the private key with halfA and encrypt the result with AES-256
//!    under halfB
//! 4. emit Base58Check(0x01 0x42 0xE0 ‖ addressHash ‖ ciphertext)
//!
//! Decryption reverses the steps and re-derives the address; a mismatch
//! against the embedded address hash is reported as a single
//! indistinguishable failure.

mod cipher;
mod error;
mod kdf;

pub use error::Nep2Error;
pub use kdf::{DerivedKey, ScryptParams};

use zeroize::Zeroizing;

use crate::address::AddressCodec;
use crate::base58check::{base58check_decode, base58check_encode};
use crate::hash::{HashSuite, Sha256Suite};
use crate::keys::{Curve, KeyPair, NistP256, PRIVATE_KEY_LENGTH};

/// Marker bytes opening every NEP-2 payload.
pub const NEP2_PREFIX: [u8; 3] = [0x01, 0x42, 0xE0];

/// Length of a decoded NEP-2 payload: prefix + address hash + ciphertext.
pub const NEP2_PAYLOAD_LENGTH: usize = 39;

/// The NEP-2 scheme over an explicit curve and hash suite.
///
/// Production use goes through [`Nep2Scheme::default`] (secp256r1 and
/// double-SHA-256) or the [`encrypt_key`]/[`decrypt_key`] free functions.
#[derive(Debug, Clone)]
pub struct Nep2Scheme<C: Curve = NistP256, S: HashSuite = Sha256Suite> {
    curve: C,
    codec: AddressCodec<S>,
}

impl Default for Nep2Scheme<NistP256, Sha256Suite> {
    fn default() -> Self {
        Self {
            curve: NistP256,
            codec: AddressCodec::mainnet(),
        }
    }
}

impl<C: Curve, S: HashSuite> Nep2Scheme<C, S> {
    /// Scheme with a custom curve and address codec.
    pub fn new(curve: C, codec: AddressCodec<S>) -> Self {
        Self { curve, codec }
    }

    /// Encrypt a key pair's private key under `passphrase`.
    pub fn encrypt(
        &self,
        passphrase: &str,
        key_pair: &KeyPair,
        params: &ScryptParams,
    ) -> Result<String, Nep2Error> {
        if passphrase.is_empty() {
            return Err(Nep2Error::EmptyPassphrase);
        }

        let address = self.codec.address_of(key_pair.public_key());
        let address_hash = self.codec.address_hash(&address);
        let derived = params.derive(passphrase, &address_hash)?;

        let mut block = Zeroizing::new(*key_pair.private_key_bytes());
        for (byte, mask) in block.iter_mut().zip(derived.half_a()) {
            *byte ^= mask;
        }
        cipher::encrypt_block(&mut block, derived.half_b());

        let mut payload = [0u8; NEP2_PAYLOAD_LENGTH];
        payload[..3].copy_from_slice(&NEP2_PREFIX);
        payload[3..7].copy_from_slice(&address_hash);
        payload[7..].copy_from_slice(block.as_ref());
        Ok(base58check_encode(self.codec.suite(), &payload))
    }

    /// Decrypt an encrypted key string back to its key pair.
    ///
    /// Length and prefix are checked before the expensive key derivation
    /// runs, so malformed input fails fast.
    pub fn decrypt(
        &self,
        encrypted: &str,
        passphrase: &str,
        params: &ScryptParams,
    ) -> Result<KeyPair, Nep2Error> {
        if passphrase.is_empty() {
            return Err(Nep2Error::EmptyPassphrase);
        }

        let payload = Zeroizing::new(base58check_decode(self.codec.suite(), encrypted)?);
        if payload.len() != NEP2_PAYLOAD_LENGTH {
            return Err(Nep2Error::InvalidLength(payload.len()));
        }
        if payload[..3] != NEP2_PREFIX {
            return Err(Nep2Error::InvalidPrefix);
        }
        let mut address_hash = [0u8; 4];
        address_hash.copy_from_slice(&payload[3..7]);

        let derived = params.derive(passphrase, &address_hash)?;

        let mut block = Zeroizing::new([0u8; PRIVATE_KEY_LENGTH]);
        block.copy_from_slice(&payload[7..]);
        cipher::decrypt_block(&mut block, derived.half_b());
        for (byte, mask) in block.iter_mut().zip(derived.half_a()) {
            *byte ^= mask;
        }

        // A wrong passphrase can decrypt to an out-of-range scalar; fold
        // that into the same failure as an address-hash mismatch.
        let key_pair = KeyPair::from_private_key_on(&self.curve, &block)
            .map_err(|_| Nep2Error::VerificationFailed)?;

        let address = self.codec.address_of(key_pair.public_key());
        if self.codec.address_hash(&address) != address_hash {
            return Err(Nep2Error::VerificationFailed);
        }
        Ok(key_pair)
    }
}

/// Encrypt with the production scheme: secp256r1, double-SHA-256, mainnet
/// addresses.
pub fn encrypt_key(
    passphrase: &str,
    key_pair: &KeyPair,
    params: &ScryptParams,
) -> Result<String, Nep2Error> {
    Nep2Scheme::default().encrypt(passphrase, key_pair, params)
}

/// Decrypt with the production scheme.
pub fn decrypt_key(
    encrypted: &str,
    passphrase: &str,
    params: &ScryptParams,
) -> Result<KeyPair, Nep2Error> {
    Nep2Scheme::default().decrypt(encrypted, passphrase, params)
}
