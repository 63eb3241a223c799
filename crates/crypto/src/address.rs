//! Checksummed account addresses.
//!
//! An address is the Base58Check encoding of a 1-byte version marker
//! followed by the 20-byte hash of the account's single-signature
//! verification script. The codec also computes the 4-byte address hash
//! that the NEP-2 scheme uses as its salt and integrity check.

use thiserror::Error;

use crate::base58check::{base58check_decode, base58check_encode, Base58CheckError};
use crate::hash::{HashSuite, Sha256Suite};

/// Version marker for mainnet addresses (decimal 23).
pub const ADDRESS_VERSION: u8 = 0x17;

/// Length of a decoded address payload: version byte + script hash.
const ADDRESS_PAYLOAD_LENGTH: usize = 21;

/// Errors from address decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Input is not valid Base58Check.
    #[error(transparent)]
    Base58Check(#[from] Base58CheckError),

    /// Decoded payload is not version byte + 20-byte script hash.
    #[error("invalid address length: expected 21 bytes, got {0}")]
    InvalidLength(usize),

    /// Version byte does not match the codec's marker.
    #[error("invalid address version: expected {expected:#04x}, got {actual:#04x}")]
    InvalidVersion { expected: u8, actual: u8 },
}

/// Converts 20-byte script hashes to and from checksummed address strings.
///
/// The version byte and hash suite are explicit configuration rather than
/// ambient constants; [`AddressCodec::mainnet`] is the production codec.
#[derive(Debug, Clone, Copy)]
pub struct AddressCodec<S: HashSuite = Sha256Suite> {
    version: u8,
    suite: S,
}

impl AddressCodec<Sha256Suite> {
    /// Codec for mainnet addresses: version 0x17, double-SHA-256 checksums.
    pub fn mainnet() -> Self {
        Self {
            version: ADDRESS_VERSION,
            suite: Sha256Suite,
        }
    }
}

impl Default for AddressCodec<Sha256Suite> {
    fn default() -> Self {
        Self::mainnet()
    }
}

impl<S: HashSuite> AddressCodec<S> {
    /// Codec with a custom version marker and hash suite.
    pub fn new(version: u8, suite: S) -> Self {
        Self { version, suite }
    }

    /// The codec's hash suite.
    pub fn suite(&self) -> &S {
        &self.suite
    }

    /// Encode a script hash as an address string.
    pub fn encode(&self, script_hash: &[u8; 20]) -> String {
        let mut payload = [0u8; ADDRESS_PAYLOAD_LENGTH];
        payload[0] = self.version;
        payload[1..].copy_from_slice(script_hash);
        base58check_encode(&self.suite, &payload)
    }

    /// Decode an address string back to its script hash.
    pub fn decode(&self, address: &str) -> Result<[u8; 20], AddressError> {
        let payload = base58check_decode(&self.suite, address)?;
        if payload.len() != ADDRESS_PAYLOAD_LENGTH {
            return Err(AddressError::InvalidLength(payload.len()));
        }
        if payload[0] != self.version {
            return Err(AddressError::InvalidVersion {
                expected: self.version,
                actual: payload[0],
            });
        }
        let mut script_hash = [0u8; 20];
        script_hash.copy_from_slice(&payload[1..]);
        Ok(script_hash)
    }

    /// Single-signature verification script for a compressed public key.
    ///
    /// Layout: PUSHBYTES33 ‖ pubkey ‖ CHECKSIG.
    pub fn verification_script(&self, public_key: &[u8; 33]) -> [u8; 35] {
        let mut script = [0u8; 35];
        script[0] = 0x21;
        script[1..34].copy_from_slice(public_key);
        script[34] = 0xac;
        script
    }

    /// Script hash of the account owning `public_key`.
    pub fn script_hash_of(&self, public_key: &[u8; 33]) -> [u8; 20] {
        self.suite.script_hash(&self.verification_script(public_key))
    }

    /// Address of the account owning `public_key`.
    pub fn address_of(&self, public_key: &[u8; 33]) -> String {
        self.encode(&self.script_hash_of(public_key))
    }

    /// First 4 bytes of the double hash of the address's ASCII bytes.
    ///
    /// NEP-2 uses this both as the scrypt salt and as the integrity check
    /// binding a ciphertext to its account.
    pub fn address_hash(&self, address: &str) -> [u8; 4] {
        self.suite.checksum(address.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let codec = AddressCodec::mainnet();
        let script_hash = [0x5Au8; 20];
        let address = codec.encode(&script_hash);
        assert_eq!(codec.decode(&address).unwrap(), script_hash);
    }

    #[test]
    fn test_decode_encode_is_identity() {
        let codec = AddressCodec::mainnet();
        let address = codec.encode(&[7u8; 20]);
        let reencoded = codec.encode(&codec.decode(&address).unwrap());
        assert_eq!(address, reencoded);
    }

    #[test]
    fn test_mainnet_addresses_start_with_a() {
        // Version 0x17 pins the first character of every address.
        let codec = AddressCodec::mainnet();
        for fill in [0x00, 0x7f, 0xff] {
            assert!(codec.encode(&[fill; 20]).starts_with('A'));
        }
    }

    #[test]
    fn test_wrong_version_rejected() {
        let mainnet = AddressCodec::mainnet();
        let other = AddressCodec::new(0x35, Sha256Suite);
        let address = other.encode(&[1u8; 20]);
        assert!(matches!(
            mainnet.decode(&address),
            Err(AddressError::InvalidVersion {
                expected: 0x17,
                actual: 0x35
            })
        ));
    }

    #[test]
    fn test_wrong_length_rejected() {
        let codec = AddressCodec::mainnet();
        let encoded = base58check_encode(codec.suite(), &[0x17; 5]);
        assert!(matches!(
            codec.decode(&encoded),
            Err(AddressError::InvalidLength(5))
        ));
    }

    #[test]
    fn test_tampered_address_fails_checksum() {
        let codec = AddressCodec::mainnet();
        let mut address = codec.encode(&[9u8; 20]).into_bytes();
        let last = address.len() - 1;
        address[last] = if address[last] == b'2' { b'3' } else { b'2' };
        let tampered = String::from_utf8(address).unwrap();
        assert!(matches!(
            codec.decode(&tampered),
            Err(AddressError::Base58Check(Base58CheckError::ChecksumMismatch))
        ));
    }

    #[test]
    fn test_verification_script_layout() {
        let codec = AddressCodec::mainnet();
        let public_key = [0x02u8; 33];
        let script = codec.verification_script(&public_key);
        assert_eq!(script[0], 0x21);
        assert_eq!(&script[1..34], &public_key);
        assert_eq!(script[34], 0xac);
    }
}
