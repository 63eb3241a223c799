//! Hashing strategies for address material.
//!
//! The address codec and the NEP-2 scheme never call a hash function
//! directly; they go through a [`HashSuite`] so alternate hash choices can
//! be substituted in tests without touching the core logic.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Hash strategy used for checksums and script hashing.
pub trait HashSuite {
    /// First 4 bytes of the double hash of `data`.
    ///
    /// Used as the Base58Check trailing checksum and, applied to an
    /// address's ASCII bytes, as the NEP-2 salt.
    fn checksum(&self, data: &[u8]) -> [u8; 4];

    /// 20-byte account identifier of a verification script.
    fn script_hash(&self, script: &[u8]) -> [u8; 20];
}

/// Double SHA-256 checksums with SHA-256 + RIPEMD-160 script hashing.
///
/// The combination every deployed wallet expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Suite;

impl HashSuite for Sha256Suite {
    fn checksum(&self, data: &[u8]) -> [u8; 4] {
        let digest = sha256d(data);
        let mut out = [0u8; 4];
        out.copy_from_slice(&digest[..4]);
        out
    }

    fn script_hash(&self, script: &[u8]) -> [u8; 20] {
        hash160(script)
    }
}

/// SHA-256 applied twice.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// RIPEMD-160 of SHA-256.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let first = Sha256::digest(data);
    Ripemd160::digest(first).into()
}
