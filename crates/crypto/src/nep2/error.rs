use thiserror::Error;

use crate::base58check::Base58CheckError;

/// Errors from NEP-2 encryption and decryption.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Nep2Error {
    /// Passphrase is empty.
    #[error("passphrase must not be empty")]
    EmptyPassphrase,

    /// Key-derivation parameters are out of range.
    #[error("invalid scrypt parameters: {0}")]
    InvalidScryptParams(String),

    /// Input is not valid Base58Check.
    #[error(transparent)]
    Base58Check(#[from] Base58CheckError),

    /// Decoded payload is not 39 bytes.
    #[error("invalid payload length: expected 39 bytes, got {0}")]
    InvalidLength(usize),

    /// Payload does not start with the 0x01 0x42 0xE0 marker.
    #[error("invalid payload prefix")]
    InvalidPrefix,

    /// Recovered key does not match the embedded address hash.
    ///
    /// Deliberately indistinguishable: a wrong passphrase, a flipped
    /// ciphertext bit and an out-of-range decrypted scalar all land here.
    #[error("wrong passphrase or corrupted data")]
    VerificationFailed,
}
