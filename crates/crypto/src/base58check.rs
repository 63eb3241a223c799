//! Base58Check encoding with an injected checksum strategy.
//!
//! The trailing 4-byte checksum is owned by this layer; callers above it
//! (the address codec, the NEP-2 scheme, WIF) only deal with verified
//! payloads. Leading zero bytes map to leading `1` characters and back.

use thiserror::Error;

use crate::hash::HashSuite;

/// Checksum length appended to every payload.
const CHECKSUM_LENGTH: usize = 4;

/// Errors from Base58Check decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base58CheckError {
    /// Input contains a character outside the base-58 alphabet.
    #[error("invalid base-58 character")]
    InvalidCharacter,

    /// Decoded data is too short to carry a checksum.
    #[error("input too short for a checksum")]
    TooShort,

    /// Trailing checksum does not match the payload.
    #[error("checksum mismatch")]
    ChecksumMismatch,
}

/// Encode `payload` with a trailing checksum from `suite`.
pub fn base58check_encode<S: HashSuite>(suite: &S, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LENGTH);
    data.extend_from_slice(payload);
    data.extend_from_slice(&suite.checksum(payload));
    bs58::encode(data).into_string()
}

/// Decode `input` and verify its trailing checksum, returning the payload.
pub fn base58check_decode<S: HashSuite>(
    suite: &S,
    input: &str,
) -> Result<Vec<u8>, Base58CheckError> {
    let data = bs58::decode(input)
        .into_vec()
        .map_err(|_| Base58CheckError::InvalidCharacter)?;
    if data.len() < CHECKSUM_LENGTH {
        return Err(Base58CheckError::TooShort);
    }
    let (payload, checksum) = data.split_at(data.len() - CHECKSUM_LENGTH);
    if checksum != suite.checksum(payload).as_slice() {
        return Err(Base58CheckError::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}
