//! Wallet Import Format for raw private keys.
//!
//! A WIF string is the Base58Check encoding of `0x80 ‖ key ‖ 0x01`; the
//! trailing byte marks a compressed public point. Import clears the
//! decoded buffer before returning.

use thiserror::Error;
use zeroize::Zeroizing;

use crate::base58check::{base58check_decode, base58check_encode, Base58CheckError};
use crate::hash::Sha256Suite;
use crate::keys::PRIVATE_KEY_LENGTH;

const WIF_VERSION: u8 = 0x80;
const WIF_COMPRESSED_FLAG: u8 = 0x01;
const WIF_PAYLOAD_LENGTH: usize = 34;

/// Errors from WIF decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WifError {
    /// Input is not valid Base58Check.
    #[error(transparent)]
    Base58Check(#[from] Base58CheckError),

    /// Payload is not `0x80 ‖ key32 ‖ 0x01`.
    #[error("invalid WIF payload")]
    InvalidPayload,
}

/// Encode a raw private key as a WIF string.
pub fn encode_wif(private_key: &[u8; PRIVATE_KEY_LENGTH]) -> String {
    let mut payload = Zeroizing::new([0u8; WIF_PAYLOAD_LENGTH]);
    payload[0] = WIF_VERSION;
    payload[1..33].copy_from_slice(private_key);
    payload[33] = WIF_COMPRESSED_FLAG;
    base58check_encode(&Sha256Suite, payload.as_ref())
}

/// Decode a WIF string back to the raw private key.
pub fn decode_wif(wif: &str) -> Result<Zeroizing<[u8; PRIVATE_KEY_LENGTH]>, WifError> {
    let payload = Zeroizing::new(base58check_decode(&Sha256Suite, wif)?);
    if payload.len() != WIF_PAYLOAD_LENGTH
        || payload[0] != WIF_VERSION
        || payload[33] != WIF_COMPRESSED_FLAG
    {
        return Err(WifError::InvalidPayload);
    }
    let mut key = Zeroizing::new([0u8; PRIVATE_KEY_LENGTH]);
    key.copy_from_slice(&payload[1..33]);
    Ok(key)
}
