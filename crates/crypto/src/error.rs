//! Cryptographic error types

use thiserror::Error;

/// Errors from key-pair construction and generation.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Scalar is zero or not below the curve group order.
    #[error("invalid secret key scalar")]
    InvalidSecretKey,

    /// The system randomness source failed.
    #[error("system random source unavailable: {0}")]
    Rng(#[from] rand::Error),
}
