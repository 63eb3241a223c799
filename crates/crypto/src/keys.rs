//! secp256r1 key pairs for account ownership.
//!
//! The curve is injected through the [`Curve`] strategy rather than fixed
//! as an ambient constant; [`NistP256`] is the production choice. Uses the
//! p256 crate for curve arithmetic.

use p256::elliptic_curve::sec1::ToEncodedPoint;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::CryptoError;
use crate::secure::SecretArray;

/// Length of a raw private key scalar in bytes.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Length of a compressed public point in bytes (parity prefix + x).
pub const PUBLIC_KEY_LENGTH: usize = 33;

/// Elliptic-curve strategy deriving a compressed public point from a
/// private scalar by generator multiplication.
pub trait Curve {
    /// Compute the public point for `scalar`.
    ///
    /// Rejects scalars outside the curve's valid range (zero or not below
    /// the group order).
    fn derive_public_key(
        &self,
        scalar: &[u8; PRIVATE_KEY_LENGTH],
    ) -> Result<[u8; PUBLIC_KEY_LENGTH], CryptoError>;
}

/// The secp256r1 (NIST P-256) curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NistP256;

impl Curve for NistP256 {
    fn derive_public_key(
        &self,
        scalar: &[u8; PRIVATE_KEY_LENGTH],
    ) -> Result<[u8; PUBLIC_KEY_LENGTH], CryptoError> {
        let secret =
            p256::SecretKey::from_slice(scalar).map_err(|_| CryptoError::InvalidSecretKey)?;
        let point = secret.public_key().to_encoded_point(true);
        let mut compressed = [0u8; PUBLIC_KEY_LENGTH];
        compressed.copy_from_slice(point.as_bytes());
        Ok(compressed)
    }
}

/// A private scalar together with its derived public point.
///
/// The scalar lives in a zeroize-on-drop container; Clone is not
/// implemented.
pub struct KeyPair {
    private_key: SecretArray<PRIVATE_KEY_LENGTH>,
    public_key: [u8; PUBLIC_KEY_LENGTH],
}

impl KeyPair {
    /// Generate a fresh key pair on secp256r1.
    ///
    /// Fails only if the randomness source is unavailable; that failure is
    /// fatal and is not retried.
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self, CryptoError> {
        let mut scalar = [0u8; PRIVATE_KEY_LENGTH];
        // Rejection-sample the curve's scalar range. A redraw happens with
        // probability ~2^-32; more than a handful would mean a broken RNG.
        loop {
            rng.try_fill_bytes(&mut scalar)?;
            match Self::from_private_key(&scalar) {
                Ok(pair) => {
                    scalar.zeroize();
                    return Ok(pair);
                }
                Err(CryptoError::InvalidSecretKey) => continue,
                Err(e) => {
                    scalar.zeroize();
                    return Err(e);
                }
            }
        }
    }

    /// Deterministically build a key pair from a raw scalar on secp256r1.
    pub fn from_private_key(bytes: &[u8; PRIVATE_KEY_LENGTH]) -> Result<Self, CryptoError> {
        Self::from_private_key_on(&NistP256, bytes)
    }

    /// Deterministically build a key pair from a raw scalar on `curve`.
    pub fn from_private_key_on<C: Curve>(
        curve: &C,
        bytes: &[u8; PRIVATE_KEY_LENGTH],
    ) -> Result<Self, CryptoError> {
        let public_key = curve.derive_public_key(bytes)?;
        Ok(Self {
            private_key: SecretArray::new(*bytes),
            public_key,
        })
    }

    /// The compressed public point.
    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.public_key
    }

    /// The raw private scalar.
    ///
    /// # Security
    ///
    /// Copies made from this reference are the caller's responsibility to
    /// zero after use.
    pub fn private_key_bytes(&self) -> &[u8; PRIVATE_KEY_LENGTH] {
        self.private_key.expose_secret()
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &hex::encode(&self.public_key[..8]))
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}
