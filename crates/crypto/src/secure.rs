//! Zeroize-on-drop containers for raw key material.
//!
//! # Security Properties
//!
//! - Bytes are zeroed when the container is dropped, on every exit path
//!   including early error returns and panics
//! - Debug output shows `[REDACTED]` instead of the bytes
//! - Clone is intentionally not implemented, so key material is never
//!   duplicated by accident

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A fixed-size secret byte array, zeroed on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretArray<const N: usize> {
    inner: [u8; N],
}

impl<const N: usize> SecretArray<N> {
    /// Wrap `bytes` as secret material.
    ///
    /// The caller still owns its copy and is responsible for zeroing it.
    pub fn new(bytes: [u8; N]) -> Self {
        Self { inner: bytes }
    }

    /// Expose the secret bytes.
    ///
    /// The returned reference must not outlive the immediate use site.
    pub fn expose_secret(&self) -> &[u8; N] {
        &self.inner
    }
}

impl<const N: usize> std::fmt::Debug for SecretArray<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretArray")
            .field("length", &N)
            .field("value", &"[REDACTED]")
            .finish()
    }
}
