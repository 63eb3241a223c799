//! Passphrase stretching via scrypt.
//!
//! The stretcher turns a passphrase and the 4-byte address hash into 64
//! bytes of derived material, split as halfA (XOR mask) and halfB (cipher
//! key). Both halves live in a zeroize-on-drop buffer.

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::error::Nep2Error;

/// Length of the derived key material in bytes.
const DERIVED_KEY_LENGTH: usize = 64;

/// Cost parameters for the scrypt stretcher.
///
/// Construction validates the ranges, so a held value is always usable;
/// deserialization goes through the same validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawScryptParams")]
pub struct ScryptParams {
    n: u32,
    r: u32,
    p: u32,
}

/// Unvalidated wire form of [`ScryptParams`].
#[derive(Deserialize)]
struct RawScryptParams {
    n: u32,
    r: u32,
    p: u32,
}

impl TryFrom<RawScryptParams> for ScryptParams {
    type Error = Nep2Error;

    fn try_from(raw: RawScryptParams) -> Result<Self, Self::Error> {
        Self::new(raw.n, raw.r, raw.p)
    }
}

impl ScryptParams {
    /// The production parameters: n = 16384, r = 8, p = 8.
    pub const DEFAULT: Self = Self {
        n: 16384,
        r: 8,
        p: 8,
    };

    /// Build parameters, validating the ranges scrypt requires.
    pub fn new(n: u32, r: u32, p: u32) -> Result<Self, Nep2Error> {
        if n < 2 || !n.is_power_of_two() {
            return Err(Nep2Error::InvalidScryptParams(format!(
                "n must be a power of two >= 2, got {n}"
            )));
        }
        if r == 0 {
            return Err(Nep2Error::InvalidScryptParams("r must be positive".into()));
        }
        if p == 0 {
            return Err(Nep2Error::InvalidScryptParams("p must be positive".into()));
        }
        Ok(Self { n, r, p })
    }

    /// CPU/memory cost, a power of two.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Block size.
    pub fn r(&self) -> u32 {
        self.r
    }

    /// Parallelism.
    pub fn p(&self) -> u32 {
        self.p
    }

    fn log_n(&self) -> u8 {
        self.n.trailing_zeros() as u8
    }

    /// Stretch `passphrase` with the address hash as salt.
    pub fn derive(
        &self,
        passphrase: &str,
        address_hash: &[u8; 4],
    ) -> Result<DerivedKey, Nep2Error> {
        let params = scrypt::Params::new(self.log_n(), self.r, self.p, DERIVED_KEY_LENGTH)
            .map_err(|e| Nep2Error::InvalidScryptParams(e.to_string()))?;
        let mut output = Zeroizing::new([0u8; DERIVED_KEY_LENGTH]);
        scrypt::scrypt(
            passphrase.as_bytes(),
            address_hash,
            &params,
            output.as_mut(),
        )
        .map_err(|e| Nep2Error::InvalidScryptParams(e.to_string()))?;
        Ok(DerivedKey { output })
    }
}

impl Default for ScryptParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The 64 bytes of stretched passphrase material, zeroed on drop.
pub struct DerivedKey {
    output: Zeroizing<[u8; DERIVED_KEY_LENGTH]>,
}

impl DerivedKey {
    /// First half: the XOR mask applied to the private key.
    pub fn half_a(&self) -> &[u8; 32] {
        self.output[..32].try_into().expect("slice length is fixed")
    }

    /// Second half: the block-cipher key.
    pub fn half_b(&self) -> &[u8; 32] {
        self.output[32..].try_into().expect("slice length is fixed")
    }
}
