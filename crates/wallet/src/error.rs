use thiserror::Error;

use keyvault_crypto::{AddressError, CryptoError, Nep2Error, WifError};

/// Errors from wallet operations.
#[derive(Debug, Error)]
pub enum WalletError {
    /// An account with the same address already exists in the wallet.
    #[error("account with address {0} already exists")]
    DuplicateAddress(String),

    /// No account matched the given label.
    #[error("no account labeled {0:?}")]
    AccountNotFound(String),

    /// The account exists but holds no key material.
    #[error("account {0} is watch-only and has no key")]
    WatchOnlyAccount(String),

    /// A contract needs a non-empty verification script.
    #[error("contract script must not be empty")]
    EmptyScript,

    /// A contract needs at least one parameter.
    #[error("contract parameter list must not be empty")]
    NoParameters,

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Nep2(#[from] Nep2Error),

    #[error(transparent)]
    Wif(#[from] WifError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
