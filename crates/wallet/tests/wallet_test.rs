//! Integration tests for the wallet workflow: create accounts, persist
//! to disk, reload and decrypt.

use keyvault_crypto::ScryptParams;
use keyvault_wallet::{Account, Wallet};
use tempfile::TempDir;

fn fast_params() -> ScryptParams {
    ScryptParams::new(2, 1, 1).unwrap()
}

#[test]
fn test_full_wallet_workflow() {
    let mut wallet = Wallet::new("integration", fast_params());
    let passphrase = "test-integration-passphrase-12345";

    let address = wallet
        .add_new_account(&mut rand::thread_rng(), passphrase, Some("hot".into()))
        .unwrap()
        .address
        .clone();

    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let path = temp_dir.path().join("wallet.json");
    wallet.save(&path).expect("failed to save wallet");

    let loaded = Wallet::load(&path).expect("failed to load wallet");
    assert_eq!(loaded.name, "integration");
    assert_eq!(loaded.accounts.len(), 1);
    assert_eq!(loaded.accounts[0].address, address);

    let pair = loaded.decrypt_account(&address, passphrase).unwrap();
    let codec = keyvault_crypto::AddressCodec::mainnet();
    assert_eq!(codec.address_of(pair.public_key()), address);

    assert!(loaded.decrypt_account(&address, "wrong").is_err());
}

#[test]
fn test_watch_only_accounts_survive_persistence() {
    let mut wallet = Wallet::new("watch", fast_params());
    let codec = keyvault_crypto::AddressCodec::mainnet();
    let address = codec.encode(&[0x42u8; 20]);
    wallet
        .add_account(Account::watch_only(&address, Some("cold".into())).unwrap())
        .unwrap();

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("wallet.json");
    wallet.save(&path).unwrap();

    let loaded = Wallet::load(&path).unwrap();
    let account = loaded.account_by_label("cold").unwrap();
    assert!(account.is_watch_only());
    assert_eq!(account.address, address);
}

#[test]
#[cfg(unix)]
fn test_wallet_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let wallet = Wallet::new("perms", fast_params());
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("wallet.json");
    wallet.save(&path).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
