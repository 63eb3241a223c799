//! AES-256 over a single 32-byte block.
//!
//! NEP-2 encrypts exactly one 32-byte value with a one-shot derived key,
//! so the raw block cipher is applied to the two halves directly; no IV,
//! no padding, no chaining. Both directions work in place so masked key
//! material never lands in an unmanaged copy.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes256;

/// Encrypt `block` in place under `key`.
pub fn encrypt_block(block: &mut [u8; 32], key: &[u8; 32]) {
    let cipher = Aes256::new(GenericArray::from_slice(key));
    let (lo, hi) = block.split_at_mut(16);
    cipher.encrypt_block(GenericArray::from_mut_slice(lo));
    cipher.encrypt_block(GenericArray::from_mut_slice(hi));
}

/// Decrypt `block` in place under `key`.
pub fn decrypt_block(block: &mut [u8; 32], key: &[u8; 32]) {
    let cipher = Aes256::new(GenericArray::from_slice(key));
    let (lo, hi) = block.split_at_mut(16);
    cipher.decrypt_block(GenericArray::from_mut_slice(lo));
    cipher.decrypt_block(GenericArray::from_mut_slice(hi));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fips_197_vector() {
        // AES-256 example from FIPS 197 appendix C.3, applied to both
        // halves of the block.
        let mut key = [0u8; 32];
        hex::decode_to_slice(
            "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
            &mut key,
        )
        .unwrap();
        let mut block = [0u8; 32];
        hex::decode_to_slice(
            "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff",
            &mut block,
        )
        .unwrap();
        encrypt_block(&mut block, &key);
        assert_eq!(
            hex::encode(block),
            "8ea2b7ca516745bfeafc49904b4960898ea2b7ca516745bfeafc49904b496089"
        );
    }

    #[test]
    fn test_roundtrip() {
        let key = [0x5Au8; 32];
        let plaintext = [0xC3u8; 32];
        let mut block = plaintext;
        encrypt_block(&mut block, &key);
        assert_ne!(block, plaintext);
        decrypt_block(&mut block, &key);
        assert_eq!(block, plaintext);
    }

    #[test]
    fn test_halves_encrypt_independently() {
        // No chaining: equal input halves produce equal output halves.
        let key = [0x11u8; 32];
        let mut block = [0x22u8; 32];
        encrypt_block(&mut block, &key);
        assert_eq!(block[..16], block[16..]);
    }

    #[test]
    fn test_key_changes_output() {
        let mut a = [7u8; 32];
        let mut b = [7u8; 32];
        encrypt_block(&mut a, &[1u8; 32]);
        encrypt_block(&mut b, &[2u8; 32]);
        assert_ne!(a, b);
    }
}
