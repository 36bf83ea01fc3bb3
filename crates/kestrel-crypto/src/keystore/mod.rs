//! Passphrase-encrypted container for a single raw private key.
//!
//! The serialized form is a fixed-layout binary record — a frozen wire
//! format shared with companion wallet implementations:
//!
//! ```text
//! version (1) ‖ log_n (1) ‖ salt (32) ‖ iv (16) ‖ ciphertext (32) ‖ mac (32)
//! ```
//!
//! The passphrase stretches through scrypt (r = 8, p = 1) into a 64-byte
//! key: the first half encrypts the seed with AES-256-CTR, the second half
//! keys an HMAC-SHA256 tag over everything before it — version, KDF
//! parameters, IV, and ciphertext. Decryption is fail-closed: the tag is
//! verified in constant time before any cipher work, so a wrong passphrase
//! or corrupted container never yields plaintext, partial or otherwise.

use aes::Aes256;
use cipher::{KeyIvInit, StreamCipher};
use ctr::Ctr128BE;
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;

use crate::error::CryptoError;

type Aes256Ctr = Ctr128BE<Aes256>;
type HmacSha256 = Hmac<Sha256>;

/// Container format version.
const VERSION: u8 = 1;

/// Default scrypt cost exponent: N = 2^15, 32 MiB at r = 8.
const DEFAULT_LOG_N: u8 = 15;

/// scrypt block size.
const SCRYPT_R: u32 = 8;

/// scrypt parallelism.
const SCRYPT_P: u32 = 1;

const SALT_LEN: usize = 32;
const IV_LEN: usize = 16;
const SECRET_LEN: usize = 32;
const MAC_LEN: usize = 32;

/// Total serialized length: 2-byte header + salt + IV + ciphertext + MAC.
const KEYSTORE_LEN: usize = 2 + SALT_LEN + IV_LEN + SECRET_LEN + MAC_LEN;

/// Offset where the MAC begins; the tag covers everything before it.
const MAC_OFFSET: usize = KEYSTORE_LEN - MAC_LEN;

/// Encrypt a raw 32-byte private key under a passphrase.
///
/// Generates a fresh random salt and IV for every call. This is a
/// blocking, CPU- and memory-hard computation (scrypt); callers inside an
/// async runtime should run it on a blocking pool.
///
/// # Arguments
/// * `secret` - The raw private-key seed.
/// * `passphrase` - The encryption passphrase.
///
/// # Returns
/// The serialized keystore container.
pub fn create_keystore(secret: &[u8; 32], passphrase: &str) -> Result<Vec<u8>, CryptoError> {
    create_keystore_with_cost(secret, passphrase, DEFAULT_LOG_N)
}

pub(crate) fn create_keystore_with_cost(
    secret: &[u8; 32],
    passphrase: &str,
    log_n: u8,
) -> Result<Vec<u8>, CryptoError> {
    let mut salt = [0u8; SALT_LEN];
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut salt);
    OsRng.fill_bytes(&mut iv);

    let derived = derive_key(passphrase, &salt, log_n)?;

    let mut ciphertext = *secret;
    apply_cipher(&derived[..32], &iv, &mut ciphertext);

    let mut keystore = Vec::with_capacity(KEYSTORE_LEN);
    keystore.push(VERSION);
    keystore.push(log_n);
    keystore.extend_from_slice(&salt);
    keystore.extend_from_slice(&iv);
    keystore.extend_from_slice(&ciphertext);

    let mac = compute_mac(&derived[32..], &keystore);
    keystore.extend_from_slice(&mac);
    Ok(keystore)
}

/// Decrypt a keystore container back into the raw 32-byte private key.
///
/// Verifies the integrity tag before decrypting. A wrong passphrase and a
/// tampered container are indistinguishable: both fail the tag check.
///
/// # Arguments
/// * `keystore` - The serialized container.
/// * `passphrase` - The passphrase it was created with.
///
/// # Returns
/// The raw seed, or a parse/integrity error.
pub fn load_keystore(keystore: &[u8], passphrase: &str) -> Result<[u8; 32], CryptoError> {
    if keystore.len() != KEYSTORE_LEN {
        return Err(CryptoError::MalformedKeystore(format!(
            "expected {} bytes, got {}",
            KEYSTORE_LEN,
            keystore.len()
        )));
    }
    if keystore[0] != VERSION {
        return Err(CryptoError::UnsupportedKeystoreVersion(keystore[0]));
    }

    let log_n = keystore[1];
    let salt = &keystore[2..2 + SALT_LEN];
    let iv = &keystore[2 + SALT_LEN..2 + SALT_LEN + IV_LEN];
    let ciphertext = &keystore[2 + SALT_LEN + IV_LEN..MAC_OFFSET];
    let mac = &keystore[MAC_OFFSET..];

    let derived = derive_key(passphrase, salt, log_n)?;

    // Fail closed: never touch the cipher until the tag checks out.
    let expected = compute_mac(&derived[32..], &keystore[..MAC_OFFSET]);
    if !constant_time_eq(mac, &expected) {
        return Err(CryptoError::KeystoreIntegrity);
    }

    let mut secret = [0u8; SECRET_LEN];
    secret.copy_from_slice(ciphertext);
    apply_cipher(&derived[..32], iv, &mut secret);
    Ok(secret)
}

/// Stretch a passphrase into a 64-byte key: cipher key ‖ MAC key.
fn derive_key(passphrase: &str, salt: &[u8], log_n: u8) -> Result<[u8; 64], CryptoError> {
    // An absurd cost exponent in a hostile container would be a memory
    // bomb; reject before scrypt allocates.
    if log_n == 0 || log_n > 24 {
        return Err(CryptoError::MalformedKeystore(format!(
            "unreasonable scrypt cost exponent {log_n}"
        )));
    }
    let params = scrypt::Params::new(log_n, SCRYPT_R, SCRYPT_P, 64)
        .map_err(|e| CryptoError::MalformedKeystore(format!("invalid scrypt parameters: {e}")))?;

    let mut derived = [0u8; 64];
    scrypt::scrypt(passphrase.as_bytes(), salt, &params, &mut derived)
        .expect("output length is fixed and nonzero");
    Ok(derived)
}

/// AES-256-CTR in place; encryption and decryption are the same keystream.
fn apply_cipher(key: &[u8], iv: &[u8], data: &mut [u8]) {
    let mut cipher = Aes256Ctr::new_from_slices(key, iv)
        .expect("key and IV lengths are fixed");
    cipher.apply_keystream(data);
}

fn compute_mac(mac_key: &[u8], data: &[u8]) -> [u8; MAC_LEN] {
    let mut mac = HmacSha256::new_from_slice(mac_key).expect("HMAC accepts any key length");
    mac.update(data);
    let mut output = [0u8; MAC_LEN];
    output.copy_from_slice(&mac.finalize().into_bytes());
    output
}

/// Constant-time comparison of two byte slices.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for i in 0..a.len() {
        diff |= a[i] ^ b[i];
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    // Low cost keeps the corruption sweep fast; the wire format is
    // identical at any exponent.
    const TEST_LOG_N: u8 = 12;

    #[test]
    fn test_roundtrip_default_cost() {
        let secret = [0xabu8; 32];
        let keystore = create_keystore(&secret, "passphrase").unwrap();
        assert_eq!(keystore.len(), KEYSTORE_LEN);
        assert_eq!(load_keystore(&keystore, "passphrase").unwrap(), secret);
    }

    #[test]
    fn test_wrong_passphrase_fails_closed() {
        let secret = [7u8; 32];
        let keystore = create_keystore_with_cost(&secret, "right", TEST_LOG_N).unwrap();
        assert!(matches!(
            load_keystore(&keystore, "wrong").unwrap_err(),
            CryptoError::KeystoreIntegrity
        ));
    }

    #[test]
    fn test_any_flipped_byte_fails_integrity() {
        let secret = [0x5au8; 32];
        let keystore = create_keystore_with_cost(&secret, "pw", TEST_LOG_N).unwrap();

        let ciphertext_start = 2 + SALT_LEN + IV_LEN;
        for position in ciphertext_start..ciphertext_start + SECRET_LEN {
            let mut corrupted = keystore.clone();
            corrupted[position] ^= 0x01;
            assert!(
                matches!(
                    load_keystore(&corrupted, "pw").unwrap_err(),
                    CryptoError::KeystoreIntegrity
                ),
                "flipped ciphertext byte {position} must fail"
            );
        }

        // The tag also covers the KDF parameters.
        let mut corrupted = keystore.clone();
        corrupted[1] = TEST_LOG_N + 1;
        assert!(load_keystore(&corrupted, "pw").is_err());
    }

    #[test]
    fn test_salts_and_ivs_are_fresh() {
        let secret = [1u8; 32];
        let a = create_keystore_with_cost(&secret, "pw", TEST_LOG_N).unwrap();
        let b = create_keystore_with_cost(&secret, "pw", TEST_LOG_N).unwrap();
        assert_ne!(a, b);
        assert_ne!(a[2..2 + SALT_LEN], b[2..2 + SALT_LEN]);
    }

    #[test]
    fn test_malformed_containers() {
        let secret = [2u8; 32];
        let keystore = create_keystore_with_cost(&secret, "pw", TEST_LOG_N).unwrap();

        assert!(matches!(
            load_keystore(&keystore[..KEYSTORE_LEN - 1], "pw").unwrap_err(),
            CryptoError::MalformedKeystore(_)
        ));

        let mut versioned = keystore.clone();
        versioned[0] = 9;
        assert!(matches!(
            load_keystore(&versioned, "pw").unwrap_err(),
            CryptoError::UnsupportedKeystoreVersion(9)
        ));

        let mut bomb = keystore;
        bomb[1] = 60;
        assert!(matches!(
            load_keystore(&bomb, "pw").unwrap_err(),
            CryptoError::MalformedKeystore(_)
        ));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
    }
}
