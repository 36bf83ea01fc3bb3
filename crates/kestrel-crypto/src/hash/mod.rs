//! Hash and key-stretching primitives for the identity layer.
//!
//! Thin wrappers over the RustCrypto implementations of SHA-256,
//! HMAC-SHA-512, and PBKDF2-HMAC-SHA-512. These are the only digest
//! primitives the mnemonic and derivation code touches.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute HMAC-SHA512 of the input data with the given key.
///
/// # Arguments
/// * `key` - The HMAC key bytes.
/// * `data` - The message bytes to authenticate.
///
/// # Returns
/// A 64-byte HMAC-SHA512 tag.
pub fn sha512_hmac(key: &[u8], data: &[u8]) -> [u8; 64] {
    type HmacSha512 = Hmac<Sha512>;
    let mut mac = HmacSha512::new_from_slice(key)
        .expect("HMAC accepts any key length");
    mac.update(data);
    let result = mac.finalize();
    let mut output = [0u8; 64];
    output.copy_from_slice(&result.into_bytes());
    output
}

/// Run PBKDF2-HMAC-SHA512 over a password and salt.
///
/// This is the key-stretching step behind both mnemonic formats. It is a
/// blocking, CPU-bound computation; callers inside an async runtime should
/// run it on a blocking pool.
///
/// # Arguments
/// * `password` - The password bytes.
/// * `salt` - The salt bytes.
/// * `rounds` - Iteration count.
/// * `output` - Buffer filled with the derived key; its length selects the
///   output size.
pub fn pbkdf2_sha512(password: &[u8], salt: &[u8], rounds: u32, output: &mut [u8]) {
    pbkdf2::pbkdf2_hmac::<Sha512>(password, salt, rounds, output);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_empty_string() {
        let hash = sha256(b"");
        assert_eq!(
            hex::encode(hash),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_zero_entropy() {
        // First byte of this digest supplies the checksum bits for the
        // all-zero 24-word mnemonic.
        let hash = sha256(&[0u8; 32]);
        assert_eq!(
            hex::encode(hash),
            "66687aadf862bd776c8fc18b8e9f8e20089714856ee233b3902a591d0d5f2925"
        );
    }

    // RFC 4231 test case 1.
    #[test]
    fn test_sha512_hmac_rfc4231_case_1() {
        let key = hex::decode("0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b").unwrap();
        let msg = hex::decode("4869205468657265").unwrap(); // "Hi There"
        let mac = sha512_hmac(&key, &msg);
        assert_eq!(
            hex::encode(mac),
            "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cde\
             daa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854"
        );
    }

    // RFC 4231 test case 2.
    #[test]
    fn test_sha512_hmac_rfc4231_case_2() {
        let key = hex::decode("4a656665").unwrap(); // "Jefe"
        let msg = hex::decode("7768617420646f2079612077616e7420666f72206e6f7468696e673f").unwrap();
        let mac = sha512_hmac(&key, &msg);
        assert_eq!(
            hex::encode(mac),
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_pbkdf2_sha512_determinism() {
        let mut a = [0u8; 64];
        let mut b = [0u8; 64];
        pbkdf2_sha512(b"password", b"salt", 2048, &mut a);
        pbkdf2_sha512(b"password", b"salt", 2048, &mut b);
        assert_eq!(a, b);

        let mut c = [0u8; 64];
        pbkdf2_sha512(b"password", b"pepper", 2048, &mut c);
        assert_ne!(a, c);
    }
}
