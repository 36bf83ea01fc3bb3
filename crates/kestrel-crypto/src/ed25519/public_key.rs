use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use super::DER_PREFIX_PUBLIC;
use crate::error::CryptoError;

/// An Ed25519 public key.
///
/// The freely shareable half of a key pair; verifies signatures produced
/// by the matching [`PrivateKey`](super::PrivateKey).
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    key: VerifyingKey,
}

impl PublicKey {
    pub(crate) fn from_verifying_key(key: VerifyingKey) -> Self {
        PublicKey { key }
    }

    /// Construct a public key from bytes.
    ///
    /// Dispatches on length: 32 bytes are a raw key, 44 bytes must begin
    /// with the fixed SPKI prefix followed by the raw key.
    ///
    /// # Returns
    /// `Ok(PublicKey)`, or an error naming the bad length, prefix, or
    /// curve point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        match bytes.len() {
            32 => {
                let raw: [u8; 32] = bytes.try_into().expect("length checked");
                let key = VerifyingKey::from_bytes(&raw)
                    .map_err(|_| CryptoError::InvalidPublicKey("not a valid curve point".into()))?;
                Ok(PublicKey { key })
            }
            44 => {
                if bytes[..12] != DER_PREFIX_PUBLIC {
                    return Err(CryptoError::BadPrefix {
                        expected: hex::encode(DER_PREFIX_PUBLIC),
                        actual: hex::encode(&bytes[..12]),
                    });
                }
                Self::from_bytes(&bytes[12..])
            }
            other => Err(CryptoError::BadPublicKeyLength(other)),
        }
    }

    /// Construct a public key from a hex string, with or without the SPKI
    /// prefix.
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        Self::from_bytes(&hex::decode(s)?)
    }

    /// Verify a 64-byte signature over a message.
    ///
    /// Anything but a well-formed, matching signature verifies false.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let bytes: [u8; 64] = match signature.try_into() {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };
        self.key
            .verify(message, &Signature::from_bytes(&bytes))
            .is_ok()
    }

    /// The raw 32-byte public key.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.key.to_bytes()
    }

    /// Hex encoding of the raw key, without the SPKI prefix.
    pub fn to_string_raw(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl std::str::FromStr for PublicKey {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Hex encoding with the SPKI prefix, the canonical interchange form.
impl std::fmt::Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            hex::encode(DER_PREFIX_PUBLIC),
            hex::encode(self.to_bytes())
        )
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({})", self.to_string_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::super::PrivateKey;
    use super::*;

    #[test]
    fn test_from_bytes_raw_and_prefixed() {
        let public = PrivateKey::generate().public_key();

        let raw = PublicKey::from_bytes(&public.to_bytes()).unwrap();
        assert_eq!(raw, public);

        let mut der = Vec::new();
        der.extend_from_slice(&DER_PREFIX_PUBLIC);
        der.extend_from_slice(&public.to_bytes());
        let prefixed = PublicKey::from_bytes(&der).unwrap();
        assert_eq!(prefixed, public);

        der[0] ^= 0xff;
        assert!(matches!(
            PublicKey::from_bytes(&der).unwrap_err(),
            CryptoError::BadPrefix { .. }
        ));
    }

    #[test]
    fn test_from_bytes_rejects_bad_lengths() {
        for len in [0usize, 16, 31, 33, 43, 45] {
            assert!(matches!(
                PublicKey::from_bytes(&vec![0u8; len]).unwrap_err(),
                CryptoError::BadPublicKeyLength(l) if l == len
            ));
        }
    }

    #[test]
    fn test_hex_roundtrip() {
        let public = PrivateKey::generate().public_key();
        let reparsed: PublicKey = public.to_string().parse().unwrap();
        assert_eq!(reparsed, public);
        let reparsed_raw: PublicKey = public.to_string_raw().parse().unwrap();
        assert_eq!(reparsed_raw, public);
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let key = PrivateKey::generate();
        let public = key.public_key();
        let signature = key.sign(b"message");

        assert!(public.verify(b"message", &signature));
        assert!(!public.verify(b"message", &signature[..63]));
        assert!(!public.verify(b"message", &[0u8; 64]));

        let other = PrivateKey::generate().public_key();
        assert!(!other.verify(b"message", &signature));
    }
}
