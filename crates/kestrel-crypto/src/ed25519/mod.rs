//! Ed25519 key pairs for the identity layer.
//!
//! Private keys are 32-byte seeds, optionally paired with a chain code
//! when hierarchical derivation is available. The DER prefixes below are
//! the fixed PKCS#8/SPKI headers for Ed25519 key material; byte-length
//! dispatch plus these prefixes cover every supported encoding.

mod pem;
mod private_key;
mod public_key;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;

/// PKCS#8 header preceding a 32-byte Ed25519 private seed (48 bytes total).
pub(crate) const DER_PREFIX_PRIVATE: [u8; 16] = [
    0x30, 0x2e, 0x02, 0x01, 0x00, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x04, 0x22, 0x04,
    0x20,
];

/// SPKI header preceding a 32-byte Ed25519 public key (44 bytes total).
pub(crate) const DER_PREFIX_PUBLIC: [u8; 12] = [
    0x30, 0x2a, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x03, 0x21, 0x00,
];
