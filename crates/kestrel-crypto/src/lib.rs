//! Kestrel SDK - Cryptographic identity layer.
//!
//! This crate recovers and manages the key material behind a Kestrel
//! account:
//! - Mnemonic phrases in two encodings: the standard 12/24-word format and
//!   the legacy 22-word format
//! - Ed25519 private/public key pairs with every supported byte encoding
//! - Hardened-only hierarchical derivation for the Ed25519 curve
//! - A passphrase-encrypted keystore container for a single private key
//!
//! Everything here is a pure, synchronous computation over caller-owned
//! buffers; there is no shared mutable state, so concurrent calls need no
//! coordination. The key-stretching operations (mnemonic-to-key, keystore
//! sealing/opening) are deliberately expensive — run them on a blocking
//! pool when inside an async runtime.

pub mod ed25519;
pub mod hash;
pub mod keystore;
pub mod mnemonic;
pub mod slip10;
pub mod words;

mod error;
pub use error::{BadMnemonicError, BadMnemonicReason, CryptoError};

pub use ed25519::{PrivateKey, PublicKey};
pub use mnemonic::Mnemonic;
