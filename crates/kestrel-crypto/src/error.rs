use crate::mnemonic::Mnemonic;

/// Unified error type for all identity-layer operations.
///
/// Covers mnemonic validation, key decoding, derivation, keystore, and
/// encoding failures.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error(transparent)]
    BadMnemonic(#[from] BadMnemonicError),

    #[error("unsupported word count {0}, only 12 or 24 word phrases can be generated")]
    UnsupportedWordCount(usize),

    #[error("legacy 22-word mnemonics do not support passphrases")]
    LegacyPassphraseUnsupported,

    #[error("invalid private key length: {0} bytes")]
    BadKeyLength(usize),

    #[error("invalid private key prefix: expected {expected}, got {actual}")]
    BadPrefix { expected: String, actual: String },

    #[error("invalid private key: public half does not match the secret half")]
    KeyPairMismatch,

    #[error("invalid public key length: {0} bytes")]
    BadPublicKeyLength(usize),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("this private key does not support key derivation")]
    NotDerivable,

    #[error("malformed keystore: {0}")]
    MalformedKeystore(String),

    #[error("unsupported keystore version: {0}")]
    UnsupportedKeystoreVersion(u8),

    #[error("keystore integrity check failed: wrong passphrase or corrupted data")]
    KeystoreIntegrity,

    #[error("malformed PEM: {0}")]
    MalformedPem(String),

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// A mnemonic phrase that failed validation.
///
/// Carries the constructed [`Mnemonic`] alongside the failure reason so a
/// caller may inspect the problem precisely — or deliberately ignore the
/// error and derive keys from the invalid phrase anyway.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid mnemonic: {reason}")]
pub struct BadMnemonicError {
    /// The mnemonic as constructed from the input words. Still usable.
    pub mnemonic: Mnemonic,
    /// Why validation failed.
    pub reason: BadMnemonicReason,
}

/// The reason a mnemonic phrase failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadMnemonicReason {
    /// The phrase does not contain 12, 22, or 24 words.
    BadLength(usize),
    /// One or more words are not in the applicable word list. Holds the
    /// zero-based positions of every offending word, not just the first.
    UnknownWords(Vec<usize>),
    /// The recomputed checksum does not match the one encoded in the phrase.
    ChecksumMismatch,
}

impl std::fmt::Display for BadMnemonicReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BadMnemonicReason::BadLength(count) => {
                write!(f, "bad word count {count}, expected 12, 22, or 24")
            }
            BadMnemonicReason::UnknownWords(indices) => {
                write!(f, "unknown words at indices {indices:?}")
            }
            BadMnemonicReason::ChecksumMismatch => write!(f, "checksum mismatch"),
        }
    }
}
