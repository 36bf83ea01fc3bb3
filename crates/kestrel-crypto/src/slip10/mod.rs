//! SLIP-10 hierarchical key derivation, restricted to the Ed25519 curve.
//!
//! Ed25519 defines no non-hardened derivation, so every index is forced
//! into the hardened range before the HMAC step.

use crate::hash::sha512_hmac;

/// Offset added to an index to place it in the hardened range.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Derive a child key and chain code from a parent key and chain code.
///
/// Computes HMAC-SHA512 keyed by the parent chain code over
/// `0x00 ‖ parent_key ‖ be32(index | 0x8000_0000)`. The left 32 bytes of
/// the digest are the child key, the right 32 bytes the child chain code.
///
/// # Arguments
/// * `parent_key` - The parent's 32-byte key material.
/// * `chain_code` - The parent's 32-byte chain code.
/// * `index` - Child index; unconditionally treated as hardened.
///
/// # Returns
/// The `(child_key, child_chain_code)` pair.
pub fn derive(parent_key: &[u8; 32], chain_code: &[u8; 32], index: u32) -> ([u8; 32], [u8; 32]) {
    let mut data = [0u8; 37];
    data[1..33].copy_from_slice(parent_key);
    data[33..].copy_from_slice(&(index | HARDENED_OFFSET).to_be_bytes());

    let digest = sha512_hmac(chain_code, &data);

    let mut child_key = [0u8; 32];
    let mut child_chain_code = [0u8; 32];
    child_key.copy_from_slice(&digest[..32]);
    child_chain_code.copy_from_slice(&digest[32..]);
    (child_key, child_chain_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_is_deterministic() {
        let key = [7u8; 32];
        let chain = [9u8; 32];
        assert_eq!(derive(&key, &chain, 44), derive(&key, &chain, 44));
        assert_ne!(derive(&key, &chain, 44), derive(&key, &chain, 45));
    }

    #[test]
    fn test_every_index_is_hardened() {
        let key = [1u8; 32];
        let chain = [2u8; 32];
        // An index at or above the hardened offset derives the same child
        // as its low counterpart: the offset bit is always set.
        assert_eq!(derive(&key, &chain, 0), derive(&key, &chain, HARDENED_OFFSET));
        assert_eq!(
            derive(&key, &chain, 3030),
            derive(&key, &chain, 3030 | HARDENED_OFFSET)
        );
    }

    #[test]
    fn test_chain_code_feeds_forward() {
        let key = [1u8; 32];
        let chain_a = [2u8; 32];
        let chain_b = [3u8; 32];
        // Same key, different chain codes: different children.
        assert_ne!(derive(&key, &chain_a, 0), derive(&key, &chain_b, 0));
    }
}
