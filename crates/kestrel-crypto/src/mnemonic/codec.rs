//! Bit- and radix-level plumbing for both mnemonic encodings.
//!
//! Standard phrases carry entropy plus SHA-256 checksum bits packed into
//! 11-bit word indices. Legacy phrases are one base-4096 integer whose
//! base-256 form ends in a CRC-8 byte that is XOR-folded into the data.

use crate::error::BadMnemonicReason;
use crate::hash::sha256;
use crate::words;

/// Number of bytes a decoded legacy phrase occupies: 32 entropy + 1 checksum.
const LEGACY_DECODED_LEN: usize = 33;

/// Read the bit at position `index` from a big-endian bit stream.
fn bit_at(bytes: &[u8], index: usize) -> bool {
    bytes[index / 8] >> (7 - index % 8) & 1 == 1
}

/// Encode entropy into standard-format words.
///
/// Appends `entropy_bits / 32` checksum bits taken from the front of
/// SHA-256(entropy), then maps each 11-bit group to a word. Entropy must be
/// 16 or 32 bytes; anything else is a caller bug upstream of this point.
pub(crate) fn entropy_to_words(entropy: &[u8]) -> Vec<String> {
    let checksum = sha256(entropy);
    let total_bits = entropy.len() * 8 + entropy.len() * 8 / 32;

    let mut stream = entropy.to_vec();
    stream.extend_from_slice(&checksum);

    (0..total_bits / 11)
        .map(|word| {
            let mut index = 0usize;
            for bit in 0..11 {
                index = index << 1 | bit_at(&stream, word * 11 + bit) as usize;
            }
            words::STANDARD[index].to_string()
        })
        .collect()
}

/// Map standard-format words to their table indices.
///
/// Scans every word before giving up: the error lists the position of each
/// unknown word, never just the first.
pub(crate) fn standard_indices(words: &[String]) -> Result<Vec<u16>, Vec<usize>> {
    lookup_all(words, |word| words::standard_index(word))
}

/// Map legacy-format words to their table indices, case-insensitively.
pub(crate) fn legacy_indices(words: &[String]) -> Result<Vec<u16>, Vec<usize>> {
    lookup_all(words, |word| words::legacy_index(word))
}

fn lookup_all(
    words: &[String],
    index_of: impl Fn(&str) -> Option<usize>,
) -> Result<Vec<u16>, Vec<usize>> {
    let mut indices = Vec::with_capacity(words.len());
    let mut unknown = Vec::new();
    for (position, word) in words.iter().enumerate() {
        match index_of(word) {
            Some(index) => indices.push(index as u16),
            None => unknown.push(position),
        }
    }
    if unknown.is_empty() {
        Ok(indices)
    } else {
        Err(unknown)
    }
}

/// Recover entropy from standard word indices, verifying the checksum.
///
/// The combined bit stream splits at `floor(total_bits / 33) * 32`: bits
/// before the divider are entropy, bits after it the encoded checksum. The
/// checksum is recomputed over the regrouped entropy bytes and compared
/// bit-for-bit.
pub(crate) fn standard_entropy(indices: &[u16]) -> Result<Vec<u8>, BadMnemonicReason> {
    let total_bits = indices.len() * 11;
    let divider = total_bits / 33 * 32;

    let mut stream = vec![0u8; total_bits.div_ceil(8)];
    for (word, &index) in indices.iter().enumerate() {
        for bit in 0..11 {
            if index >> (10 - bit) & 1 == 1 {
                let position = word * 11 + bit;
                stream[position / 8] |= 1 << (7 - position % 8);
            }
        }
    }

    let entropy = stream[..divider / 8].to_vec();
    let checksum = sha256(&entropy);
    for bit in 0..total_bits - divider {
        if bit_at(&checksum, bit) != bit_at(&stream, divider + bit) {
            return Err(BadMnemonicReason::ChecksumMismatch);
        }
    }
    Ok(entropy)
}

/// Recover `(entropy, checksum_byte)` from legacy word indices.
///
/// The 22 indices form one base-4096 integer, re-expressed as 33 big-endian
/// bytes. The trailing byte is the checksum; each of the 32 preceding bytes
/// is XORed with it to yield the entropy. Callers verify CRC-8 over the
/// post-XOR entropy, not the raw conversion output — the order matters.
pub(crate) fn legacy_entropy(indices: &[u16]) -> ([u8; 32], u8) {
    let data = convert_radix(indices, words::LEGACY.len() as u32, LEGACY_DECODED_LEN);
    let checksum = data[LEGACY_DECODED_LEN - 1];
    let mut entropy = [0u8; 32];
    for (out, byte) in entropy.iter_mut().zip(&data) {
        *out = byte ^ checksum;
    }
    (entropy, checksum)
}

/// Re-express a sequence of base-`from_radix` digits as `to_len` big-endian
/// base-256 bytes.
///
/// Uses a multiply-add accumulator over the output bytes — exact integer
/// arithmetic, no floating point.
fn convert_radix(digits: &[u16], from_radix: u32, to_len: usize) -> Vec<u8> {
    let mut out = vec![0u8; to_len];
    for &digit in digits {
        let mut carry = digit as u32;
        for byte in out.iter_mut().rev() {
            let value = *byte as u32 * from_radix + carry;
            *byte = (value & 0xff) as u8;
            carry = value >> 8;
        }
        // 22 base-4096 digits are exactly 33 bytes; a nonzero carry here
        // means the caller passed the wrong digit count.
        debug_assert_eq!(carry, 0);
    }
    out
}

/// CRC-8 with polynomial 0xB2 (right-shift form), initial value 0xFF, and
/// final XOR 0xFF, computed over all but the last byte of the input.
pub(crate) fn crc8(data: &[u8]) -> u8 {
    let mut crc = 0xffu8;
    for &byte in &data[..data.len() - 1] {
        crc ^= byte;
        for _ in 0..8 {
            crc = (crc >> 1) ^ if crc & 1 == 0 { 0 } else { 0xb2 };
        }
    }
    crc ^ 0xff
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_words(phrase: &str) -> Vec<String> {
        phrase.split(' ').map(String::from).collect()
    }

    #[test]
    fn test_entropy_to_words_zero_vectors() {
        let words12 = entropy_to_words(&[0u8; 16]);
        assert_eq!(words12.len(), 12);
        assert_eq!(words12[0], "abandon");
        assert_eq!(words12[11], "about");

        let words24 = entropy_to_words(&[0u8; 32]);
        assert_eq!(words24.len(), 24);
        assert_eq!(words24[22], "abandon");
        assert_eq!(words24[23], "art");
    }

    #[test]
    fn test_standard_entropy_roundtrip() {
        let entropy: Vec<u8> = (0u8..32).collect();
        let words = entropy_to_words(&entropy);
        let indices = standard_indices(&words).unwrap();
        assert_eq!(standard_entropy(&indices).unwrap(), entropy);
    }

    #[test]
    fn test_standard_entropy_detects_altered_word() {
        let mut words = to_words(
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        );
        words[4] = "zoo".to_string();
        let indices = standard_indices(&words).unwrap();
        assert_eq!(
            standard_entropy(&indices),
            Err(BadMnemonicReason::ChecksumMismatch)
        );
    }

    #[test]
    fn test_unknown_words_are_all_reported() {
        let words = to_words("abandon xyzzy ability plugh zoo");
        assert_eq!(standard_indices(&words), Err(vec![1, 3]));
    }

    #[test]
    fn test_convert_radix_packs_12_bit_digits() {
        // Two base-4096 digits are exactly three bytes.
        let bytes = convert_radix(&[0x123, 0x456], 4096, 3);
        assert_eq!(bytes, vec![0x12, 0x34, 0x56]);
    }

    #[test]
    fn test_crc8_skips_final_byte() {
        let mut data = [0u8; 33];
        let a = crc8(&data);
        // Changing only the final byte must not affect the checksum.
        data[32] = 0x5a;
        assert_eq!(crc8(&data), a);
        // Changing any covered byte must.
        data[0] = 0x01;
        assert_ne!(crc8(&data), a);
    }

    #[test]
    fn test_crc8_pinned() {
        let entropy: Vec<u8> = (0u8..32).collect();
        assert_eq!(crc8(&entropy), 0x12);
    }
}
