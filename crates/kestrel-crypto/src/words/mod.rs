//! Embedded mnemonic word tables.
//!
//! Two static, ordered, immutable word lists: the standard 2048-entry
//! English table and the 4096-entry legacy table. Both are plain `const`
//! data compiled into the binary; there is no lazy initialization and
//! nothing ever mutates them. The legacy table's length doubles as the
//! radix base for decoding 22-word phrases.

mod english;
mod legacy;

/// The standard word table: 2048 lowercase English words, sorted.
pub const STANDARD: &[&str; 2048] = &english::WORDS;

/// The legacy word table: 4096 lowercase English words, sorted.
pub const LEGACY: &[&str; 4096] = &legacy::WORDS;

/// Look up a word's index in the standard table.
///
/// Words are matched exactly; no case folding is applied.
pub(crate) fn standard_index(word: &str) -> Option<usize> {
    STANDARD.binary_search(&word).ok()
}

/// Look up a word's index in the legacy table.
///
/// Legacy phrases are matched case-insensitively.
pub(crate) fn legacy_index(word: &str) -> Option<usize> {
    let lowered = word.to_lowercase();
    LEGACY.binary_search(&lowered.as_str()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_sorted_and_unique() {
        // Binary-search lookup relies on this.
        assert!(STANDARD.windows(2).all(|w| w[0] < w[1]));
        assert!(LEGACY.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_tables_are_lowercase_ascii() {
        for word in STANDARD.iter().chain(LEGACY.iter()) {
            assert!(word.bytes().all(|b| b.is_ascii_lowercase()), "{word}");
        }
    }

    #[test]
    fn test_standard_lookup() {
        assert_eq!(standard_index("abandon"), Some(0));
        assert_eq!(standard_index("about"), Some(3));
        assert_eq!(standard_index("art"), Some(102));
        assert_eq!(standard_index("zoo"), Some(2047));
        assert_eq!(standard_index("notaword"), None);
        // Standard lookup is exact: no case folding.
        assert_eq!(standard_index("Abandon"), None);
    }

    #[test]
    fn test_legacy_lookup_is_case_insensitive() {
        assert_eq!(legacy_index(LEGACY[0]), Some(0));
        assert_eq!(legacy_index(&LEGACY[4095].to_uppercase()), Some(4095));
        assert_eq!(legacy_index("notaword"), None);
    }
}
