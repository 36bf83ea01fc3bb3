use proptest::prelude::*;

use kestrel_crypto::{Mnemonic, PrivateKey};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // A generated phrase always parses back to itself, and both copies
    // stretch to the same key. Randomness enters at entropy generation
    // only, never afterward.
    #[test]
    fn generated_phrase_roundtrips(pick in any::<bool>()) {
        let word_count = if pick { 12 } else { 24 };
        let mnemonic = Mnemonic::generate(word_count).unwrap();
        let reparsed: Mnemonic = mnemonic.to_string().parse().unwrap();
        prop_assert_eq!(&mnemonic, &reparsed);
        prop_assert_eq!(
            mnemonic.to_private_key("").unwrap().to_bytes(),
            reparsed.to_private_key("").unwrap().to_bytes()
        );
    }

    // Replacing any single word of a valid 24-word phrase fails the
    // checksum with overwhelming probability; the 8-bit checksum admits a
    // ~1/256 coincidental match, in which case the phrase must at least
    // decode to different key material.
    #[test]
    fn single_word_substitution_is_detected(position in 0usize..24, other in 0usize..2048) {
        let mnemonic = Mnemonic::generate(24).unwrap();
        let mut words: Vec<String> = mnemonic.words().to_vec();
        let replacement = kestrel_crypto::words::STANDARD[other];
        prop_assume!(words[position] != replacement);
        words[position] = replacement.to_string();
        match Mnemonic::from_words(words) {
            Err(_) => {}
            Ok(substituted) => prop_assert_ne!(
                substituted.to_private_key("").unwrap().to_bytes(),
                mnemonic.to_private_key("").unwrap().to_bytes()
            ),
        }
    }

    #[test]
    fn private_key_byte_and_hex_roundtrip(seed in prop::array::uniform32(any::<u8>())) {
        let key = PrivateKey::from_bytes(&seed).unwrap();
        prop_assert_eq!(key.to_bytes(), seed);

        let from_raw = PrivateKey::from_hex(&key.to_string_raw()).unwrap();
        let from_der = PrivateKey::from_hex(&key.to_string()).unwrap();
        prop_assert_eq!(from_raw.to_bytes(), seed);
        prop_assert_eq!(from_der.to_bytes(), seed);
    }

    #[test]
    fn sign_verify_roundtrip(
        seed in prop::array::uniform32(any::<u8>()),
        message in prop::collection::vec(any::<u8>(), 0..256)
    ) {
        let key = PrivateKey::from_bytes(&seed).unwrap();
        let signature = key.sign(&message);
        let public = key.public_key();
        prop_assert!(public.verify(&message, &signature));

        let mut tampered = message.clone();
        tampered.push(0x01);
        prop_assert!(!public.verify(&tampered, &signature));
    }

    // Hardened derivation from the same parent at the same index is
    // stable; sibling indices diverge.
    #[test]
    fn derivation_is_stable(index in 0u32..1_000_000) {
        let parent = PrivateKey::generate();
        let a = parent.derive(index).unwrap();
        let b = parent.derive(index).unwrap();
        prop_assert_eq!(a.to_bytes(), b.to_bytes());
        prop_assert_ne!(a.to_bytes(), parent.derive(index + 1).unwrap().to_bytes());
    }
}
