//! Property tests for content fingerprints.

use proptest::prelude::*;

use assetbake::ContentHash;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Fingerprints are deterministic 64-char lowercase hex.
    #[test]
    fn property_fingerprint_is_deterministic_hex(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let first = ContentHash::from_bytes(&bytes);
        let second = ContentHash::from_bytes(&bytes);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.as_str().len(), 64);
        prop_assert!(first.as_str().chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    /// PROPERTY: Appending a byte changes the fingerprint.
    #[test]
    fn property_fingerprint_distinguishes_content(
        bytes in proptest::collection::vec(any::<u8>(), 0..256),
        extra in any::<u8>()
    ) {
        let mut longer = bytes.clone();
        longer.push(extra);
        prop_assert_ne!(ContentHash::from_bytes(&bytes), ContentHash::from_bytes(&longer));
    }
}
