//! Property tests for name normalization.

use proptest::prelude::*;

use assetbake::domain::value_objects::{NormalizedName, DEFAULT_FILLER};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Output is always `[A-Za-z0-9_]*`.
    #[test]
    fn property_normalized_name_is_identifier_safe(path in any::<String>()) {
        let name = NormalizedName::from_path(&path);
        prop_assert!(
            name.as_str().chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
            "unexpected character in {:?}", name.as_str()
        );
    }

    /// PROPERTY: One output character per input character.
    #[test]
    fn property_normalized_name_preserves_char_count(path in any::<String>()) {
        let name = NormalizedName::from_path(&path);
        prop_assert_eq!(name.as_str().chars().count(), path.chars().count());
    }

    /// PROPERTY: ASCII alphanumerics pass through, everything else becomes the filler.
    #[test]
    fn property_normalized_name_keeps_alphanumerics(path in "[ -~]{0,64}") {
        let name = NormalizedName::from_path(&path);
        for (input, output) in path.chars().zip(name.as_str().chars()) {
            if input.is_ascii_alphanumeric() {
                prop_assert_eq!(input, output);
            } else {
                prop_assert_eq!(output, DEFAULT_FILLER);
            }
        }
    }

    /// PROPERTY: A custom filler is used verbatim.
    #[test]
    fn property_custom_filler_is_used(path in "[a-z./-]{1,32}", filler in "[A-Za-z0-9_]") {
        let filler = filler.chars().next().unwrap();
        let name = NormalizedName::derive(&path, filler);
        let expected: String = path
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { filler })
            .collect();
        prop_assert_eq!(name.as_str(), expected.as_str());
    }
}
