#![no_main]

use assetbake::domain::value_objects::NormalizedName;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(path) = std::str::from_utf8(data) {
        let name = NormalizedName::from_path(path);
        assert_eq!(name.as_str().chars().count(), path.chars().count());
        assert!(name
            .as_str()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }
});
