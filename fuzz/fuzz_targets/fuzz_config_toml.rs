#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz TOML config parsing and validation - this should never panic
        if let Ok(config) = toml::from_str::<assetbake::Config>(content) {
            let _ = config.validate(Path::new("fuzz.toml"));
        }
    }
});
