#![no_main]

use libfuzzer_sys::fuzz_target;
use skunkd_docs::catalog::validate_catalog;

fuzz_target!(|data: &[u8]| {
    if let Ok(doc) = serde_json::from_slice::<serde_json::Value>(data) {
        // Any JSON value must validate without panicking.
        let _ = validate_catalog(&doc);
    }
});
