#![no_main]

use libfuzzer_sys::fuzz_target;
use skunkd_core::catalog::Catalog;
use skunkd_docs::catalog::render_page;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(catalog) = Catalog::from_json(json) else {
        return;
    };
    let Ok(html) = render_page(&catalog) else {
        return;
    };

    // Record text must never close the data script early.
    let start = html.find("const RAW_CAPS=").expect("data literal present");
    let end = start + html[start..].find(";\n").expect("data literal terminated");
    let literal = &html[start..end];
    assert!(!literal.contains('<'), "unescaped '<' in embedded data");
});
