#![no_main]

use libfuzzer_sys::fuzz_target;
use crlfkit::{expand_crlf, normalize_lf};

fuzz_target!(|data: Vec<u8>| {
    let normalized = normalize_lf(&data);

    // Verify: no CR survives normalization
    assert!(!normalized.contains(&b'\r'));

    // Verify: normalization is idempotent
    assert_eq!(normalize_lf(&normalized), normalized);

    // Verify: expanding LF-only text and normalizing it back is lossless
    let wire = expand_crlf(&normalized);
    assert_eq!(normalize_lf(&wire), normalized);

    // Verify: every LF on the wire is preceded by CR
    for (i, &b) in wire.iter().enumerate() {
        if b == b'\n' {
            assert!(i > 0 && wire[i - 1] == b'\r');
        }
    }
});
