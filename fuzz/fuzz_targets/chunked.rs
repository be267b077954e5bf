#![no_main]

use libfuzzer_sys::fuzz_target;
use crlfkit::{CrlfExpander, LfNormalizer, Transformer, expand_crlf, normalize_lf};

/// Feeds `data` in chunks of `step` bytes through a `cap`-byte output buffer.
fn drive<T: Transformer>(t: &mut T, data: &[u8], step: usize, cap: usize) -> Vec<u8> {
    let mut out = Vec::new();
    let mut dst = vec![0u8; cap];
    let chunks: Vec<&[u8]> = data.chunks(step).collect();
    for (i, chunk) in chunks.iter().enumerate() {
        let mut src = *chunk;
        loop {
            let result = t.transform(&mut dst, src, i + 1 == chunks.len());
            assert!(result.written() <= cap);
            assert!(result.consumed() <= src.len());
            out.extend_from_slice(&dst[..result.written()]);
            src = &src[result.consumed()..];
            if !result.is_short() {
                break;
            }
        }
    }
    out
}

fuzz_target!(|input: (u8, u8, Vec<u8>)| {
    let (step, cap, data) = input;
    let step = usize::from(step).max(1);
    let cap = usize::from(cap) % 16;

    // Verify: chunking and output sizing never change the result
    let got = drive(&mut LfNormalizer::new(), &data, step, cap.max(1));
    assert_eq!(got, &normalize_lf(&data)[..]);

    let got = drive(&mut CrlfExpander, &data, step, cap.max(2));
    assert_eq!(got, &expand_crlf(&data)[..]);
});
