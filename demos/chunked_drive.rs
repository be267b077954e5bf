//! Drives both transforms by hand with a deliberately tiny output buffer.
//!
//! Run with:
//!     cargo run --example chunked_drive

use crlfkit::{CrlfExpander, LfNormalizer, Transformed, Transformer};

fn run<T: Transformer>(
    name: &str,
    transformer: &mut T,
    chunks: &[&[u8]],
    dst_cap: usize,
) -> Vec<u8> {
    let mut dst = vec![0u8; dst_cap];
    let mut out = Vec::new();
    let mut calls = 0;
    let mut short = 0;

    for (i, chunk) in chunks.iter().enumerate() {
        let at_eof = i + 1 == chunks.len();
        let mut src = *chunk;
        loop {
            let result = transformer.transform(&mut dst, src, at_eof);
            calls += 1;
            out.extend_from_slice(&dst[..result.written()]);
            src = &src[result.consumed()..];
            match result {
                Transformed::Complete { .. } => break,
                Transformed::DestinationShort { .. } => short += 1,
            }
        }
    }

    println!(
        "{}: {} calls, {} short, {:?}",
        name,
        calls,
        short,
        String::from_utf8_lossy(&out)
    );
    out
}

fn main() {
    // A CRLF pair split across the chunk boundary
    let chunks: [&[u8]; 3] = [b"Subject: hello\r", b"\n\r\nbody line\r", b"\n"];

    let local = run("normalize", &mut LfNormalizer::new(), &chunks, 3);
    let wire = run("expand", &mut CrlfExpander, &[&local[..]], 2);

    assert_eq!(wire, b"Subject: hello\r\n\r\nbody line\r\n");
}
