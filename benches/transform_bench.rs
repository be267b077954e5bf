//! Benchmarks for crlfkit.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use crlfkit::{CrlfExpander, LfNormalizer, Transformer, TransformerExt};

/// Mail-like text: 72-byte lines with the requested terminator.
fn lines(size: usize, eol: &[u8]) -> Vec<u8> {
    let line: Vec<u8> = (0..72).map(|i| b'a' + (i % 26) as u8).collect();
    let mut data = Vec::with_capacity(size);
    while data.len() < size {
        data.extend_from_slice(&line);
        data.extend_from_slice(eol);
    }
    data.truncate(size);
    data
}

fn bench_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_shot");

    for size in [64 * 1024, 1024 * 1024] {
        let crlf = lines(size, b"\r\n");
        let lf = lines(size, b"\n");

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(format!("normalize_{}kb", size / 1024), &crlf, |b, data| {
            b.iter(|| black_box(LfNormalizer::new().transform_to_bytes(black_box(data))));
        });
        group.bench_with_input(format!("expand_{}kb", size / 1024), &lf, |b, data| {
            b.iter(|| black_box(CrlfExpander.transform_to_bytes(black_box(data))));
        });
    }

    group.finish();
}

fn bench_fixed_dst(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_dst");
    let size = 1024 * 1024;
    let crlf = lines(size, b"\r\n");
    group.throughput(Throughput::Bytes(size as u64));

    for cap in [64usize, 4096] {
        group.bench_function(format!("normalize_dst_{}", cap), |b| {
            let mut dst = vec![0u8; cap];
            b.iter(|| {
                let mut lf = LfNormalizer::new();
                let mut src = &crlf[..];
                let mut total = 0usize;
                loop {
                    let result = lf.transform(&mut dst, src, true);
                    total += result.written();
                    src = &src[result.consumed()..];
                    if !result.is_short() {
                        break;
                    }
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_one_shot, bench_fixed_dst);
criterion_main!(benches);
